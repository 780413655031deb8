//! Opt-in call instrumentation.
//!
//! Wrap a single call site instead of decorating a function:
//!
//! ```rust
//! use stencil_logger::instrument::log_call;
//!
//! let total = log_call("sum", (2, 3), |(a, b)| Ok::<_, std::fmt::Error>(a + b));
//! assert_eq!(total, Ok(5));
//! ```

use std::fmt::{Debug, Display};

/// Log target shared by every instrumented call.
pub const CALL_TARGET: &str = "stencil::call";

/// Runs `f(args)`, logging the arguments and the outcome.
///
/// The call and its return value are logged at `DEBUG`; a failure is logged at
/// `ERROR` and returned untouched.
///
/// # Errors
/// Returns whatever `f` returns.
pub fn log_call<A, T, E, F>(name: &str, args: A, f: F) -> Result<T, E>
where
    A: Debug,
    T: Debug,
    E: Display,
    F: FnOnce(A) -> Result<T, E>,
{
    tracing::debug!(target: CALL_TARGET, "Calling {name} with args={args:?}");

    match f(args) {
        Ok(value) => {
            tracing::debug!(target: CALL_TARGET, "{name} returned: {value:?}");
            Ok(value)
        }
        Err(err) => {
            tracing::error!(target: CALL_TARGET, "{name} failed: {err}");
            Err(err)
        }
    }
}
