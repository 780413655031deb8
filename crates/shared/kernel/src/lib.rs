//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, JSON persistence and pure
//! mapping transforms that features and apps build on.
//!
//! ## Flattening
//! ```rust
//! use serde_json::json;
//! use stencil_kernel::transform::flatten;
//!
//! let nested = json!({ "a": { "b": 1, "c": 2 } });
//! let flat = flatten(nested.as_object().unwrap());
//! assert_eq!(serde_json::Value::Object(flat), json!({ "a.b": 1, "a.c": 2 }));
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use stencil_kernel::config::load_config;
//! let cfg: stencil_kernel::domain::config::AppConfig = load_config(Some("stencil")).unwrap();
//! ```
pub mod config;
mod error;
pub mod json;
pub mod transform;

pub use crate::error::{KernelError, KernelErrorExt};
pub use stencil_domain as domain;
