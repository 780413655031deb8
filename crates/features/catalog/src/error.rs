use std::borrow::Cow;

/// Error types specific to the catalog feature.
#[stencil_derive::stencil_error]
pub enum CatalogError {
    /// Settings that cannot produce a usable catalog (e.g. zero capacity).
    #[error("Invalid catalog configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The catalog already holds `capacity` records.
    #[error("Catalog is full{}: limit of {capacity} items reached", format_context(.context))]
    CapacityExceeded { capacity: usize, context: Option<Cow<'static, str>> },

    /// A record lacks a required field or carries `null` in one.
    #[error("Record validation failed{}: {message}", format_context(.context))]
    ValidationFailed {
        message: Cow<'static, str>,
        fields: Vec<&'static str>,
        context: Option<Cow<'static, str>>,
    },

    /// Validated processing was asked to run on no data.
    #[error("Empty input{}: {message}", format_context(.context))]
    EmptyInput { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
