//! # Catalog
//!
//! An append-only, capacity-bounded collection of [`Record`]s with an optional
//! required-field policy checked on insert.
//!
//! ## Architecture
//!
//! 1.  **[`CatalogConfig`]:** immutable settings (name, capacity, validation toggle),
//!     checked once when built.
//! 2.  **[`Catalog`]:** the ordered store. Inserts either succeed completely or leave
//!     the catalog untouched.
//! 3.  **[`processor`]:** a seam for batch transforms over record lists.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use stencil_catalog::{Catalog, CatalogConfig, CatalogError};
//! use stencil_domain::record::into_record;
//!
//! # fn main() -> Result<(), CatalogError> {
//! let config = CatalogConfig::builder().name("inventory").capacity(2).build()?;
//! let mut catalog = Catalog::new(config);
//!
//! catalog.insert(into_record(json!({ "id": 1, "name": "item1", "value": 10 })).unwrap())?;
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.describe(), "Catalog(name='inventory', items=1/2)");
//! # Ok(())
//! # }
//! ```

mod catalog;
mod config;
mod error;
pub mod processor;
pub mod validation;

pub use crate::catalog::Catalog;
pub use crate::config::{CatalogConfig, CatalogConfigBuilder, NoName, WithName};
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use stencil_domain::record::{Record, Value};
