//! Facade crate for the stencil workspace.
//! Re-exports domain/kernel primitives, the catalog feature and the logger.
//! Keep this crate thin: it composes other crates and implements no business logic.

pub use stencil_catalog as catalog;
pub use stencil_domain as domain;
pub use stencil_kernel as kernel;
pub use stencil_logger as logger;

pub use stencil_catalog::{Catalog, CatalogConfig, CatalogError};
pub use stencil_domain::record::{Record, Value};
pub use stencil_kernel::KernelError;
pub use stencil_logger::{Logger, LoggerError};

/// The usual imports for an application built on the scaffold.
pub mod prelude {
    pub use stencil_catalog::processor::{DataProcessor, process_data};
    pub use stencil_catalog::{Catalog, CatalogConfig, CatalogError, CatalogErrorExt};
    pub use stencil_domain::config::AppConfig;
    pub use stencil_domain::record::{Record, Value, into_record};
    pub use stencil_kernel::json::{load_json_object, save_json_object};
    pub use stencil_kernel::transform::{Flattener, chunk, flatten};
    pub use stencil_kernel::{KernelError, KernelErrorExt};
    pub use stencil_logger::instrument::log_call;
    pub use stencil_logger::{LevelFilter, Logger};
}
