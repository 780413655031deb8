use crate::error::CatalogError;
use private::Sealed;
use std::num::NonZeroUsize;
use stencil_domain::config::CatalogSettings;
use stencil_domain::constants::{DEFAULT_CAPACITY, DEFAULT_VALIDATE_ON_INSERT};
use tracing::{debug, error};

/// Immutable catalog settings.
///
/// Built through [`CatalogConfig::builder`] or converted from [`CatalogSettings`];
/// the capacity is guaranteed to be positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    name: String,
    capacity: NonZeroUsize,
    validate_on_insert: bool,
}

impl CatalogConfig {
    /// Returns a builder with capacity 100 and validation enabled.
    #[must_use = "The builder needs a name before it can build a configuration."]
    pub const fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder {
            name: NoName,
            capacity: DEFAULT_CAPACITY,
            validate_on_insert: DEFAULT_VALIDATE_ON_INSERT,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity.get()
    }

    #[must_use]
    pub const fn validate_on_insert(&self) -> bool {
        self.validate_on_insert
    }

    /// Copy of this configuration with a different capacity.
    pub(crate) fn with_capacity(&self, raw: i64) -> Result<Self, CatalogError> {
        Ok(Self { capacity: checked_capacity(raw)?, ..self.clone() })
    }
}

impl TryFrom<&CatalogSettings> for CatalogConfig {
    type Error = CatalogError;

    fn try_from(settings: &CatalogSettings) -> Result<Self, Self::Error> {
        CatalogConfig::builder()
            .name(settings.name.clone())
            .capacity(settings.capacity)
            .validate_on_insert(settings.validate_on_insert)
            .build()
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// Builder for [`CatalogConfig`]; `name` is required before [`build`](CatalogConfigBuilder::build).
#[derive(Debug)]
pub struct CatalogConfigBuilder<N: Sealed = NoName> {
    name: N,
    capacity: i64,
    validate_on_insert: bool,
}

impl CatalogConfigBuilder<NoName> {
    /// Sets the catalog name.
    pub fn name(self, name: impl Into<String>) -> CatalogConfigBuilder<WithName> {
        CatalogConfigBuilder {
            name: WithName(name.into()),
            capacity: self.capacity,
            validate_on_insert: self.validate_on_insert,
        }
    }
}

impl<N: Sealed> CatalogConfigBuilder<N> {
    /// Maximum number of records. Checked in [`build`](CatalogConfigBuilder::build).
    #[must_use = "The builder must be built to produce a configuration."]
    pub const fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether inserts must carry non-null `id`, `name` and `value`.
    #[must_use = "The builder must be built to produce a configuration."]
    pub const fn validate_on_insert(mut self, enabled: bool) -> Self {
        self.validate_on_insert = enabled;
        self
    }
}

impl CatalogConfigBuilder<WithName> {
    /// Checks the settings and produces the configuration.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidConfiguration`] if the capacity is zero or negative.
    pub fn build(self) -> Result<CatalogConfig, CatalogError> {
        let name = self.name.0;
        debug!(name = %name, capacity = self.capacity, "Building catalog config");

        let capacity = checked_capacity(self.capacity)?;

        Ok(CatalogConfig { name, capacity, validate_on_insert: self.validate_on_insert })
    }
}

fn checked_capacity(raw: i64) -> Result<NonZeroUsize, CatalogError> {
    usize::try_from(raw).ok().and_then(NonZeroUsize::new).ok_or_else(|| {
        error!("Invalid capacity value: {raw}");
        CatalogError::InvalidConfiguration {
            message: format!("capacity must be positive, got {raw}").into(),
            context: None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CatalogConfig::builder().name("test").build().unwrap();
        assert_eq!(config.name(), "test");
        assert_eq!(config.capacity(), 100);
        assert!(config.validate_on_insert());
    }

    #[test]
    fn test_builder_custom_values() {
        let config = CatalogConfig::builder()
            .capacity(50)
            .name("custom")
            .validate_on_insert(false)
            .build()
            .unwrap();
        assert_eq!(config.capacity(), 50);
        assert!(!config.validate_on_insert());
    }

    #[test]
    fn test_non_positive_capacity_is_rejected() {
        for raw in [0, -1, i64::MIN] {
            let err = CatalogConfig::builder().name("bad").capacity(raw).build().unwrap_err();
            assert!(matches!(err, CatalogError::InvalidConfiguration { .. }), "capacity {raw}");
        }
    }

    #[test]
    fn test_settings_conversion() {
        let settings = CatalogSettings { name: "inv".into(), capacity: 3, validate_on_insert: false };
        let config = CatalogConfig::try_from(&settings).unwrap();
        assert_eq!(config.name(), "inv");
        assert_eq!(config.capacity(), 3);
        assert!(!config.validate_on_insert());

        let zero = CatalogSettings { capacity: 0, ..settings };
        assert!(CatalogConfig::try_from(&zero).is_err());
    }

    #[test]
    fn test_with_capacity_keeps_other_fields() {
        let config = CatalogConfig::builder().name("x").validate_on_insert(false).build().unwrap();
        let resized = config.with_capacity(7).unwrap();
        assert_eq!(resized.name(), "x");
        assert_eq!(resized.capacity(), 7);
        assert!(!resized.validate_on_insert());
        assert!(config.with_capacity(0).is_err());
    }
}
