use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::validation::validate_record;
use std::fmt;
use stencil_domain::record::{Record, Value};
use tracing::{debug, info, warn};

/// Ordered, capacity-bounded record store.
///
/// * `len() <= capacity()` at all times.
/// * With validation enabled, every stored record had non-null `id`, `name` and
///   `value` when it was inserted.
/// * Records keep insertion order; nothing is reordered or deduplicated.
///
/// Records are owned by the catalog and handed out as clones, so callers can
/// never mutate stored state.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    items: Vec<Record>,
}

impl Catalog {
    /// Creates an empty catalog bound to `config`.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        info!(
            name = config.name(),
            capacity = config.capacity(),
            validate = config.validate_on_insert(),
            "Catalog initialized"
        );
        Self { config, items: Vec::new() }
    }

    /// Appends `record`.
    ///
    /// Capacity is checked first, then the required-field policy. A rejected
    /// record leaves the catalog unchanged.
    ///
    /// # Errors
    /// * [`CatalogError::CapacityExceeded`] when the catalog is full.
    /// * [`CatalogError::ValidationFailed`] when validation is on and a required
    ///   field is missing or `null`.
    pub fn insert(&mut self, record: Record) -> Result<(), CatalogError> {
        debug!(?record, "Adding item");

        let capacity = self.config.capacity();
        if self.items.len() >= capacity {
            warn!(
                "Cannot add item: capacity ({capacity}) reached. Current items: {}",
                self.items.len()
            );
            return Err(CatalogError::CapacityExceeded { capacity, context: None });
        }

        if self.config.validate_on_insert() {
            validate_record(&record)?;
        }

        self.items.push(record);
        debug!("Item added. Total items: {}", self.items.len());
        Ok(())
    }

    /// Clones of every record, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<Record> {
        debug!("Returning all {} items", self.items.len());
        self.items.clone()
    }

    /// Clones of the records whose `key` field equals `value`, in insertion order.
    ///
    /// Records without `key` never match, not even when `value` is `null`.
    #[must_use]
    pub fn items_matching(&self, key: &str, value: &Value) -> Vec<Record> {
        let matched: Vec<Record> =
            self.items.iter().filter(|item| item.get(key) == Some(value)).cloned().collect();
        debug!("Filter {key}={value}: {} of {} items match", matched.len(), self.items.len());
        matched
    }

    /// Filters only when both `key` and `value` are given; otherwise returns everything.
    #[must_use]
    pub fn query(&self, key: Option<&str>, value: Option<&Value>) -> Vec<Record> {
        match (key, value) {
            (Some(key), Some(value)) => self.items_matching(key, value),
            _ => self.items(),
        }
    }

    /// Borrowing iterator over the stored records.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Record> {
        self.items.iter()
    }

    /// Changes the capacity through a fresh, re-checked configuration.
    ///
    /// # Errors
    /// Returns [`CatalogError::InvalidConfiguration`] when `capacity` is not
    /// positive or is smaller than the number of stored records.
    pub fn resize(&mut self, capacity: i64) -> Result<(), CatalogError> {
        let config = self.config.with_capacity(capacity)?;
        if config.capacity() < self.items.len() {
            return Err(CatalogError::InvalidConfiguration {
                message: format!(
                    "capacity {capacity} is below the current item count {}",
                    self.items.len()
                )
                .into(),
                context: None,
            });
        }

        info!(from = self.config.capacity(), to = config.capacity(), "Catalog resized");
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Free slots left before inserts start failing.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.capacity() - self.items.len()
    }

    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Human-readable summary, e.g. `Catalog(name='inventory', items=1/2)`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Catalog(name='{}', items={}/{})",
            self.config.name(),
            self.items.len(),
            self.config.capacity()
        )
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
