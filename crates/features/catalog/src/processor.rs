//! Batch processing seam.
//!
//! Anything implementing [`DataProcessor`] (closures included) can transform a
//! list of records; [`process_data`] adds the optional non-empty check and logging.

use crate::error::CatalogError;
use stencil_domain::record::Record;
use tracing::{debug, error, info};

/// Transforms a batch of records.
pub trait DataProcessor {
    fn process(&self, data: Vec<Record>) -> Vec<Record>;
}

impl<F> DataProcessor for F
where
    F: Fn(Vec<Record>) -> Vec<Record>,
{
    fn process(&self, data: Vec<Record>) -> Vec<Record> {
        self(data)
    }
}

/// Runs `processor` over `data`.
///
/// # Errors
/// Returns [`CatalogError::EmptyInput`] when `validate` is set and `data` is empty.
pub fn process_data<P>(
    data: Vec<Record>,
    processor: &P,
    validate: bool,
) -> Result<Vec<Record>, CatalogError>
where
    P: DataProcessor + ?Sized,
{
    debug!("Processing data with {} items, validate={validate}", data.len());

    if validate && data.is_empty() {
        error!("Data validation failed: empty data provided");
        return Err(CatalogError::EmptyInput {
            message: "data cannot be empty when validation is enabled".into(),
            context: None,
        });
    }

    let input = data.len();
    let result = processor.process(data);
    info!("Data processing completed. Input: {input} items, Output: {} items", result.len());

    Ok(result)
}
