use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::path::Path;
use stencil::catalog::{Catalog, CatalogConfig};
use stencil::domain::config::CatalogSettings;
use stencil::domain::record::into_record;
use stencil::kernel::json::{load_json_object, save_json_object};
use stencil::kernel::transform::{Flattener, chunk};
use stencil::logger::instrument::log_call;
use tracing::warn;

const ITEMS_KEY: &str = "items";

/// Inserts every record of `file` into a catalog built from `settings`.
pub(crate) fn ingest(settings: &CatalogSettings, file: &Path, filter: Option<&str>) -> Result<Value> {
    let config = CatalogConfig::try_from(settings).context("Invalid catalog settings")?;
    let mut catalog = Catalog::new(config);

    for (index, entry) in read_items(file)?.into_iter().enumerate() {
        let Some(record) = into_record(entry) else {
            warn!("Skipping item #{index}: not a JSON object");
            continue;
        };

        if let Err(err) = log_call("catalog.insert", record, |record| catalog.insert(record)) {
            warn!("Skipping item #{index}: {err}");
        }
    }

    let items = match filter.map(parse_filter).transpose()? {
        Some((key, value)) => catalog.items_matching(&key, &value),
        None => catalog.items(),
    };

    Ok(json!({
        "catalog": catalog.describe(),
        "items": items.into_iter().map(Value::Object).collect::<Vec<_>>(),
    }))
}

/// Flattens `file`, writing to `out` when given, otherwise returning the result.
pub(crate) fn flatten_file(
    file: &Path,
    separator: &str,
    prefix: &str,
    out: Option<&Path>,
) -> Result<Option<Value>> {
    let object = load_json_object(file)?;
    let flat = Flattener::new().separator(separator).prefix(prefix).flatten(&object);

    match out {
        Some(path) => {
            save_json_object(&flat, path)?;
            Ok(None)
        }
        None => Ok(Some(Value::Object(flat))),
    }
}

pub(crate) fn chunk_file(file: &Path, size: usize) -> Result<Value> {
    let chunks = chunk(&read_items(file)?, size)?;
    Ok(Value::Array(chunks.into_iter().map(Value::Array).collect()))
}

fn read_items(file: &Path) -> Result<Vec<Value>> {
    let mut object = load_json_object(file)?;
    match object.remove(ITEMS_KEY) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => bail!("`{ITEMS_KEY}` in {} is not an array", file.display()),
        None => bail!("{} has no `{ITEMS_KEY}` array", file.display()),
    }
}

/// Splits `key=value`; the value is JSON when it parses, plain text otherwise.
fn parse_filter(raw: &str) -> Result<(String, Value)> {
    let Some((key, value)) = raw.split_once('=') else {
        bail!("filter must look like KEY=VALUE, got `{raw}`");
    };
    if key.is_empty() {
        bail!("filter key cannot be empty");
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Ok((key.to_owned(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_values_parse_as_json_or_text() {
        assert_eq!(parse_filter("id=1").unwrap(), ("id".to_owned(), json!(1)));
        assert_eq!(parse_filter("ok=true").unwrap(), ("ok".to_owned(), json!(true)));
        assert_eq!(parse_filter("name=item1").unwrap(), ("name".to_owned(), json!("item1")));
        assert_eq!(parse_filter("eq=a=b").unwrap(), ("eq".to_owned(), json!("a=b")));
    }

    #[test]
    fn malformed_filters_are_rejected() {
        assert!(parse_filter("novalue").is_err());
        assert!(parse_filter("=1").is_err());
    }
}
