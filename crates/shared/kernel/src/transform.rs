//! Pure transforms over records and slices.

use crate::error::KernelError;
use serde_json::Value;
use stencil_domain::constants::DEFAULT_SEPARATOR;
use stencil_domain::record::Record;
use tracing::debug;

/// Rewrites nested objects into a single level with path-joined keys.
///
/// Keys are visited in the object's own order. Non-object values (arrays
/// included) are copied as-is. When two paths collide the later one wins.
///
/// ```rust
/// use serde_json::json;
/// use stencil_kernel::transform::Flattener;
///
/// let nested = json!({ "db": { "host": "localhost" } });
/// let flat = Flattener::new().separator("__").prefix("app").flatten(nested.as_object().unwrap());
/// assert_eq!(flat["app__db__host"], "localhost");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Flattener<'a> {
    separator: &'a str,
    prefix: &'a str,
}

impl Default for Flattener<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Flattener<'a> {
    /// Dot separator, no prefix.
    #[must_use]
    pub const fn new() -> Self {
        Self { separator: DEFAULT_SEPARATOR, prefix: "" }
    }

    #[must_use]
    pub const fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Path prepended to every top-level key. Empty means none.
    #[must_use]
    pub const fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    #[must_use]
    pub fn flatten(&self, object: &Record) -> Record {
        let mut flat = Record::new();
        self.flatten_into(object, self.prefix, &mut flat);
        debug!(
            separator = self.separator,
            prefix = self.prefix,
            "Flattened object: {} keys -> {} keys",
            object.len(),
            flat.len()
        );
        flat
    }

    fn flatten_into(&self, object: &Record, prefix: &str, flat: &mut Record) {
        for (key, value) in object {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}{}{key}", self.separator)
            };

            match value {
                Value::Object(nested) => self.flatten_into(nested, &path, flat),
                other => {
                    flat.insert(path, other.clone());
                }
            }
        }
    }
}

/// Flattens with the default `.` separator and no prefix.
#[must_use]
pub fn flatten(object: &Record) -> Record {
    Flattener::new().flatten(object)
}

/// Splits `items` into consecutive chunks of `size`; the last may be shorter.
///
/// # Errors
/// Returns [`KernelError::InvalidArgument`] when `size` is zero.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, KernelError> {
    if size == 0 {
        return Err(KernelError::InvalidArgument {
            message: "chunk size must be positive, got 0".into(),
            context: None,
        });
    }

    let chunks: Vec<Vec<T>> = items.chunks(size).map(<[T]>::to_vec).collect();
    debug!("Created {} chunks from {} items", chunks.len(), items.len());
    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn chunk_splits_with_short_tail() {
        let chunks = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
        assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn chunk_of_empty_slice_is_empty() {
        assert!(chunk::<u8>(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn chunk_larger_than_input_yields_one_chunk() {
        assert_eq!(chunk(&["a", "b"], 10).unwrap(), vec![vec!["a", "b"]]);
    }

    #[test]
    fn chunk_rejects_zero_size() {
        let err = chunk(&[1], 0).unwrap_err();
        assert!(matches!(err, KernelError::InvalidArgument { .. }));
    }

    #[test]
    fn empty_nested_object_disappears() {
        let flat = flatten(&object(json!({ "a": {}, "b": 1 })));
        assert_eq!(Value::Object(flat), json!({ "b": 1 }));
    }

    #[test]
    fn collisions_are_last_write_wins() {
        let flat = flatten(&object(json!({ "a.b": 1, "a": { "b": 2 } })));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["a.b"], 2);
    }

    #[test]
    fn key_order_follows_input_order() {
        let flat = flatten(&object(json!({ "z": 1, "m": { "y": 2, "b": 3 }, "a": 4 })));
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "m.y", "m.b", "a"]);
    }
}
