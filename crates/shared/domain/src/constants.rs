/// Record identifier field.
pub const FIELD_ID: &str = "id";
/// Record display-name field.
pub const FIELD_NAME: &str = "name";
/// Record payload field.
pub const FIELD_VALUE: &str = "value";

/// Fields every record must carry (non-null) when validation is enabled.
pub const REQUIRED_FIELDS: [&str; 3] = [FIELD_ID, FIELD_NAME, FIELD_VALUE];

pub const DEFAULT_CAPACITY: i64 = 100;
pub const DEFAULT_VALIDATE_ON_INSERT: bool = true;
pub const DEFAULT_SEPARATOR: &str = ".";
