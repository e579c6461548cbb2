//! Record model: values, records, columns and JSON loading.

mod column;
mod record;
mod value;

pub use column::Column;
pub use record::{Record, Row};
pub use value::{Value, compare_fields};

use log::debug;

use crate::error::LoadError;

/// Parse a JSON array of objects into records.
///
/// No schema is enforced: records may have different fields, and nested
/// values are kept as JSON text.
///
/// # Example
///
/// ```
/// use tablekit_lib::load_records;
///
/// let records = load_records(r#"[{"id": 1, "name": "Alice"}, {"id": 2}]"#).unwrap();
/// assert_eq!(records.len(), 2);
/// ```
pub fn load_records(json: &str) -> Result<Vec<Record>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        other => return Err(LoadError::not_an_array(&other)),
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(map) => Ok(Record::from(map)),
            other => Err(LoadError::record_not_object(index, &other)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} records", records.len());
    Ok(records)
}
