//! LoadError for reading records from JSON

/// Error type for turning raw JSON into table records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input is not valid JSON.
    #[error("Invalid record data: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level JSON value is not an array.
    #[error("Expected a JSON array of records, got {actual}")]
    NotAnArray { actual: &'static str },

    /// One of the array entries is not a JSON object.
    #[error("Record {index} is not a JSON object (got {actual})")]
    RecordNotObject { index: usize, actual: &'static str },
}

impl LoadError {
    /// Creates a new not-an-array error.
    pub fn not_an_array(value: &serde_json::Value) -> Self {
        Self::NotAnArray {
            actual: json_type_name(value),
        }
    }

    /// Creates a new record-not-object error.
    pub fn record_not_object(index: usize, value: &serde_json::Value) -> Self {
        Self::RecordNotObject {
            index,
            actual: json_type_name(value),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
