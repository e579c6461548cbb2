//! Value enum for dynamic field values

use std::cmp::Ordering;
use std::fmt;

/// A dynamic value held by one record field.
///
/// Tables only deal with primitive values. Nested JSON (arrays, objects) is
/// kept as its compact JSON text so it can still be searched and displayed.
///
/// # Example
///
/// ```
/// use tablekit_lib::Value;
///
/// let name = Value::from("Alice");
/// let age = Value::from(25);
/// let empty = Value::Null;
///
/// assert_eq!(age.to_string(), "25");
/// assert_eq!(empty.to_string(), "");
/// assert!(name.contains_lowercase("lic"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/missing value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// String value.
    String(String),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    /// Returns the numeric value if this is an `Int` or `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Case-insensitive substring test against an already lowercased needle.
    ///
    /// Null stringifies to the empty string, so it only matches an empty needle.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            Value::Null => needle.is_empty(),
            Value::String(s) => s.to_lowercase().contains(needle),
            other => other.to_string().to_lowercase().contains(needle),
        }
    }

    /// Compares two values by their native ordering.
    ///
    /// Numbers compare numerically (integers and floats mix), strings
    /// lexicographically and booleans with `false < true`. Every other
    /// pairing, including null, mixed types and NaN, compares as equal.
    pub fn native_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }
}

/// Compares two optional field values, treating missing fields as equal to anything.
pub fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.native_cmp(b),
        _ => Ordering::Equal,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            nested => Value::String(nested.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_stringifies_primitives() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Float(25.0).to_string(), "25");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::from("bob").to_string(), "bob");
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        assert!(Value::from("Bob Smith").contains_lowercase("bo"));
        assert!(Value::from("ÉCOLE").contains_lowercase("école"));
        assert!(Value::Int(1234).contains_lowercase("23"));
        assert!(!Value::Null.contains_lowercase("a"));
    }

    #[test]
    fn test_native_cmp_numbers_mix() {
        assert_eq!(Value::Int(2).native_cmp(&Value::Float(2.5)), Ordering::Less);
        assert_eq!(Value::Float(3.0).native_cmp(&Value::Int(3)), Ordering::Equal);
        assert_eq!(Value::Int(10).native_cmp(&Value::Int(9)), Ordering::Greater);
    }

    #[test]
    fn test_native_cmp_strings_are_lexicographic() {
        assert_eq!(
            Value::from("10").native_cmp(&Value::from("9")),
            Ordering::Less
        );
        assert_eq!(
            Value::from("Bob").native_cmp(&Value::from("alice")),
            Ordering::Less
        );
    }

    #[test]
    fn test_native_cmp_mixed_and_null_are_equal() {
        assert_eq!(Value::Null.native_cmp(&Value::Int(1)), Ordering::Equal);
        assert_eq!(Value::from("1").native_cmp(&Value::Int(2)), Ordering::Equal);
        assert_eq!(
            Value::Float(f64::NAN).native_cmp(&Value::Float(1.0)),
            Ordering::Equal
        );
        assert_eq!(compare_fields(None, Some(&Value::Int(1))), Ordering::Equal);
    }

    #[test]
    fn test_from_json_keeps_nested_as_text() {
        let v = Value::from(serde_json::json!({"a": [1, 2]}));
        assert_eq!(v, Value::from(r#"{"a":[1,2]}"#));
        assert_eq!(Value::from(serde_json::json!(30)), Value::Int(30));
        assert_eq!(Value::from(serde_json::json!(1.5)), Value::Float(1.5));
    }
}
