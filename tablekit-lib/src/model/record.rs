//! Dynamic table record

use super::Value;

/// Trait for anything the table pipeline can filter and sort.
///
/// [`Record`] implements it for dynamic JSON-shaped data; typed rows can
/// implement it directly.
///
/// # Example
///
/// ```
/// use tablekit_lib::{Row, Value};
///
/// struct User {
///     name: Value,
///     age: Value,
/// }
///
/// impl Row for User {
///     fn field(&self, key: &str) -> Option<&Value> {
///         match key {
///             "name" => Some(&self.name),
///             "age" => Some(&self.age),
///             _ => None,
///         }
///     }
///
///     fn values(&self) -> impl Iterator<Item = &Value> {
///         [&self.name, &self.age].into_iter()
///     }
///
///     fn keys(&self) -> impl Iterator<Item = &str> {
///         ["name", "age"].into_iter()
///     }
/// }
/// ```
pub trait Row {
    /// Looks up a field by key.
    fn field(&self, key: &str) -> Option<&Value>;

    /// Iterates over every field value, in field order.
    fn values(&self) -> impl Iterator<Item = &Value>;

    /// Iterates over every field key, in field order.
    fn keys(&self) -> impl Iterator<Item = &str>;
}

/// A record with an ordered set of named fields.
///
/// Field order is kept so that columns derived from a record follow the
/// order the data was written in.
///
/// # Example
///
/// ```
/// use tablekit_lib::{Record, Row, Value};
///
/// let record = Record::new()
///     .set("id", 1)
///     .set("name", "Alice");
///
/// assert_eq!(record.field("name"), Some(&Value::from("Alice")));
/// assert_eq!(record.id(), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, replacing an existing field with the same key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a field value in place, replacing an existing field with the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Returns the value of a field, or `None` if the field is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the explicit `id` field, if the record has one.
    pub fn id(&self) -> Option<&Value> {
        self.get("id")
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(key, value)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Row for Record {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}
