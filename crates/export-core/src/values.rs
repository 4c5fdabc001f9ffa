//! Value representations for exportable records.
//!
//! This module defines the scalar field values and the ordered record type
//! that the rest of the pipeline consumes.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// A single field value within a record.
///
/// Only flat scalar values are representable. Nested arrays and objects have
/// no variant here, so they are rejected when an encoded payload is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Absent value
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer or floating point number
    Number(Number),

    /// String value
    String(String),
}

impl FieldValue {
    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Number(Number::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        Number::from_f64(f).map(Self::Number).unwrap_or(Self::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// One exportable row: an ordered mapping from field name to value.
///
/// Field order is the order fields were inserted, or the order they appear in
/// the source JSON document, and is preserved through deserialization.
/// Setting an existing field replaces its value in place without moving it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, preserving the position of an existing field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Field names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Field values in record order.
    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Iterate over `(name, value)` pairs in record order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of field names to scalar values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut record = Record::new();
                while let Some((name, value)) = access.next_entry::<String, FieldValue>()? {
                    record.set(name, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_from_json_scalars() {
        let v: FieldValue = serde_json::from_str("null").unwrap();
        assert!(v.is_null());

        let v: FieldValue = serde_json::from_str("true").unwrap();
        assert_eq!(v.as_bool(), Some(true));

        let v: FieldValue = serde_json::from_str("42").unwrap();
        assert_eq!(v, FieldValue::from(42));

        let v: FieldValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(v.as_str(), Some("hello"));
    }

    #[test]
    fn test_field_value_rejects_nested() {
        assert!(serde_json::from_str::<FieldValue>("[1, 2]").is_err());
        assert!(serde_json::from_str::<FieldValue>("{\"a\": 1}").is_err());
    }

    #[test]
    fn test_record_preserves_field_order() {
        let record: Record =
            serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_record_set_replaces_in_place() {
        let mut record = Record::new();
        record.set("a", 1);
        record.set("b", 2);
        record.set("a", 3);

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&FieldValue::from(3)));
    }

    #[test]
    fn test_record_duplicate_json_keys_last_wins() {
        let record: Record = serde_json::from_str(r#"{"a": 1, "a": 2}"#).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("a"), Some(&FieldValue::from(2)));
    }

    #[test]
    fn test_record_serialize_round_trip() {
        let record: Record = [
            ("id", FieldValue::from(7)),
            ("name", FieldValue::from("seven")),
            ("active", FieldValue::from(true)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":7,"name":"seven","active":true}"#);

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
