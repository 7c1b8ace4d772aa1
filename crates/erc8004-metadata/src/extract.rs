//! Optional-field extraction over untrusted JSON objects.
//!
//! Each helper returns `Ok(None)` when the field is absent or JSON null,
//! and `Err(FieldError)` when the value has the wrong JSON kind. A list is
//! only accepted when every element is a string.

use erc8004_core::ContentKey;
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

pub type Object = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized field whose value does not fit its expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub expected: &'static str,
    pub found: JsonKind,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}' expected {}, found {}", self.field, self.expected, self.found)
    }
}

impl std::error::Error for FieldError {}

pub type FieldResult<T> = std::result::Result<Option<T>, FieldError>;

fn present<'a>(object: &'a Object, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

fn mismatch(field: &'static str, expected: &'static str, value: &Value) -> FieldError {
    FieldError {
        field,
        expected,
        found: JsonKind::of(value),
    }
}

pub fn optional_string(object: &Object, field: &'static str) -> FieldResult<String> {
    match present(object, field) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(other) => Err(mismatch(field, "string", other)),
    }
}

pub fn optional_bool(object: &Object, field: &'static str) -> FieldResult<bool> {
    match present(object, field) {
        None => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(other) => Err(mismatch(field, "bool", other)),
    }
}

pub fn optional_string_list(object: &Object, field: &'static str) -> FieldResult<Vec<String>> {
    let Some(items) = optional_array(object, field)? else {
        return Ok(None);
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(value) => Ok(value.clone()),
            other => Err(mismatch(field, "array of strings", other)),
        })
        .collect::<std::result::Result<Vec<_>, _>>()
        .map(Some)
}

pub fn optional_array<'a>(object: &'a Object, field: &'static str) -> FieldResult<&'a Vec<Value>> {
    match present(object, field) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(mismatch(field, "array", other)),
    }
}

pub fn optional_object<'a>(object: &'a Object, field: &'static str) -> FieldResult<&'a Object> {
    match present(object, field) {
        None => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner)),
        Some(other) => Err(mismatch(field, "object", other)),
    }
}

/// Reads fields from one JSON object on behalf of a document.
///
/// Invalid fields are logged and read as absent, so a bad field never
/// stops extraction of its siblings.
#[derive(Clone, Copy)]
pub struct FieldReader<'a> {
    object: &'a Object,
    key: &'a ContentKey,
}

impl<'a> FieldReader<'a> {
    pub fn new(object: &'a Object, key: &'a ContentKey) -> Self {
        Self { object, key }
    }

    pub fn string(&self, field: &'static str) -> Option<String> {
        self.settle(optional_string(self.object, field))
    }

    pub fn bool(&self, field: &'static str) -> Option<bool> {
        self.settle(optional_bool(self.object, field))
    }

    pub fn strings(&self, field: &'static str) -> Option<Vec<String>> {
        self.settle(optional_string_list(self.object, field))
    }

    pub fn array(&self, field: &'static str) -> Option<&'a Vec<Value>> {
        self.settle(optional_array(self.object, field))
    }

    /// Reader over a nested object field, sharing this reader's key.
    pub fn nested(&self, field: &'static str) -> Option<FieldReader<'a>> {
        self.settle(optional_object(self.object, field))
            .map(|inner| FieldReader::new(inner, self.key))
    }

    /// True when the field exists and is not JSON null.
    pub fn has(&self, field: &str) -> bool {
        present(self.object, field).is_some()
    }

    fn settle<T>(&self, result: FieldResult<T>) -> Option<T> {
        match result {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    key = %self.key,
                    field = err.field,
                    expected = err.expected,
                    found = %err.found,
                    "Ignoring invalid metadata field"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn absent_and_null_are_not_errors() {
        let obj = object(json!({ "name": null }));
        assert_eq!(optional_string(&obj, "name"), Ok(None));
        assert_eq!(optional_string(&obj, "missing"), Ok(None));
        assert_eq!(optional_bool(&obj, "name"), Ok(None));
        assert_eq!(optional_string_list(&obj, "name"), Ok(None));
        assert!(optional_object(&obj, "name").unwrap().is_none());
    }

    #[test]
    fn wrong_kinds_are_field_errors() {
        let obj = object(json!({ "name": 7, "active": "yes", "tools": "a,b", "proof": [] }));
        assert_eq!(
            optional_string(&obj, "name"),
            Err(FieldError { field: "name", expected: "string", found: JsonKind::Number })
        );
        assert_eq!(optional_bool(&obj, "active").unwrap_err().found, JsonKind::String);
        assert_eq!(optional_string_list(&obj, "tools").unwrap_err().expected, "array");
        assert_eq!(optional_object(&obj, "proof").unwrap_err().found, JsonKind::Array);
    }

    #[test]
    fn string_lists_keep_order_and_reject_mixed_elements() {
        let obj = object(json!({ "ok": ["b", "a", "b"], "mixed": ["a", 1], "empty": [] }));
        assert_eq!(
            optional_string_list(&obj, "ok"),
            Ok(Some(vec!["b".to_string(), "a".to_string(), "b".to_string()]))
        );
        assert_eq!(optional_string_list(&obj, "empty"), Ok(Some(Vec::new())));
        let err = optional_string_list(&obj, "mixed").unwrap_err();
        assert_eq!(err.expected, "array of strings");
        assert_eq!(err.found, JsonKind::Number);
        assert_eq!(err.to_string(), "field 'mixed' expected array of strings, found number");
    }

    #[test]
    fn reader_defaults_invalid_fields() {
        let key = ContentKey::parse("QmReader").unwrap();
        let obj = object(json!({
            "name": "agent",
            "active": 1,
            "nested": { "inner": "value" },
            "notNested": "x"
        }));
        let reader = FieldReader::new(&obj, &key);
        assert_eq!(reader.string("name").as_deref(), Some("agent"));
        assert_eq!(reader.bool("active"), None);
        assert!(reader.has("active"));
        assert!(!reader.has("missing"));
        let nested = reader.nested("nested").expect("nested object");
        assert_eq!(nested.string("inner").as_deref(), Some("value"));
        assert!(reader.nested("notNested").is_none());
    }
}
