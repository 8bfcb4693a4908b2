use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::schema::error::SchemaError;

pub const DATASET_TYPE: &str = "dataset_type";
pub const DATASET_FIELDS: &str = "dataset_fields";
pub const RESOURCE_FIELDS: &str = "resource_fields";

/// A ckanext-scheming schema document.
///
/// Backed by an insertion-ordered JSON object so that top-level keys and the
/// keys of every field come back out in the order they went in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDocument(Map<String, Value>);

impl SchemaDocument {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wrap a parsed value, rejecting anything that is not an object
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(SchemaError::malformed(format!(
                "top level must be an object, found {}",
                value_kind(&other)
            ))),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn dataset_type(&self) -> Option<&str> {
        self.0.get(DATASET_TYPE).and_then(Value::as_str)
    }

    pub fn dataset_fields(&self) -> Result<Vec<FieldSpec>, SchemaError> {
        self.fields(DATASET_FIELDS)
    }

    pub fn resource_fields(&self) -> Result<Vec<FieldSpec>, SchemaError> {
        self.fields(RESOURCE_FIELDS)
    }

    /// Copy out the field sequence stored under `key`.
    ///
    /// Fails when the key is missing, is not an array, holds a non-object entry,
    /// an entry without a string `field_name`, or a repeated `field_name`.
    pub fn fields(&self, key: &str) -> Result<Vec<FieldSpec>, SchemaError> {
        let entries = match self.0.get(key) {
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(SchemaError::malformed(format!(
                    "'{}' must be an array, found {}",
                    key,
                    value_kind(other)
                )))
            }
            None => return Err(SchemaError::malformed(format!("missing '{}'", key))),
        };

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            let field = FieldSpec::from_value(entry.clone())
                .map_err(|reason| SchemaError::malformed(format!("{}[{}]: {}", key, index, reason)))?;

            if !seen.insert(field.field_name().to_string()) {
                return Err(SchemaError::malformed(format!(
                    "{}[{}]: duplicate field_name '{}'",
                    key,
                    index,
                    field.field_name()
                )));
            }

            fields.push(field);
        }

        Ok(fields)
    }
}

/// One field entry of a schema document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSpec(Map<String, Value>);

impl FieldSpec {
    pub fn new(field_name: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("field_name".into(), Value::String(field_name.into()));
        Self(map)
    }

    fn from_value(value: Value) -> Result<Self, String> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(format!("field must be an object, found {}", value_kind(&other))),
        };

        match map.get("field_name") {
            Some(Value::String(_)) => Ok(Self(map)),
            Some(other) => Err(format!("field_name must be a string, found {}", value_kind(other))),
            None => Err("field is missing 'field_name'".to_string()),
        }
    }

    pub fn field_name(&self) -> &str {
        self.0.get("field_name").and_then(Value::as_str).unwrap_or_default()
    }

    /// `None` when the field carries no boolean `required` flag
    pub fn required(&self) -> Option<bool> {
        self.0.get("required").and_then(Value::as_bool)
    }

    pub fn set_required(&mut self, required: bool) {
        self.set("required", required);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a key, keeping its position if it already exists
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        match self.0.get_mut(key) {
            Some(slot) => *slot = value.into(),
            None => {
                self.0.insert(key.to_string(), value.into());
            }
        }
    }

    /// Builder form of [`FieldSpec::set`]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<FieldSpec> for Value {
    fn from(field: FieldSpec) -> Self {
        Value::Object(field.0)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> SchemaDocument {
        SchemaDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_fields_preserve_order_and_extra_keys() {
        let schema = doc(json!({
            "dataset_fields": [
                {"field_name": "title", "label": "Title", "required": true},
                {"field_name": "notes", "preset": "markdown"}
            ],
            "resource_fields": []
        }));

        let fields = schema.dataset_fields().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field_name(), "title");
        assert_eq!(fields[0].required(), Some(true));
        assert_eq!(fields[1].required(), None);
        assert_eq!(fields[1].get("preset"), Some(&json!("markdown")));

        let keys: Vec<_> = fields[0].as_map().keys().cloned().collect();
        assert_eq!(keys, vec!["field_name", "label", "required"]);
    }

    #[test]
    fn test_missing_and_mistyped_sequences_are_malformed() {
        let schema = doc(json!({"dataset_fields": []}));
        assert!(matches!(schema.resource_fields(), Err(SchemaError::Malformed { .. })));

        let schema = doc(json!({"dataset_fields": {"field_name": "title"}}));
        assert!(matches!(schema.dataset_fields(), Err(SchemaError::Malformed { .. })));
    }

    #[test]
    fn test_bad_entries_are_malformed() {
        let schema = doc(json!({"dataset_fields": ["title"]}));
        assert!(matches!(schema.dataset_fields(), Err(SchemaError::Malformed { .. })));

        let schema = doc(json!({"dataset_fields": [{"label": "Title"}]}));
        assert!(matches!(schema.dataset_fields(), Err(SchemaError::Malformed { .. })));

        let schema = doc(json!({"dataset_fields": [{"field_name": 7}]}));
        assert!(matches!(schema.dataset_fields(), Err(SchemaError::Malformed { .. })));
    }

    #[test]
    fn test_duplicate_field_names_are_malformed() {
        let schema = doc(json!({
            "dataset_fields": [{"field_name": "title"}, {"field_name": "title"}]
        }));
        let err = schema.dataset_fields().unwrap_err();
        assert!(err.to_string().contains("duplicate field_name 'title'"));
    }

    #[test]
    fn test_non_object_top_level_is_rejected() {
        assert!(SchemaDocument::from_value(json!([1, 2])).is_err());
    }

    #[test]
    fn test_set_keeps_existing_position() {
        let mut field = FieldSpec::new("owner_org")
            .with("form_snippet", "org.html")
            .with("required", false);
        field.set("form_snippet", Value::Null);
        field.set("validators", "v");

        let keys: Vec<_> = field.as_map().keys().cloned().collect();
        assert_eq!(keys, vec!["field_name", "form_snippet", "required", "validators"]);
        assert_eq!(field.get("form_snippet"), Some(&Value::Null));
    }
}
