use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors returned by the catalog action API
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation error: {}", format_field_errors(.0))]
    Validation(BTreeMap<String, Vec<String>>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Catalog API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl CatalogError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }

    /// Whether the failure concerns only the record being sent: it was
    /// rejected, or the record it refers to does not exist.
    pub fn is_record_level(&self) -> bool {
        matches!(self, CatalogError::Validation(_) | CatalogError::NotFound(_))
    }

    /// Build an error from the `error` object of a failed action response
    pub fn from_action_error(status: u16, error: &Value) -> Self {
        let kind = error.get("__type").and_then(Value::as_str).unwrap_or_default();
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());

        match kind {
            "Validation Error" => CatalogError::Validation(field_errors(error)),
            "Not Found Error" => CatalogError::NotFound(message),
            "Authorization Error" => CatalogError::Unauthorized(message),
            _ => CatalogError::Api { status, message },
        }
    }
}

fn field_errors(error: &Value) -> BTreeMap<String, Vec<String>> {
    let mut fields = BTreeMap::new();

    if let Some(obj) = error.as_object() {
        for (key, value) in obj {
            if key == "__type" {
                continue;
            }
            let messages = match value {
                Value::Array(items) => items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string).unwrap_or_else(|| item.to_string()))
                    .collect(),
                Value::String(s) => vec![s.clone()],
                other => vec![other.to_string()],
            };
            fields.insert(key.clone(), messages);
        }
    }

    fields
}

fn format_field_errors(fields: &BTreeMap<String, Vec<String>>) -> String {
    if fields.is_empty() {
        return "no details".to_string();
    }

    fields
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
