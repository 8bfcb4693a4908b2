use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::schema::document::SchemaDocument;
use crate::schema::error::SchemaError;

const INDENT: &[u8] = b"    ";

/// Load a schema document, parsing YAML for `.yaml`/`.yml` files and JSON otherwise
pub fn read_schema(path: &Path) -> Result<SchemaDocument, SchemaError> {
    let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| SchemaError::Parse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| SchemaError::Parse {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?
    };

    SchemaDocument::from_value(value)
}

/// Write a schema document as 4-space indented JSON, replacing any existing file
pub fn write_schema(path: &Path, schema: &SchemaDocument) -> Result<(), SchemaError> {
    let content = to_pretty_json(schema)?;
    fs::write(path, content).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn to_pretty_json(schema: &SchemaDocument) -> Result<String, SchemaError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    schema.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf)?)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}
