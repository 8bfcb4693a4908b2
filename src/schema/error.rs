use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Malformed schema: {reason}")]
    Malformed { reason: String },

    #[error("Failed to parse schema {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Serialized schema is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl SchemaError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SchemaError::Malformed { reason: reason.into() }
    }
}
