use thiserror::Error;

/// Error types that can occur when recording or rendering a conversation.
#[derive(Debug, Error)]
pub enum ConversifyError {
    /// Requested output format is not one of json, md or html
    #[error("Unsupported format '{0}'. Supported formats are: json, md, html")]
    UnsupportedFormat(String),
    /// File system errors while exporting or loading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ConversifyError {
    fn from(err: serde_json::Error) -> Self {
        ConversifyError::Json(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

impl From<toml::de::Error> for ConversifyError {
    fn from(err: toml::de::Error) -> Self {
        ConversifyError::Config(err.to_string())
    }
}
