use std::fmt;
use std::str::FromStr;

use crate::error::ConversifyError;

/// Output representation of a rendered conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Indented JSON array of numbered turns
    #[default]
    Json,
    /// Markdown document
    Markdown,
    /// Self-contained HTML fragment
    Html,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Html,
    ];

    /// File extension used for exports.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }

    /// Export file name, `chat_history.<ext>`.
    pub fn file_name(&self) -> String {
        format!("chat_history.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ConversifyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            _ => {
                log::error!("Unsupported format requested: {raw}");
                Err(ConversifyError::UnsupportedFormat(raw.to_string()))
            }
        }
    }
}
