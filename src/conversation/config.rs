use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConversifyError;

const DEFAULT_FORMAT: &str = "json";
const DEFAULT_THEME: &str = crate::theme::DEFAULT_THEME;
const DEFAULT_USER_NAME: &str = "User";
const DEFAULT_BOT_NAME: &str = "Bot";
const DEFAULT_EXPORT: bool = false;

/// Construction-time settings for a [`Conversation`](super::Conversation).
///
/// `format` is kept as the raw name so an invalid value is reported as an
/// unsupported format when the conversation is built, not as a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversifyConfig {
    /// Default output format: "json", "md" or "html"
    pub format: String,
    /// Theme name, see [`crate::theme`]
    pub theme: String,
    /// Write output to a file instead of printing it
    pub export: bool,
    pub user_name: String,
    pub bot_name: String,
    /// Directory for exported files, the working directory when unset
    pub export_dir: Option<PathBuf>,
}

impl Default for ConversifyConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            theme: DEFAULT_THEME.to_string(),
            export: DEFAULT_EXPORT,
            user_name: DEFAULT_USER_NAME.to_string(),
            bot_name: DEFAULT_BOT_NAME.to_string(),
            export_dir: None,
        }
    }
}

impl ConversifyConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConversifyError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConversifyError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Read the user config file, falling back to defaults when it does not exist.
    pub fn load_default() -> Result<Self, ConversifyError> {
        match default_config_path() {
            Some(path) => Self::load_or_default(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConversifyError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConversifyError::Io(err)),
        }
    }
}

/// `<config dir>/conversify/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("conversify").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ConversifyConfig::default();
        assert_eq!(config.format, "json");
        assert_eq!(config.theme, "bw");
        assert!(!config.export);
        assert_eq!(config.user_name, "User");
        assert_eq!(config.bot_name, "Bot");
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ConversifyConfig::from_toml_str(
            r#"
format = "html"
bot_name = "Assistant"
"#,
        )
        .unwrap();
        assert_eq!(config.format, "html");
        assert_eq!(config.bot_name, "Assistant");
        assert_eq!(config.user_name, "User");
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ConversifyConfig::from_toml_str("export = \"maybe\"").unwrap_err();
        assert!(matches!(err, ConversifyError::Config(_)));
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConversifyConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, ConversifyConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "export = true\nexport_dir = \"out\"\n").unwrap();
        let config = ConversifyConfig::load(&path).unwrap();
        assert!(config.export);
        assert_eq!(config.export_dir, Some(PathBuf::from("out")));
    }
}
