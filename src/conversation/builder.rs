use std::path::PathBuf;

use crate::error::ConversifyError;

use super::config::ConversifyConfig;
use super::state::Conversation;

/// Builder for [`Conversation`]. The format is validated by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct ConversationBuilder {
    config: ConversifyConfig,
}

impl ConversationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config, typically one loaded from TOML.
    pub fn from_config(config: ConversifyConfig) -> Self {
        Self { config }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = format.into();
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.config.theme = theme.into();
        self
    }

    pub fn export(mut self, export: bool) -> Self {
        self.config.export = export;
        self
    }

    pub fn export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.export_dir = Some(dir.into());
        self
    }

    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.config.user_name = name.into();
        self
    }

    pub fn bot_name(mut self, name: impl Into<String>) -> Self {
        self.config.bot_name = name.into();
        self
    }

    pub fn build(self) -> Result<Conversation, ConversifyError> {
        Conversation::from_config(self.config)
    }
}
