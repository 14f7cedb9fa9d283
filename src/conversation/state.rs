use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::chat::{Entry, Turn};
use crate::error::ConversifyError;
use crate::format::{self, OutputFormat};
use crate::theme;

use super::builder::ConversationBuilder;
use super::config::ConversifyConfig;
use super::export::{write_export, Published};

/// Append-only log of numbered turns for one session.
///
/// Turn numbers are assigned on append and always run `1..=len()`. Appending
/// needs `&mut self`; share a conversation across threads behind a lock.
#[derive(Debug, Clone)]
pub struct Conversation {
    user_name: String,
    bot_name: String,
    format: OutputFormat,
    theme: String,
    export: bool,
    export_dir: PathBuf,
    entries: Vec<Entry>,
}

impl Conversation {
    /// Conversation with default names, JSON output and printing enabled.
    pub fn new() -> Self {
        Self::with_parts(OutputFormat::default(), ConversifyConfig::default())
    }

    pub fn builder() -> ConversationBuilder {
        ConversationBuilder::new()
    }

    /// Build from a config, rejecting an unsupported format immediately.
    pub fn from_config(config: ConversifyConfig) -> Result<Self, ConversifyError> {
        let format = config.format.parse::<OutputFormat>()?;
        Ok(Self::with_parts(format, config))
    }

    fn with_parts(format: OutputFormat, config: ConversifyConfig) -> Self {
        log::info!(
            "Initialized conversation with format='{}', theme='{}', export='{}', user_name='{}', bot_name='{}'",
            format,
            config.theme,
            config.export,
            config.user_name,
            config.bot_name
        );
        Self {
            user_name: config.user_name,
            bot_name: config.bot_name,
            format,
            theme: config.theme,
            export: config.export,
            export_dir: config.export_dir.unwrap_or_else(|| PathBuf::from(".")),
            entries: Vec::new(),
        }
    }

    /// Append a turn under the next turn number.
    pub fn add(&mut self, turn: Turn) {
        let turn_number = self.entries.len() + 1;
        log::info!(
            "Added Turn #{}: {}='{}', {}='{}'",
            turn_number,
            self.user_name,
            turn.user_msg(),
            self.bot_name,
            turn.response()
        );
        self.entries.push(Entry::new(turn_number, turn));
    }

    /// Append several turns in order.
    pub fn add_turns<I>(&mut self, turns: I)
    where
        I: IntoIterator<Item = Turn>,
    {
        for turn in turns {
            self.add(turn);
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Default format used by [`Conversation::publish`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Style descriptor of the configured theme. Rendering does not use it.
    pub fn theme_style(&self) -> &'static str {
        theme::get_style(&self.theme)
    }

    pub fn export_enabled(&self) -> bool {
        self.export
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Render the current entries.
    pub fn render(&self, format: OutputFormat) -> Result<String, ConversifyError> {
        let output = format::render(&self.entries, format, &self.user_name, &self.bot_name)?;
        log::info!("Chat formatted as {format}");
        Ok(output)
    }

    /// Render using a format name, failing on anything but json, md or html.
    pub fn beautify(&self, format: &str) -> Result<String, ConversifyError> {
        self.render(format.parse()?)
    }

    pub fn to_json(&self) -> Result<String, ConversifyError> {
        self.render(OutputFormat::Json)
    }

    pub fn to_md(&self) -> Result<String, ConversifyError> {
        self.render(OutputFormat::Markdown)
    }

    pub fn to_html(&self) -> Result<String, ConversifyError> {
        self.render(OutputFormat::Html)
    }

    /// Write `chat_history.<ext>` for a named format into the export directory.
    pub fn export(&self, format: &str) -> Result<PathBuf, ConversifyError> {
        self.export_as(format.parse()?)
    }

    pub fn export_as(&self, format: OutputFormat) -> Result<PathBuf, ConversifyError> {
        let output = self.render(format)?;
        write_export(&self.export_dir, format, &output)
    }

    /// Emit the default format: write the export file when exporting is
    /// enabled, otherwise print to standard output.
    pub fn publish(&self) -> Result<Published, ConversifyError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.publish_to(&mut handle)
    }

    /// Same as [`Conversation::publish`] but prints to `writer`.
    pub fn publish_to<W: Write>(&self, writer: &mut W) -> Result<Published, ConversifyError> {
        if self.export {
            return Ok(Published::Written(self.export_as(self.format)?));
        }
        let output = self.render(self.format)?;
        writeln!(writer, "{output}")?;
        writer.flush()?;
        Ok(Published::Printed)
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Turn> for Conversation {
    fn extend<T: IntoIterator<Item = Turn>>(&mut self, iter: T) {
        self.add_turns(iter);
    }
}
