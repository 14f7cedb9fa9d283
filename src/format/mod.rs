//! Pure rendering of numbered turns into JSON, Markdown or HTML.

mod html;
mod json;
mod kind;
mod label;
mod markdown;
mod snippet;

pub use html::to_html;
pub use json::{from_json, to_json};
pub use kind::OutputFormat;
pub use label::{padding, SpeakerLabels};
pub use markdown::to_markdown;
pub use snippet::{truncate_snippet, ELLIPSIS, SNIPPET_MAX_CHARS};

use crate::chat::Entry;
use crate::error::ConversifyError;

/// Render `entries` in the requested format.
pub fn render(
    entries: &[Entry],
    format: OutputFormat,
    user_name: &str,
    bot_name: &str,
) -> Result<String, ConversifyError> {
    match format {
        OutputFormat::Json => to_json(entries),
        OutputFormat::Markdown => Ok(to_markdown(entries, user_name, bot_name)),
        OutputFormat::Html => Ok(to_html(entries, user_name, bot_name)),
    }
}

/// Render using a format name such as `"json"`, `"md"` or `"html"`.
pub fn render_named(
    entries: &[Entry],
    format: &str,
    user_name: &str,
    bot_name: &str,
) -> Result<String, ConversifyError> {
    render(entries, format.parse()?, user_name, bot_name)
}
