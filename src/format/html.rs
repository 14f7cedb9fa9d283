use crate::chat::{Entry, Turn};

use super::label::SpeakerLabels;
use super::snippet::truncate_snippet;

const CONTAINER_OPEN: &str = r#"<div style="font-family: Arial, sans-serif;">"#;
const CONTAINER_CLOSE: &str = "</div>";

/// Render entries as a single HTML container.
///
/// Message text is inserted verbatim. Nothing is escaped, so callers that
/// render untrusted input must sanitize it first.
pub fn to_html(entries: &[Entry], user_name: &str, bot_name: &str) -> String {
    log::info!("Formatting chat to HTML");
    let labels = SpeakerLabels::new(user_name, bot_name);
    let user_pad = non_breaking(&labels.user_pad);
    let bot_pad = non_breaking(&labels.bot_pad);
    let mut html = String::from(CONTAINER_OPEN);
    html.push('\n');
    for entry in entries {
        let turn = &entry.turn;
        html.push_str(&format!("<p><b>Turn {}</b></p>\n", entry.turn_number));
        html.push_str(&format!(
            "<p>{}<b>{}:</b> {}</p>\n",
            user_pad,
            labels.user,
            turn.user_msg()
        ));
        html.push_str(&format!(
            "<p>{}<b>{}:</b> {}</p>\n",
            bot_pad,
            labels.bot,
            turn.response()
        ));
        if turn.has_sources() {
            html.push_str(&format!("<p>source: {}</p>\n", source_anchors(turn)));
        }
        for snippet in turn.source_snippets() {
            html.push_str(&format!(
                "<blockquote style=\"white-space: pre-wrap;\">{}</blockquote>\n",
                truncate_snippet(snippet)
            ));
        }
        html.push_str("<hr/>\n");
    }
    html.push_str(CONTAINER_CLOSE);
    html
}

/// Label padding survives HTML whitespace collapsing only as `&nbsp;`.
fn non_breaking(pad: &str) -> String {
    pad.replace(' ', "&nbsp;")
}

fn source_anchors(turn: &Turn) -> String {
    turn.sources()
        .map(|(name, url)| format!(r#"<a href="{url}" target="_blank">{name}</a>"#))
        .collect::<Vec<_>>()
        .join(" | ")
}
