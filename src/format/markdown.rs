use crate::chat::{Entry, Turn};

use super::label::SpeakerLabels;
use super::snippet::truncate_snippet;

/// Line ending that forces a `<br>` so each line renders on its own.
const HARD_BREAK: &str = "  \n";

/// Render entries as Markdown, one block per turn separated by blank lines.
pub fn to_markdown(entries: &[Entry], user_name: &str, bot_name: &str) -> String {
    log::info!("Formatting chat to Markdown");
    let labels = SpeakerLabels::new(user_name, bot_name);
    let mut md = String::new();
    for entry in entries {
        let turn = &entry.turn;
        md.push_str(&format!("**Turn {}**{HARD_BREAK}", entry.turn_number));
        md.push_str(&format!(
            "{}**{}:** {}{HARD_BREAK}",
            labels.user_pad,
            labels.user,
            turn.user_msg()
        ));
        md.push_str(&format!(
            "{}**{}:** {}{HARD_BREAK}",
            labels.bot_pad,
            labels.bot,
            turn.response()
        ));
        if turn.has_sources() {
            md.push_str(&format!("source: {}{HARD_BREAK}", source_links(turn)));
        }
        for snippet in turn.source_snippets() {
            md.push_str(&format!("> {}{HARD_BREAK}", truncate_snippet(snippet)));
        }
        md.push('\n');
    }
    md
}

fn source_links(turn: &Turn) -> String {
    turn.sources()
        .map(|(name, url)| format!("[{name}]({url})"))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new(1, Turn::new("Hello", "Hi there")),
            Entry::new(
                2,
                Turn::builder("Sources?", "Here")
                    .sources(["Rust", "Docs"], ["https://rust-lang.org", "https://docs.rs"])
                    .snippet("short quote")
                    .build(),
            ),
        ]
    }

    #[test]
    fn renders_full_document() {
        let md = to_markdown(&entries(), "User", "Bot");
        let expected = [
            "**Turn 1**  ",
            "**User:** Hello  ",
            " **Bot:** Hi there  ",
            "",
            "**Turn 2**  ",
            "**User:** Sources?  ",
            " **Bot:** Here  ",
            "source: [Rust](https://rust-lang.org) | [Docs](https://docs.rs)  ",
            "> short quote  ",
            "",
            "",
        ]
        .join("\n");
        assert_eq!(md, expected);
    }

    #[test]
    fn source_line_needs_names_and_urls() {
        let turn = Turn::builder("q", "a").sources(["only a name"], Vec::<String>::new()).build();
        let md = to_markdown(&[Entry::new(1, turn)], "User", "Bot");
        assert!(!md.contains("source:"));
    }

    #[test]
    fn long_snippets_are_truncated() {
        let snippet = "x".repeat(150);
        let turn = Turn::builder("q", "a").snippet(snippet).build();
        let md = to_markdown(&[Entry::new(1, turn)], "User", "Bot");
        let expected = format!("> {}...{}  \n", "x".repeat(50), "x".repeat(50));
        assert!(md.contains(&expected));
    }

    #[test]
    fn every_content_line_ends_in_a_hard_break() {
        let md = to_markdown(&entries(), "User", "Bot");
        for line in md.lines().filter(|line| !line.is_empty()) {
            assert!(line.ends_with("  "), "no hard break on {line:?}");
        }
        assert!(md.contains("**User:** Hello  \n **Bot:** Hi there  \n"));
    }

    #[test]
    fn empty_log_renders_nothing() {
        assert_eq!(to_markdown(&[], "User", "Bot"), "");
    }
}
