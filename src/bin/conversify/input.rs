use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use conversify::{Entry, Turn};

/// Accepted input shapes: a previous JSON export or a bare list of turns.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InputDocument {
    Entries(Vec<Entry>),
    Turns(Vec<Turn>),
}

pub fn load_turns(path: &Path) -> anyhow::Result<Vec<Turn>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_turns(&contents).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_turns(contents: &str) -> anyhow::Result<Vec<Turn>> {
    let document: InputDocument = serde_json::from_str(contents)?;
    Ok(match document {
        InputDocument::Entries(mut entries) => {
            entries.sort_by_key(|entry| entry.turn_number);
            entries.into_iter().map(|entry| entry.turn).collect()
        }
        InputDocument::Turns(turns) => turns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_turn_array() {
        let turns = parse_turns(
            r#"[{"user_msg": "q", "response": "a", "source_names": ["n"], "source_urls": ["u"]}]"#,
        )
        .unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].source_names(), ["n"]);
    }

    #[test]
    fn parses_exported_entries_in_number_order() {
        let turns = parse_turns(
            r#"[
                {"turn_number": 2, "turn": {"user_msg": "second", "response": "b"}},
                {"turn_number": 1, "turn": {"user_msg": "first", "response": "a"}}
            ]"#,
        )
        .unwrap();
        let messages: Vec<_> = turns.iter().map(Turn::user_msg).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_turns(r#"{"user_msg": "q"}"#).is_err());
        assert!(parse_turns(r#"[{"text": "q"}]"#).is_err());
    }
}
