use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::chat::Entry;
use crate::error::ConversifyError;

const INDENT: &[u8] = b"    ";

/// Serialize entries as a JSON array indented by four spaces.
pub fn to_json(entries: &[Entry]) -> Result<String, ConversifyError> {
    log::info!("Formatting chat to JSON");
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    entries.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|err| ConversifyError::Json(err.to_string()))
}

/// Parse entries back from [`to_json`] output.
pub fn from_json(raw: &str) -> Result<Vec<Entry>, ConversifyError> {
    Ok(serde_json::from_str(raw)?)
}
