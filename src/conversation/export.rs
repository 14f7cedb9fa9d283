use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConversifyError;
use crate::format::OutputFormat;

/// Where [`Conversation::publish`](super::Conversation::publish) sent its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Published {
    /// Written to this file
    Written(PathBuf),
    /// Printed to the output stream
    Printed,
}

/// Write rendered output to `dir/chat_history.<ext>` and return the path.
pub fn write_export(
    dir: &Path,
    format: OutputFormat,
    contents: &str,
) -> Result<PathBuf, ConversifyError> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(format.file_name());
    fs::write(&path, contents)?;
    log::info!("Chat exported to file: {}", path.display());
    Ok(path)
}
