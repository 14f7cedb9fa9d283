use std::borrow::Cow;

/// Snippets longer than this many characters are shortened.
pub const SNIPPET_MAX_CHARS: usize = 100;
const SNIPPET_EDGE_CHARS: usize = 50;
pub const ELLIPSIS: &str = "...";

/// Keep the first and last 50 characters of an overlong snippet, joined by an ellipsis.
pub fn truncate_snippet(snippet: &str) -> Cow<'_, str> {
    let count = snippet.chars().count();
    if count <= SNIPPET_MAX_CHARS {
        return Cow::Borrowed(snippet);
    }
    let head: String = snippet.chars().take(SNIPPET_EDGE_CHARS).collect();
    let tail: String = snippet.chars().skip(count - SNIPPET_EDGE_CHARS).collect();
    Cow::Owned(format!("{head}{ELLIPSIS}{tail}"))
}
