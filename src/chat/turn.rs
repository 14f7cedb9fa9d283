use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A single exchange in a conversation: one user message and the response to it.
///
/// Citation data is optional. `source_names` and `source_urls` are paired
/// positionally when rendered; `source_snippets` is independent of both.
/// A turn is never mutated after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    user_msg: String,
    response: String,
    #[serde(default)]
    source_names: Vec<String>,
    #[serde(default)]
    source_urls: Vec<String>,
    #[serde(default)]
    source_snippets: Vec<String>,
}

impl Turn {
    /// Create a turn without citation data.
    pub fn new(user_msg: impl Into<String>, response: impl Into<String>) -> Self {
        Self::builder(user_msg, response).build()
    }

    /// Create a builder for a turn that carries sources or snippets.
    pub fn builder(user_msg: impl Into<String>, response: impl Into<String>) -> TurnBuilder {
        TurnBuilder::new(user_msg, response)
    }

    pub fn user_msg(&self) -> &str {
        &self.user_msg
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn source_names(&self) -> &[String] {
        &self.source_names
    }

    pub fn source_urls(&self) -> &[String] {
        &self.source_urls
    }

    pub fn source_snippets(&self) -> &[String] {
        &self.source_snippets
    }

    /// Iterate `(name, url)` pairs. Stops at the shorter of the two sequences.
    pub fn sources(&self) -> impl Iterator<Item = (&str, &str)> {
        self.source_names
            .iter()
            .zip(self.source_urls.iter())
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }

    /// True when both names and urls are present, which is when a source line is rendered.
    pub fn has_sources(&self) -> bool {
        !self.source_names.is_empty() && !self.source_urls.is_empty()
    }

    /// Plain field mapping of this turn.
    pub fn to_value(&self) -> Value {
        json!({
            "user_msg": self.user_msg,
            "response": self.response,
            "source_names": self.source_names,
            "source_urls": self.source_urls,
            "source_snippets": self.source_snippets,
        })
    }
}

/// Builder for Turn
#[derive(Debug)]
pub struct TurnBuilder {
    user_msg: String,
    response: String,
    source_names: Vec<String>,
    source_urls: Vec<String>,
    source_snippets: Vec<String>,
}

impl TurnBuilder {
    pub fn new(user_msg: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            user_msg: user_msg.into(),
            response: response.into(),
            source_names: Vec::new(),
            source_urls: Vec::new(),
            source_snippets: Vec::new(),
        }
    }

    /// Replace the source names and urls. Lengths are not checked against each other.
    pub fn sources<N, U>(mut self, names: N, urls: U) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        self.source_names = names.into_iter().map(Into::into).collect();
        self.source_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single named source.
    pub fn source(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.source_names.push(name.into());
        self.source_urls.push(url.into());
        self
    }

    /// Replace the source snippets.
    pub fn snippets<S>(mut self, snippets: S) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
    {
        self.source_snippets = snippets.into_iter().map(Into::into).collect();
        self
    }

    /// Append a single snippet.
    pub fn snippet(mut self, snippet: impl Into<String>) -> Self {
        self.source_snippets.push(snippet.into());
        self
    }

    pub fn build(self) -> Turn {
        Turn {
            user_msg: self.user_msg,
            response: self.response,
            source_names: self.source_names,
            source_urls: self.source_urls,
            source_snippets: self.source_snippets,
        }
    }
}
