//! Record chatbot conversations and render them as JSON, Markdown or HTML.
//!
//! ```
//! use conversify::{Conversation, Turn};
//!
//! let mut chat = Conversation::new();
//! chat.add(Turn::new("Hello, how are you?", "I'm good! How can I assist you today?"));
//! let md = chat.to_md().unwrap();
//! assert!(md.contains("**User:** Hello, how are you?"));
//! ```
//!
//! Diagnostics go through the [`log`] facade. Install any logger to see them.

pub mod chat;
pub mod conversation;
pub mod error;
pub mod format;
#[cfg(feature = "logging")]
pub mod logging;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use chat::{Entry, Turn, TurnBuilder};
pub use conversation::{Conversation, ConversationBuilder, ConversifyConfig, Published};
pub use error::ConversifyError;
pub use format::OutputFormat;
