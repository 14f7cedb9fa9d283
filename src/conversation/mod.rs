mod builder;
mod config;
mod export;
mod state;

pub use builder::ConversationBuilder;
pub use config::{default_config_path, ConversifyConfig};
pub use export::{write_export, Published};
pub use state::Conversation;
