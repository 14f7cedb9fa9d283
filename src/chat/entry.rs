use serde::{Deserialize, Serialize};

use super::Turn;

/// A turn tagged with its 1-based position in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub turn_number: usize,
    pub turn: Turn,
}

impl Entry {
    pub fn new(turn_number: usize, turn: Turn) -> Self {
        Self { turn_number, turn }
    }
}
