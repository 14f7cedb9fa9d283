mod entry;
mod turn;

pub use entry::Entry;
pub use turn::{Turn, TurnBuilder};
