//! In-memory state storage modules.
//!
//! - `InMemoryGameStateStore` - the single canonical game snapshot

pub mod game_state;

pub use game_state::InMemoryGameStateStore;
