//! Storage and content ports.

use clisland_domain::{Character, Event, GameConfig, GameState, Item};

use super::error::{ConfigError, StoreError};

/// Holds the single canonical game snapshot.
///
/// Implementations must make the four operations linearizable: a `load`
/// racing a `save` sees either the old or the new snapshot, never a mix.
#[cfg_attr(test, mockall::automock)]
pub trait GameStateRepo: Send + Sync {
    /// Replace the snapshot.
    fn save(&self, state: &GameState) -> Result<(), StoreError>;
    /// The current snapshot, or `StoreError::NotFound`.
    fn load(&self) -> Result<GameState, StoreError>;
    fn delete(&self) -> Result<(), StoreError>;
    fn exists(&self) -> Result<bool, StoreError>;
}

/// Supplies the starting content catalog and tunables.
///
/// Everything returned is a template: the engine clones it and assigns fresh
/// identities, never mutating the source.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigProvider: Send + Sync {
    fn game_config(&self) -> Result<GameConfig, ConfigError>;
    fn event_configs(&self) -> Result<Vec<Event>, ConfigError>;
    fn character_configs(&self) -> Result<Vec<Character>, ConfigError>;
    fn item_configs(&self) -> Result<Vec<Item>, ConfigError>;
}
