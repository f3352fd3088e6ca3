//! CLIsland domain - the types the game state engine operates on.
//!
//! Everything here is pure data plus the invariants that protect it: bounded
//! stats, lazily created relationships, the live current-event reference.
//! No I/O, no clocks, no randomness; those are injected by the engine.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod game_config;
pub mod ids;
pub mod value_objects;

pub use aggregates::GameState;

pub use entities::{
    relationship_entry, Character, Choice, Comparison, Effect, EffectKind, Event, EventType,
    Interaction, InteractionType, Item, ItemType, Player, Relationship, RelationshipStatus,
    Requirement, RequirementKind,
};

pub use error::DomainError;

pub use game_config::GameConfig;

// Re-export ID types
pub use ids::{CharacterId, ChoiceId, EventId, ItemId, PlayerId};

pub use value_objects::{Appearance, CharacterStats, Personality, PlayerStats, StatBounds};
