//! Domain entities.
//!
//! Content entities (characters, events, items) are loaded as templates and
//! cloned into each game; player and relationship records are created by the
//! engine.

pub mod character;
pub mod effect;
pub mod event;
pub mod item;
pub mod player;
pub mod relationship;
pub mod requirement;

pub use character::Character;
pub use effect::{Effect, EffectKind};
pub use event::{Choice, Event, EventType};
pub use item::{Item, ItemType};
pub use player::{Player, DEFAULT_PLAYER_AGE, STARTING_LOCATION};
pub use relationship::{
    relationship_entry, Interaction, InteractionType, Relationship, RelationshipStatus,
};
pub use requirement::{Comparison, Requirement, RequirementKind};
