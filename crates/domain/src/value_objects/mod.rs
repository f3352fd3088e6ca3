//! Value objects.

mod personality;
mod stat;

pub use personality::{Appearance, Personality};
pub use stat::{CharacterStats, PlayerStats, StatBounds};
