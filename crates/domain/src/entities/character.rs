//! Character entity - the other contestants (NPCs).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Appearance, CharacterStats, Personality};
use crate::CharacterId;

/// A non-player contestant.
///
/// Loaded from content as a template; the engine assigns a fresh `id` and
/// `created_at` when a game starts. `is_available` gates every interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: CharacterId,
    pub name: String,
    pub age: u32,
    pub personality: Personality,
    #[serde(default)]
    pub appearance: Appearance,
    pub stats: CharacterStats,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_available() -> bool {
    true
}

impl Character {
    /// Matches either the character's ID or, case-insensitively, its name.
    pub fn matches_key(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.to_string() == key || self.name.eq_ignore_ascii_case(key)
    }
}
