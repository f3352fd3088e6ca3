//! Player entity - the contestant controlled by the user.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::item::Item;
use crate::entities::relationship::Relationship;
use crate::error::DomainError;
use crate::game_config::GameConfig;
use crate::value_objects::{Personality, PlayerStats};
use crate::{CharacterId, PlayerId};

/// Age given to every new player.
pub const DEFAULT_PLAYER_AGE: u32 = 25;

/// Where a new player starts.
pub const STARTING_LOCATION: &str = "villa";

const MAX_NAME_LENGTH: usize = 200;

/// The user's contestant.
///
/// Created once when a game starts and mutated for the rest of the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub age: u32,
    pub personality: Personality,
    pub relationships: BTreeMap<CharacterId, Relationship>,
    pub stats: PlayerStats,
    pub inventory: Vec<Item>,
    pub current_location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a day-one player with neutral personality and stats from `config`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed name is empty or
    /// longer than 200 characters.
    pub fn new(
        id: PlayerId,
        name: &str,
        config: &GameConfig,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("Player name cannot be empty"));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Player name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            age: DEFAULT_PLAYER_AGE,
            personality: Personality::NEUTRAL,
            relationships: BTreeMap::new(),
            stats: PlayerStats {
                popularity: config.starting_popularity,
                confidence: config.starting_confidence,
                energy: config.starting_energy,
                money: config.starting_money,
                day_number: 1,
            },
            inventory: Vec::new(),
            current_location: STARTING_LOCATION.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// How many copies of the item named by `key` the player owns.
    pub fn item_count(&self, key: &str) -> usize {
        self.inventory
            .iter()
            .filter(|item| item.matches_key(key))
            .count()
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_takes_starting_stats_from_config() {
        let config = GameConfig::default();
        let player =
            Player::new(PlayerId::new(), "  Alex ", &config, Utc::now()).expect("valid name");

        assert_eq!(player.name, "Alex");
        assert_eq!(player.age, DEFAULT_PLAYER_AGE);
        assert_eq!(player.personality, Personality::NEUTRAL);
        assert_eq!(player.stats.popularity, 25.0);
        assert_eq!(player.stats.confidence, 50.0);
        assert_eq!(player.stats.energy, 100.0);
        assert_eq!(player.stats.money, 1000);
        assert_eq!(player.stats.day_number, 1);
        assert_eq!(player.current_location, "villa");
        assert!(player.relationships.is_empty());
    }

    #[test]
    fn blank_names_are_rejected() {
        let result = Player::new(PlayerId::new(), "   ", &GameConfig::default(), Utc::now());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
