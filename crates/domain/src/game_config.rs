//! Static game tunables.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Tunables supplied by the config provider when a game starts and on every
/// day advance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_days: u32,
    pub starting_money: i64,
    pub starting_energy: f64,
    pub starting_confidence: f64,
    pub starting_popularity: f64,
    pub max_characters: usize,
    pub elimination_day: u32,
    pub finale_day: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_days: 30,
            starting_money: 1000,
            starting_energy: 100.0,
            starting_confidence: 50.0,
            starting_popularity: 25.0,
            max_characters: 6,
            elimination_day: 15,
            finale_day: 30,
        }
    }
}

impl GameConfig {
    /// Check the tunables describe a playable season.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_days == 0 {
            return Err(DomainError::validation("max_days must be at least 1"));
        }
        for (name, value) in [
            ("starting_energy", self.starting_energy),
            ("starting_confidence", self.starting_confidence),
            ("starting_popularity", self.starting_popularity),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(DomainError::validation(format!(
                    "{} must be within 0-100, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
