//! Bounded stat values.
//!
//! Every clamped field in the game saturates at its bounds on write; nothing
//! wraps around and nothing errors. Money is the only unbounded stat and is
//! not represented here.

use serde::{Deserialize, Serialize};

/// Inclusive range a stat saturates into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatBounds {
    pub min: f64,
    pub max: f64,
}

impl StatBounds {
    /// Player and character stats, relationship trust and compatibility.
    pub const PERCENT: StatBounds = StatBounds {
        min: 0.0,
        max: 100.0,
    };

    /// Relationship affection.
    pub const AFFECTION: StatBounds = StatBounds {
        min: -100.0,
        max: 100.0,
    };

    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Apply a signed delta, saturating at the bounds.
    pub fn apply(self, current: f64, delta: f64) -> f64 {
        self.clamp(current + delta)
    }
}

/// The player's mutable stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// 0-100
    pub popularity: f64,
    /// 0-100
    pub confidence: f64,
    /// 0-100
    pub energy: f64,
    /// Unclamped.
    pub money: i64,
    /// Mirrors `GameState::game_day`.
    pub day_number: u32,
}

/// An NPC's mutable stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    /// 0-100
    pub popularity: f64,
    /// 0-100
    pub energy: f64,
    /// 0-100
    pub stress: f64,
}

impl CharacterStats {
    /// Overnight recovery: energy comes back, stress wears off.
    pub fn rest(&mut self, energy_gain: f64, stress_relief: f64) {
        self.energy = StatBounds::PERCENT.apply(self.energy, energy_gain);
        self.stress = StatBounds::PERCENT.apply(self.stress, -stress_relief);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_bounds_saturate_both_ways() {
        assert_eq!(StatBounds::PERCENT.apply(95.0, 20.0), 100.0);
        assert_eq!(StatBounds::PERCENT.apply(3.0, -5.0), 0.0);
        assert_eq!(StatBounds::PERCENT.apply(40.0, 5.5), 45.5);
    }

    #[test]
    fn affection_bounds_allow_negative_values() {
        assert_eq!(StatBounds::AFFECTION.apply(0.0, -10.0), -10.0);
        assert_eq!(StatBounds::AFFECTION.apply(-95.0, -10.0), -100.0);
    }

    #[test]
    fn rest_restores_energy_and_relieves_stress() {
        let mut stats = CharacterStats {
            popularity: 60.0,
            energy: 90.0,
            stress: 3.0,
        };
        stats.rest(15.0, 5.0);
        assert_eq!(stats.energy, 100.0);
        assert_eq!(stats.stress, 0.0);
        assert_eq!(stats.popularity, 60.0);
    }
}
