//! Player-to-character relationships and their interaction history.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::effect::Effect;
use crate::error::DomainError;
use crate::value_objects::StatBounds;
use crate::CharacterId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStatus {
    #[default]
    Single,
    Coupled,
    Exclusive,
    Married,
}

/// Kinds of engagement the player can start with a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    Conversation,
    Date,
    Challenge,
    Gift,
    Argument,
}

impl InteractionType {
    pub fn all() -> &'static [InteractionType] {
        &[
            Self::Conversation,
            Self::Date,
            Self::Challenge,
            Self::Gift,
            Self::Argument,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conversation => "conversation",
            Self::Date => "date",
            Self::Challenge => "challenge",
            Self::Gift => "gift",
            Self::Argument => "argument",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conversation" | "talk" => Ok(Self::Conversation),
            "date" => Ok(Self::Date),
            "challenge" => Ok(Self::Challenge),
            "gift" => Ok(Self::Gift),
            "argument" | "argue" => Ok(Self::Argument),
            _ => Err(DomainError::parse(format!("Unknown interaction type: {}", s))),
        }
    }
}

/// One engagement with a character. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub interaction_type: InteractionType,
    pub description: String,
    pub effects: Vec<Effect>,
    pub timestamp: DateTime<Utc>,
}

/// The player's standing with one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub character_id: CharacterId,
    /// -100 to 100
    pub affection: f64,
    /// 0 to 100
    pub trust: f64,
    /// 0 to 100, recomputed from personalities rather than accumulated
    pub compatibility: f64,
    pub status: RelationshipStatus,
    /// Append-only.
    pub history: Vec<Interaction>,
    pub updated_at: DateTime<Utc>,
}

impl Relationship {
    /// A zeroed relationship with status `Single`.
    ///
    /// This is the only constructor for a relationship nobody has touched yet;
    /// every component that materializes one lazily goes through it.
    pub fn new(character_id: CharacterId, now: DateTime<Utc>) -> Self {
        Self {
            character_id,
            affection: 0.0,
            trust: 0.0,
            compatibility: 0.0,
            status: RelationshipStatus::Single,
            history: Vec::new(),
            updated_at: now,
        }
    }

    pub fn adjust_affection(&mut self, delta: f64) {
        self.affection = StatBounds::AFFECTION.apply(self.affection, delta);
    }

    pub fn adjust_trust(&mut self, delta: f64) {
        self.trust = StatBounds::PERCENT.apply(self.trust, delta);
    }

    pub fn set_compatibility(&mut self, score: f64) {
        self.compatibility = StatBounds::PERCENT.clamp(score);
    }
}

/// Fetch the relationship for `character_id`, creating a zeroed one if absent.
pub fn relationship_entry(
    relationships: &mut BTreeMap<CharacterId, Relationship>,
    character_id: CharacterId,
    now: DateTime<Utc>,
) -> &mut Relationship {
    relationships
        .entry(character_id)
        .or_insert_with(|| Relationship::new(character_id, now))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_relationship_is_zeroed_and_single() {
        let id = CharacterId::new();
        let relationship = Relationship::new(id, Utc::now());
        assert_eq!(relationship.affection, 0.0);
        assert_eq!(relationship.trust, 0.0);
        assert_eq!(relationship.compatibility, 0.0);
        assert_eq!(relationship.status, RelationshipStatus::Single);
        assert!(relationship.history.is_empty());
    }

    #[test]
    fn adjustments_saturate() {
        let mut relationship = Relationship::new(CharacterId::new(), Utc::now());
        relationship.adjust_affection(-250.0);
        relationship.adjust_trust(-10.0);
        assert_eq!(relationship.affection, -100.0);
        assert_eq!(relationship.trust, 0.0);

        relationship.adjust_affection(500.0);
        relationship.adjust_trust(500.0);
        assert_eq!(relationship.affection, 100.0);
        assert_eq!(relationship.trust, 100.0);
    }

    #[test]
    fn entry_creates_once_then_reuses() {
        let mut map = BTreeMap::new();
        let id = CharacterId::new();
        relationship_entry(&mut map, id, Utc::now()).adjust_affection(5.0);
        relationship_entry(&mut map, id, Utc::now()).adjust_affection(5.0);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&id].affection, 10.0);
    }

    #[test]
    fn interaction_types_parse_from_user_input() {
        assert_eq!("Date".parse::<InteractionType>(), Ok(InteractionType::Date));
        assert_eq!("talk".parse::<InteractionType>(), Ok(InteractionType::Conversation));
        assert!("hug".parse::<InteractionType>().is_err());
    }
}
