//! Effects - typed, signed mutations of game state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What an effect changes.
///
/// Content is authored as plain strings, so a kind the engine does not know
/// survives deserialization as `Unrecognized` and is rejected when applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectKind {
    Affection,
    Trust,
    Popularity,
    Confidence,
    Energy,
    Money,
    Item,
    Unrecognized(String),
}

impl EffectKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Affection => "affection",
            Self::Trust => "trust",
            Self::Popularity => "popularity",
            Self::Confidence => "confidence",
            Self::Energy => "energy",
            Self::Money => "money",
            Self::Item => "item",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Whether the effect's target names a relationship.
    pub fn targets_relationship(&self) -> bool {
        matches!(self, Self::Affection | Self::Trust)
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for EffectKind {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "affection" => Self::Affection,
            "trust" => Self::Trust,
            "popularity" => Self::Popularity,
            "confidence" => Self::Confidence,
            "energy" => Self::Energy,
            "money" => Self::Money,
            "item" => Self::Item,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<EffectKind> for String {
    fn from(kind: EffectKind) -> Self {
        match kind {
            EffectKind::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// A typed delta applied to the player, a relationship, or the inventory.
///
/// `target` is `"player"` for stat effects, a character (ID or name) for
/// affection/trust, and an item (ID or name) for item effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,
    pub target: String,
    pub value: f64,
    #[serde(default)]
    pub description: String,
}

impl Effect {
    pub fn new(kind: EffectKind, target: impl Into<String>, value: f64) -> Self {
        Self {
            kind,
            target: target.into(),
            value,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The same effect with its magnitude negated.
    pub fn reversed(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            target: self.target.clone(),
            value: -self.value,
            description: format!("Reversed: {}", self.description),
        }
    }
}
