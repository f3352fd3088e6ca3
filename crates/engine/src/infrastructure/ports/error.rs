//! Error types for port operations.

use clisland_domain::{DomainError, EffectKind};

/// Game state store errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// Nothing has been saved yet (or the snapshot was deleted).
    #[error("No saved game state found")]
    NotFound,

    /// A writer panicked while holding the lock; the last good snapshot is
    /// still in place but the store refuses further access.
    #[error("Game state lock poisoned during {operation}")]
    Poisoned { operation: &'static str },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Content/configuration errors from a config provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read content file {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse content: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] DomainError),
}

/// Requirement evaluation errors. Always a content bug, never a game condition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequirementError {
    #[error("Unknown requirement type: {0}")]
    UnknownRequirementType(String),
}

/// Effect application errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EffectError {
    #[error("Unknown effect type: {0}")]
    UnknownEffectType(String),

    /// A relationship effect whose target names no character in the game.
    #[error("{kind} effect targets unknown character '{target}'")]
    UnknownTarget { kind: EffectKind, target: String },

    /// An item effect whose target names no item in the catalog.
    #[error("Item effect targets unknown item '{0}'")]
    UnknownItem(String),

    #[error("Cannot remove {requested} x '{item}': only {owned} owned")]
    InsufficientItems {
        item: String,
        owned: usize,
        requested: usize,
    },

    #[error("{kind} effect has non-finite magnitude {value}")]
    InvalidMagnitude { kind: EffectKind, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_is_detectable() {
        assert!(StoreError::NotFound.is_not_found());
        assert!(!StoreError::Poisoned { operation: "load" }.is_not_found());
    }

    #[test]
    fn effect_errors_name_the_offending_target() {
        let err = EffectError::UnknownTarget {
            kind: EffectKind::Trust,
            target: "partner".to_string(),
        };
        assert_eq!(err.to_string(), "trust effect targets unknown character 'partner'");
    }
}
