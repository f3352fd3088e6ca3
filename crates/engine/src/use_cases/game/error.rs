//! Game engine errors.

use clisland_domain::{ChoiceId, DomainError, EventId, Requirement};

use crate::infrastructure::ports::{ConfigError, EffectError, RequirementError, StoreError};

/// Errors that can occur during game engine operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("No saved game found")]
    NoSavedGame,

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Event is not active: {0}")]
    EventInactive(EventId),

    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    #[error("Character is not available: {0}")]
    CharacterUnavailable(String),

    #[error("Requirements not met: {}", format_requirements(.failed))]
    RequirementsNotMet { failed: Vec<Requirement> },

    #[error("No active events available")]
    NoEventsAvailable,

    #[error("Configuration unavailable: {0}")]
    ConfigUnavailable(String),

    #[error("Unknown requirement type: {0}")]
    UnknownRequirementType(String),

    #[error("Unknown effect type: {0}")]
    UnknownEffectType(String),

    #[error("Effect could not be applied: {0}")]
    Effect(EffectError),

    #[error("Storage error: {0}")]
    Store(StoreError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl GameError {
    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        Self::InvalidTransition(msg.into())
    }
}

fn format_requirements(failed: &[Requirement]) -> String {
    failed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<StoreError> for GameError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NoSavedGame,
            other => Self::Store(other),
        }
    }
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        Self::ConfigUnavailable(err.to_string())
    }
}

impl From<RequirementError> for GameError {
    fn from(err: RequirementError) -> Self {
        match err {
            RequirementError::UnknownRequirementType(kind) => Self::UnknownRequirementType(kind),
        }
    }
}

impl From<EffectError> for GameError {
    fn from(err: EffectError) -> Self {
        match err {
            EffectError::UnknownEffectType(kind) => Self::UnknownEffectType(kind),
            other => Self::Effect(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use clisland_domain::{Comparison, RequirementKind};

    use super::*;

    #[test]
    fn missing_store_snapshot_means_no_saved_game() {
        assert_eq!(GameError::from(StoreError::NotFound), GameError::NoSavedGame);
    }

    #[test]
    fn requirements_not_met_lists_each_failure() {
        let err = GameError::RequirementsNotMet {
            failed: vec![
                Requirement::new(RequirementKind::DayNumber, "", Comparison::Gte, 15.0),
                Requirement::new(RequirementKind::Affection, "Emma", Comparison::Gt, 20.0),
            ],
        };

        assert_eq!(
            err.to_string(),
            "Requirements not met: day_number >= 15, affection(Emma) > 20"
        );
    }

    #[test]
    fn config_failures_surface_as_config_unavailable() {
        let err = GameError::from(ConfigError::Unavailable("catalog missing".to_string()));
        assert!(matches!(err, GameError::ConfigUnavailable(_)));
    }
}
