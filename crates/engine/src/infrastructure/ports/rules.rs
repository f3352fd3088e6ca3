//! Rule component ports.
//!
//! Each has exactly one production implementation under `crate::entities`;
//! tests substitute mocks to exercise the engine's failure paths.

use clisland_domain::{
    Character, CharacterId, Effect, GameState, Interaction, Player, PlayerId, Relationship,
    Requirement,
};

use super::error::{EffectError, RequirementError};

#[cfg_attr(test, mockall::automock)]
pub trait RequirementChecker: Send + Sync {
    fn check_one(
        &self,
        requirement: &Requirement,
        state: &GameState,
    ) -> Result<bool, RequirementError>;

    /// Logical AND, stopping at the first requirement that does not hold.
    fn check_all(
        &self,
        requirements: &[Requirement],
        state: &GameState,
    ) -> Result<bool, RequirementError>;

    /// Every requirement that does not hold, in input order.
    fn failed_of(
        &self,
        requirements: &[Requirement],
        state: &GameState,
    ) -> Result<Vec<Requirement>, RequirementError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait EffectApplier: Send + Sync {
    fn validate(&self, effect: &Effect) -> Result<(), EffectError>;

    fn apply(&self, effect: &Effect, state: &mut GameState) -> Result<(), EffectError>;

    /// Apply in order. On error `state` is left exactly as it was.
    fn apply_all(&self, effects: &[Effect], state: &mut GameState) -> Result<(), EffectError>;

    fn reverse(&self, effect: &Effect, state: &mut GameState) -> Result<(), EffectError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait RelationshipTracker: Send + Sync {
    /// The stored record, created zeroed on first access.
    fn get(&self, player_id: PlayerId, character_id: CharacterId) -> Relationship;

    fn update(&self, player_id: PlayerId, character_id: CharacterId, relationship: Relationship);

    fn add_interaction(
        &self,
        player_id: PlayerId,
        character_id: CharacterId,
        interaction: Interaction,
    ) -> Relationship;

    fn calculate_compatibility(&self, player: &Player, character: &Character) -> f64;

    fn history(&self, player_id: PlayerId, character_id: CharacterId) -> Vec<Interaction>;

    /// Forget every record belonging to `player_id`.
    fn clear(&self, player_id: PlayerId);
}
