//! Entity modules - rule components over the game state.
//!
//! Each implements one of the rule ports and is the building block the game
//! engine composes.

pub mod effects;
pub mod relationships;
pub mod requirements;

pub use effects::EffectProcessor;
pub use relationships::RelationshipManager;
pub use requirements::RequirementEvaluator;
