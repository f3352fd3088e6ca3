//! Port traits for the engine's seams.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Game state storage (in-memory today, could be a save file)
//! - Content/config (built-in catalog or a JSON file)
//! - The rule components (requirement checks, effects, relationships)
//! - Clock/Random (for testing)

mod error;
mod repos;
mod rules;
mod testing;

// =============================================================================
// Storage and content
// =============================================================================
pub use repos::{ConfigProvider, GameStateRepo};

// =============================================================================
// Rule components
// =============================================================================
pub use rules::{EffectApplier, RelationshipTracker, RequirementChecker};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockConfigProvider, MockGameStateRepo};

#[cfg(test)]
pub use rules::{MockEffectApplier, MockRelationshipTracker, MockRequirementChecker};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ConfigError, EffectError, RequirementError, StoreError};
