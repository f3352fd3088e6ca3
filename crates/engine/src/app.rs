//! Application state and composition.

use std::sync::Arc;

use crate::entities::{EffectProcessor, RelationshipManager, RequirementEvaluator};
use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    content::{CatalogConfigProvider, ContentCatalog},
    ports::{ClockPort, RandomPort},
};
use crate::stores::InMemoryGameStateStore;
use crate::use_cases::GameEngine;

/// Main application state.
///
/// Holds the wired game engine.
pub struct App {
    pub engine: Arc<GameEngine>,
}

impl App {
    /// Wire the engine over `catalog` with the system clock and randomness.
    pub fn new(catalog: ContentCatalog) -> Self {
        Self::with_ports(catalog, Arc::new(SystemClock::new()), Arc::new(SystemRandom::new()))
    }

    pub fn with_ports(
        catalog: ContentCatalog,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let engine = GameEngine::new(
            Arc::new(InMemoryGameStateStore::new()),
            Arc::new(CatalogConfigProvider::new(catalog)),
            Arc::new(RequirementEvaluator::new()),
            Arc::new(EffectProcessor::new(clock.clone())),
            Arc::new(RelationshipManager::new(clock.clone())),
            clock,
            random,
        );
        Self {
            engine: Arc::new(engine),
        }
    }
}
