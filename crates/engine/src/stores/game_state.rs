//! In-memory game state storage.
//!
//! Holds at most one snapshot. Every read hands out a deep copy and every
//! write replaces the whole snapshot, so callers never share mutable state
//! with the store.

use std::sync::RwLock;

use clisland_domain::GameState;

use crate::infrastructure::ports::{GameStateRepo, StoreError};

pub struct InMemoryGameStateStore {
    inner: RwLock<Option<GameState>>,
}

impl InMemoryGameStateStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }
}

impl Default for InMemoryGameStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateRepo for InMemoryGameStateStore {
    fn save(&self, state: &GameState) -> Result<(), StoreError> {
        let mut slot = self
            .inner
            .write()
            .map_err(|_| StoreError::Poisoned { operation: "save" })?;
        *slot = Some(state.clone());
        tracing::debug!(game_day = state.game_day, "Saved game state");
        Ok(())
    }

    fn load(&self) -> Result<GameState, StoreError> {
        let slot = self
            .inner
            .read()
            .map_err(|_| StoreError::Poisoned { operation: "load" })?;
        slot.clone().ok_or(StoreError::NotFound)
    }

    fn delete(&self) -> Result<(), StoreError> {
        let mut slot = self
            .inner
            .write()
            .map_err(|_| StoreError::Poisoned { operation: "delete" })?;
        *slot = None;
        Ok(())
    }

    fn exists(&self) -> Result<bool, StoreError> {
        let slot = self
            .inner
            .read()
            .map_err(|_| StoreError::Poisoned { operation: "exists" })?;
        Ok(slot.is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use std::thread;

    use chrono::Utc;
    use clisland_domain::{GameConfig, Player, PlayerId};

    use super::*;

    fn state(name: &str) -> GameState {
        let player = Player::new(PlayerId::new(), name, &GameConfig::default(), Utc::now())
            .expect("valid player");
        GameState::new(player, BTreeMap::new(), BTreeMap::new(), BTreeMap::new())
    }

    #[test]
    fn empty_store_reports_not_found() {
        let store = InMemoryGameStateStore::new();

        assert!(!store.exists().expect("exists"));
        assert_eq!(store.load(), Err(StoreError::NotFound));
    }

    #[test]
    fn save_then_load_returns_an_equal_snapshot() {
        let store = InMemoryGameStateStore::new();
        let saved = state("Alex");

        store.save(&saved).expect("save");

        assert!(store.exists().expect("exists"));
        assert_eq!(store.load().expect("load"), saved);
    }

    #[test]
    fn loaded_snapshots_are_detached_copies() {
        let store = InMemoryGameStateStore::new();
        store.save(&state("Alex")).expect("save");

        let mut copy = store.load().expect("load");
        copy.player.stats.money = 0;
        copy.game_day = 9;

        let reloaded = store.load().expect("load");
        assert_eq!(reloaded.player.stats.money, 1000);
        assert_eq!(reloaded.game_day, 1);
    }

    #[test]
    fn delete_clears_the_snapshot() {
        let store = InMemoryGameStateStore::new();
        store.save(&state("Alex")).expect("save");

        store.delete().expect("delete");

        assert!(!store.exists().expect("exists"));
        assert!(store.load().unwrap_err().is_not_found());
    }

    #[test]
    fn concurrent_saves_leave_one_complete_snapshot() {
        let store = Arc::new(InMemoryGameStateStore::new());
        let names = ["Alex", "Blair", "Casey", "Devon"];

        let handles: Vec<_> = names
            .iter()
            .map(|name| {
                let store = Arc::clone(&store);
                let snapshot = state(name);
                thread::spawn(move || {
                    for _ in 0..50 {
                        store.save(&snapshot).expect("save");
                        let seen = store.load().expect("load");
                        assert!(names.contains(&seen.player.name.as_str()));
                        assert_eq!(seen.player.stats.money, 1000);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("writer thread");
        }
        assert!(names.contains(&store.load().expect("load").player.name.as_str()));
    }
}
