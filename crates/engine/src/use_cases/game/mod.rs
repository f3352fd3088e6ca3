//! Game use cases.
//!
//! `GameEngine` drives one session through `NotStarted -> Active -> GameOver`.
//! Every operation loads the stored snapshot, mutates a working copy and saves
//! it only once the whole operation has succeeded, so a failed call leaves the
//! store holding the last good state.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use clisland_domain::{
    relationship_entry, Character, ChoiceId, Event, EventId, EventType, GameConfig, GameState,
    Interaction, InteractionType, Item, ItemId, Player, PlayerId, Relationship, StatBounds,
};

use crate::infrastructure::ports::{
    ClockPort, ConfigProvider, EffectApplier, GameStateRepo, RandomPort, RelationshipTracker,
    RequirementChecker, StoreError,
};

mod error;
mod interactions;


pub use error::GameError;
pub use interactions::{interaction_description, interaction_effects};

/// Player energy recovered overnight.
const PLAYER_ENERGY_RECOVERY: f64 = 20.0;
/// Character energy recovered overnight.
const CHARACTER_ENERGY_RECOVERY: f64 = 15.0;
/// Character stress shed overnight.
const CHARACTER_STRESS_RELIEF: f64 = 5.0;

/// Lifecycle of the session, derived from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Active,
    GameOver,
}

/// The event type scheduled for `day`.
///
/// Elimination and finale days win over the periodic schedule; otherwise
/// every third day is a challenge, every other even day a date, and anything
/// else drama.
pub fn event_type_for_day(day: u32, config: &GameConfig) -> EventType {
    if day == config.elimination_day {
        EventType::Elimination
    } else if day == config.finale_day {
        EventType::Recoupling
    } else if day % 3 == 0 {
        EventType::Challenge
    } else if day % 2 == 0 {
        EventType::Date
    } else {
        EventType::Drama
    }
}

pub struct GameEngine {
    store: Arc<dyn GameStateRepo>,
    config: Arc<dyn ConfigProvider>,
    requirements: Arc<dyn RequirementChecker>,
    effects: Arc<dyn EffectApplier>,
    relationships: Arc<dyn RelationshipTracker>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    /// Serializes load-mutate-save cycles.
    operation_lock: Mutex<()>,
}

impl GameEngine {
    pub fn new(
        store: Arc<dyn GameStateRepo>,
        config: Arc<dyn ConfigProvider>,
        requirements: Arc<dyn RequirementChecker>,
        effects: Arc<dyn EffectApplier>,
        relationships: Arc<dyn RelationshipTracker>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            store,
            config,
            requirements,
            effects,
            relationships,
            clock,
            random,
            operation_lock: Mutex::new(()),
        }
    }

    fn serialize(&self) -> MutexGuard<'_, ()> {
        self.operation_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the snapshot, requiring the session to be `Active`.
    fn load_active(&self, operation: &str) -> Result<GameState, GameError> {
        let state = self.store.load()?;
        if state.is_game_over() {
            return Err(GameError::invalid_transition(format!(
                "cannot {operation}: the game is over"
            )));
        }
        Ok(state)
    }

    /// Mirror the saved snapshot's relationships into the relationship manager.
    fn sync_relationships(&self, state: &GameState) {
        for (character_id, relationship) in &state.player.relationships {
            self.relationships
                .update(state.player.id, *character_id, relationship.clone());
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn session_state(&self) -> Result<SessionState, GameError> {
        if !self.store.exists()? {
            return Ok(SessionState::NotStarted);
        }
        let state = self.store.load()?;
        Ok(if state.is_game_over() {
            SessionState::GameOver
        } else {
            SessionState::Active
        })
    }

    /// Start a new season for `player_name`.
    pub fn start_game(&self, player_name: &str) -> Result<GameState, GameError> {
        let _guard = self.serialize();
        if self.store.exists()? {
            return Err(GameError::invalid_transition(
                "cannot start a game: a game is already in progress",
            ));
        }

        let config = self.config.game_config()?;
        let character_templates = self.config.character_configs()?;
        let event_templates = self.config.event_configs()?;
        let item_templates = self.config.item_configs()?;

        let now = self.clock.now();
        let player = Player::new(
            PlayerId::from_uuid(self.random.gen_uuid()),
            player_name,
            &config,
            now,
        )?;

        let characters: BTreeMap<_, _> = character_templates
            .into_iter()
            .take(config.max_characters)
            .map(|mut character| {
                character.id = self.random.gen_uuid().into();
                character.is_available = true;
                character.created_at = now;
                (character.id, character)
            })
            .collect();

        let events: BTreeMap<_, _> = event_templates
            .into_iter()
            .map(|mut event| {
                event.id = self.random.gen_uuid().into();
                event.is_active = true;
                event.created_at = now;
                (event.id, event)
            })
            .collect();

        let item_catalog: BTreeMap<ItemId, Item> = item_templates
            .into_iter()
            .map(|mut item| {
                item.id = self.random.gen_uuid().into();
                (item.id, item)
            })
            .collect();

        let state = GameState::new(player, characters, events, item_catalog);
        self.store.save(&state)?;

        tracing::info!(
            player_id = %state.player.id,
            player = %state.player.name,
            characters = state.characters.len(),
            events = state.events.len(),
            max_days = config.max_days,
            "Game started"
        );
        Ok(state)
    }

    /// Apply the effects of a choice on the current event.
    pub fn process_choice(&self, choice_id: &ChoiceId) -> Result<GameState, GameError> {
        let _guard = self.serialize();
        let mut state = self.load_active("process a choice")?;

        let event = state
            .current_event()
            .ok_or_else(|| GameError::invalid_transition("no current event to choose from"))?;
        let choice = event
            .choice(choice_id)
            .cloned()
            .ok_or_else(|| GameError::ChoiceNotFound(choice_id.clone()))?;

        let failed = self.requirements.failed_of(&choice.requirements, &state)?;
        if !failed.is_empty() {
            return Err(GameError::RequirementsNotMet { failed });
        }

        self.effects.apply_all(&choice.effects, &mut state)?;
        state.player.touch(self.clock.now());
        self.store.save(&state)?;
        self.sync_relationships(&state);

        tracing::info!(
            choice = %choice_id,
            effects = choice.effects.len(),
            day = state.game_day,
            "Choice processed"
        );
        Ok(state)
    }

    /// Move to the next day, or end the season if the last day is done.
    pub fn advance_day(&self) -> Result<GameState, GameError> {
        let _guard = self.serialize();
        let mut state = self.load_active("advance the day")?;
        let config = self.config.game_config()?;

        if state.game_day >= config.max_days {
            let winner = state.leading_relationship();
            state.finish(winner);
            self.store.save(&state)?;
            tracing::info!(
                day = state.game_day,
                winner = ?winner,
                "Season finished"
            );
            return Ok(state);
        }

        state.game_day += 1;
        state.player.stats.day_number = state.game_day;
        state.player.stats.energy =
            StatBounds::PERCENT.apply(state.player.stats.energy, PLAYER_ENERGY_RECOVERY);
        for character in state.characters.values_mut().filter(|c| c.is_available) {
            character
                .stats
                .rest(CHARACTER_ENERGY_RECOVERY, CHARACTER_STRESS_RELIEF);
        }

        let event_type = event_type_for_day(state.game_day, &config);
        let event_id = self.pick_event(&state, event_type)?;
        state.set_current_event(event_id);
        self.store.save(&state)?;

        tracing::info!(
            day = state.game_day,
            event_type = %event_type,
            event_id = %event_id,
            "Day advanced"
        );
        Ok(state)
    }

    /// Pick an active event of `event_type`, else any active event.
    fn pick_event(&self, state: &GameState, event_type: EventType) -> Result<EventId, GameError> {
        let mut candidates: Vec<EventId> = state
            .active_events()
            .filter(|event| event.event_type == event_type)
            .map(|event| event.id)
            .collect();
        if candidates.is_empty() {
            tracing::debug!(%event_type, "No active event of scheduled type, falling back");
            candidates = state.active_events().map(|event| event.id).collect();
        }
        if candidates.is_empty() {
            return Err(GameError::NoEventsAvailable);
        }
        let last = candidates.len() - 1;
        let index = self.random.gen_range(0, last).min(last);
        Ok(candidates[index])
    }

    /// Make `event_id` the current event.
    pub fn trigger_event(&self, event_id: EventId) -> Result<GameState, GameError> {
        let _guard = self.serialize();
        let mut state = self.load_active("trigger an event")?;

        let event = state
            .events
            .get(&event_id)
            .ok_or(GameError::EventNotFound(event_id))?;
        if !event.is_active {
            return Err(GameError::EventInactive(event_id));
        }
        let failed = self.requirements.failed_of(&event.requirements, &state)?;
        if !failed.is_empty() {
            return Err(GameError::RequirementsNotMet { failed });
        }

        state.set_current_event(event_id);
        self.store.save(&state)?;
        tracing::info!(%event_id, day = state.game_day, "Event triggered");
        Ok(state)
    }

    /// Interact with a character, named by ID or name.
    ///
    /// The delta lands on the game state's relationship. Once the snapshot is
    /// saved, the manager replays the same interaction on the prior record, so
    /// both copies end up identical.
    pub fn interact_with_character(
        &self,
        character: &str,
        interaction_type: InteractionType,
    ) -> Result<GameState, GameError> {
        let _guard = self.serialize();
        let mut state = self.load_active("interact with a character")?;

        let character_id = state
            .resolve_character(character)
            .ok_or_else(|| GameError::CharacterNotFound(character.to_string()))?;
        let target = state
            .characters
            .get(&character_id)
            .cloned()
            .ok_or_else(|| GameError::CharacterNotFound(character.to_string()))?;
        if !target.is_available {
            return Err(GameError::CharacterUnavailable(target.name));
        }

        let now = self.clock.now();
        let interaction = interactions::synthesize(interaction_type, &target, now);
        let prior = relationship_entry(&mut state.player.relationships, character_id, now).clone();
        self.effects.apply_all(&interaction.effects, &mut state)?;

        let compatibility = self
            .relationships
            .calculate_compatibility(&state.player, &target);
        let relationship = relationship_entry(&mut state.player.relationships, character_id, now);
        relationship.set_compatibility(compatibility);
        relationship.history.push(interaction.clone());
        state.player.touch(now);
        self.store.save(&state)?;

        let player_id = state.player.id;
        self.relationships.update(player_id, character_id, prior);
        let mut record = self
            .relationships
            .add_interaction(player_id, character_id, interaction);
        record.set_compatibility(compatibility);
        self.relationships.update(player_id, character_id, record);

        tracing::info!(
            character = %target.name,
            interaction = %interaction_type,
            compatibility,
            "Interaction recorded"
        );
        Ok(state)
    }

    /// Force the season to end now.
    pub fn end_game(&self) -> Result<GameState, GameError> {
        let _guard = self.serialize();
        let mut state = self.load_active("end the game")?;
        let winner = state.leading_relationship();
        state.finish(winner);
        self.store.save(&state)?;
        tracing::info!(day = state.game_day, winner = ?winner, "Game ended");
        Ok(state)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Re-persist the current snapshot.
    pub fn save_game(&self) -> Result<GameState, GameError> {
        let _guard = self.serialize();
        let state = self.store.load()?;
        self.store.save(&state)?;
        tracing::info!(day = state.game_day, "Game saved");
        Ok(state)
    }

    pub fn load_game(&self) -> Result<GameState, GameError> {
        let _guard = self.serialize();
        let state = self.store.load()?;
        self.relationships.clear(state.player.id);
        self.sync_relationships(&state);
        tracing::info!(day = state.game_day, "Game loaded");
        Ok(state)
    }

    pub fn get_current_state(&self) -> Result<GameState, GameError> {
        Ok(self.store.load()?)
    }

    /// Throw the session away, returning to `NotStarted`.
    pub fn delete_game(&self) -> Result<(), GameError> {
        let _guard = self.serialize();
        match self.store.load() {
            Ok(state) => self.relationships.clear(state.player.id),
            Err(StoreError::NotFound) => {}
            Err(e) => return Err(e.into()),
        }
        self.store.delete()?;
        tracing::info!("Game deleted");
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Active events whose requirements currently hold.
    pub fn available_events(&self) -> Result<Vec<Event>, GameError> {
        let state = self.store.load()?;
        let mut available = Vec::new();
        for event in state.active_events() {
            if self.requirements.check_all(&event.requirements, &state)? {
                available.push(event.clone());
            }
        }
        Ok(available)
    }

    /// Available characters, sorted by name.
    pub fn available_characters(&self) -> Result<Vec<Character>, GameError> {
        let state = self.store.load()?;
        let mut characters: Vec<Character> = state.available_characters().cloned().collect();
        characters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(characters)
    }

    pub fn relationship_with(&self, character: &str) -> Result<Relationship, GameError> {
        let state = self.store.load()?;
        let character_id = state
            .resolve_character(character)
            .ok_or_else(|| GameError::CharacterNotFound(character.to_string()))?;
        Ok(self.relationships.get(state.player.id, character_id))
    }

    pub fn relationship_history(&self, character: &str) -> Result<Vec<Interaction>, GameError> {
        let state = self.store.load()?;
        let character_id = state
            .resolve_character(character)
            .ok_or_else(|| GameError::CharacterNotFound(character.to_string()))?;
        Ok(self.relationships.history(state.player.id, character_id))
    }
}
