//! GameState aggregate - the canonical snapshot of one session.
//!
//! # Invariants
//!
//! - `current_event`, when set, names an entry of `events`; the accessors
//!   resolve it into the map so reads and writes always hit the canonical
//!   event rather than a detached copy.
//! - `game_day` starts at 1 and never decreases.
//! - `is_game_over` only ever moves from `false` to `true`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{Character, Event, Item, Player};
use crate::{CharacterId, EventId, ItemId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub characters: BTreeMap<CharacterId, Character>,
    pub events: BTreeMap<EventId, Event>,
    current_event: Option<EventId>,
    pub game_day: u32,
    is_game_over: bool,
    winner: Option<CharacterId>,
    /// Item templates from the content catalog, for item effects.
    #[serde(default)]
    pub item_catalog: BTreeMap<ItemId, Item>,
}

impl GameState {
    /// A day-one state with no current event.
    pub fn new(
        player: Player,
        characters: BTreeMap<CharacterId, Character>,
        events: BTreeMap<EventId, Event>,
        item_catalog: BTreeMap<ItemId, Item>,
    ) -> Self {
        Self {
            player,
            characters,
            events,
            current_event: None,
            game_day: 1,
            is_game_over: false,
            winner: None,
            item_catalog,
        }
    }

    // =========================================================================
    // Current event
    // =========================================================================

    pub fn current_event_id(&self) -> Option<EventId> {
        self.current_event
    }

    pub fn current_event(&self) -> Option<&Event> {
        self.current_event.and_then(|id| self.events.get(&id))
    }

    pub fn current_event_mut(&mut self) -> Option<&mut Event> {
        self.current_event.and_then(|id| self.events.get_mut(&id))
    }

    /// Point the current event at `id`. Returns false (and changes nothing)
    /// if `id` is not one of this state's events.
    pub fn set_current_event(&mut self, id: EventId) -> bool {
        if self.events.contains_key(&id) {
            self.current_event = Some(id);
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Game over
    // =========================================================================

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn winner(&self) -> Option<CharacterId> {
        self.winner
    }

    /// Flip to the terminal state. The first call fixes the winner; later
    /// calls change nothing.
    pub fn finish(&mut self, winner: Option<CharacterId>) {
        if !self.is_game_over {
            self.is_game_over = true;
            self.winner = winner;
        }
    }

    /// The character the player is most affectionate towards.
    ///
    /// Ties go to the smallest character ID, so the result does not depend on
    /// insertion order. `None` when the player has no relationships.
    pub fn leading_relationship(&self) -> Option<CharacterId> {
        self.player
            .relationships
            .values()
            .fold(None, |best: Option<(CharacterId, f64)>, rel| match best {
                Some((_, affection)) if affection >= rel.affection => best,
                _ => Some((rel.character_id, rel.affection)),
            })
            .map(|(id, _)| id)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Resolve a content key (character ID or name) to a character ID.
    pub fn resolve_character(&self, key: &str) -> Option<CharacterId> {
        if let Ok(id) = key.parse::<CharacterId>() {
            if self.characters.contains_key(&id) {
                return Some(id);
            }
        }
        self.characters
            .values()
            .find(|character| character.name.eq_ignore_ascii_case(key.trim()))
            .map(|character| character.id)
    }

    /// Resolve a content key (item ID or name) against the item catalog.
    pub fn resolve_item(&self, key: &str) -> Option<&Item> {
        self.item_catalog.values().find(|item| item.matches_key(key))
    }

    pub fn available_characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values().filter(|c| c.is_available)
    }

    pub fn active_events(&self) -> impl Iterator<Item = &Event> {
        self.events.values().filter(|e| e.is_active)
    }
}
