//! Relationship tracking across players.
//!
//! Records are kept per player, keyed by character in the same map shape the
//! game state uses, and created zeroed on first access through
//! `relationship_entry`. Interaction history is append-only.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use clisland_domain::{
    relationship_entry, Character, CharacterId, EffectKind, Interaction, Player, PlayerId,
    Relationship,
};

use crate::infrastructure::ports::{ClockPort, RelationshipTracker};

pub struct RelationshipManager {
    clock: Arc<dyn ClockPort>,
    records: RwLock<HashMap<PlayerId, BTreeMap<CharacterId, Relationship>>>,
}

impl RelationshipManager {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self {
            clock,
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl RelationshipTracker for RelationshipManager {
    fn get(&self, player_id: PlayerId, character_id: CharacterId) -> Relationship {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let relationships = records.entry(player_id).or_default();
        relationship_entry(relationships, character_id, self.clock.now()).clone()
    }

    fn update(&self, player_id: PlayerId, character_id: CharacterId, relationship: Relationship) {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records
            .entry(player_id)
            .or_default()
            .insert(character_id, relationship);
    }

    fn add_interaction(
        &self,
        player_id: PlayerId,
        character_id: CharacterId,
        interaction: Interaction,
    ) -> Relationship {
        let now = self.clock.now();
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let relationships = records.entry(player_id).or_default();
        let relationship = relationship_entry(relationships, character_id, now);

        for effect in &interaction.effects {
            match effect.kind {
                EffectKind::Affection => relationship.adjust_affection(effect.value),
                EffectKind::Trust => relationship.adjust_trust(effect.value),
                _ => {}
            }
        }
        tracing::debug!(
            player_id = %player_id,
            character_id = %character_id,
            interaction = %interaction.interaction_type,
            affection = relationship.affection,
            "Recorded interaction"
        );
        relationship.history.push(interaction);
        relationship.updated_at = now;
        relationship.clone()
    }

    fn calculate_compatibility(&self, player: &Player, character: &Character) -> f64 {
        player.personality.compatibility_with(&character.personality)
    }

    fn history(&self, player_id: PlayerId, character_id: CharacterId) -> Vec<Interaction> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records
            .get(&player_id)
            .and_then(|relationships| relationships.get(&character_id))
            .map(|relationship| relationship.history.clone())
            .unwrap_or_default()
    }

    fn clear(&self, player_id: PlayerId) {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.remove(&player_id);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use clisland_domain::{
        CharacterStats, Effect, GameConfig, InteractionType, Personality, RelationshipStatus,
    };

    use super::*;
    use crate::infrastructure::clock::FixedClock;

    fn manager() -> RelationshipManager {
        RelationshipManager::new(Arc::new(FixedClock(Utc::now())))
    }

    fn interaction(kind: InteractionType, effects: Vec<Effect>) -> Interaction {
        Interaction {
            interaction_type: kind,
            description: format!("A {kind}"),
            effects,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn get_creates_a_zeroed_single_record() {
        let manager = manager();
        let relationship = manager.get(PlayerId::new(), CharacterId::new());

        assert_eq!(relationship.affection, 0.0);
        assert_eq!(relationship.trust, 0.0);
        assert_eq!(relationship.status, RelationshipStatus::Single);
        assert!(relationship.history.is_empty());
    }

    #[test]
    fn update_replaces_the_stored_record() {
        let manager = manager();
        let (player, character) = (PlayerId::new(), CharacterId::new());
        let mut relationship = manager.get(player, character);
        relationship.status = RelationshipStatus::Coupled;

        manager.update(player, character, relationship);

        assert_eq!(manager.get(player, character).status, RelationshipStatus::Coupled);
    }

    #[test]
    fn interactions_apply_deltas_and_append_history() {
        let manager = manager();
        let (player, character) = (PlayerId::new(), CharacterId::new());

        manager.add_interaction(
            player,
            character,
            interaction(
                InteractionType::Date,
                vec![Effect::new(EffectKind::Affection, character.to_string(), 15.0)],
            ),
        );
        let relationship = manager.add_interaction(
            player,
            character,
            interaction(
                InteractionType::Challenge,
                vec![Effect::new(EffectKind::Trust, character.to_string(), 10.0)],
            ),
        );

        assert_eq!(relationship.affection, 15.0);
        assert_eq!(relationship.trust, 10.0);
        let history = manager.history(player, character);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].interaction_type, InteractionType::Date);
        assert_eq!(history[1].interaction_type, InteractionType::Challenge);
    }

    #[test]
    fn repeated_arguments_saturate_affection() {
        let manager = manager();
        let (player, character) = (PlayerId::new(), CharacterId::new());

        let mut last = manager.get(player, character);
        for _ in 0..12 {
            last = manager.add_interaction(
                player,
                character,
                interaction(
                    InteractionType::Argument,
                    vec![Effect::new(EffectKind::Affection, character.to_string(), -10.0)],
                ),
            );
        }

        assert_eq!(last.affection, -100.0);
        assert_eq!(last.history.len(), 12);
    }

    #[test]
    fn records_are_scoped_per_player() {
        let manager = manager();
        let character = CharacterId::new();
        let (alex, blair) = (PlayerId::new(), PlayerId::new());
        let effect = Effect::new(EffectKind::Affection, character.to_string(), 5.0);

        manager.add_interaction(
            alex,
            character,
            interaction(InteractionType::Conversation, vec![effect]),
        );

        assert_eq!(manager.get(blair, character).affection, 0.0);
        assert!(manager.history(blair, character).is_empty());

        manager.clear(alex);
        assert!(manager.history(alex, character).is_empty());
    }

    #[test]
    fn compatibility_reads_both_personalities() {
        let manager = manager();
        let player = Player::new(PlayerId::new(), "Alex", &GameConfig::default(), Utc::now())
            .expect("valid player");
        let twin = Character {
            id: CharacterId::new(),
            name: "Twin".to_string(),
            age: 25,
            personality: Personality::NEUTRAL,
            appearance: Default::default(),
            stats: CharacterStats {
                popularity: 50.0,
                energy: 50.0,
                stress: 0.0,
            },
            is_available: true,
            created_at: Utc::now(),
        };

        let score = manager.calculate_compatibility(&player, &twin);

        assert_eq!(score, player.personality.compatibility_with(&twin.personality));
        assert!((0.0..=100.0).contains(&score));
    }
}
