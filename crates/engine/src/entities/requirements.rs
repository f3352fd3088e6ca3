//! Requirement evaluation.
//!
//! Reads the live game state without modifying it. A relationship requirement
//! whose character cannot be resolved, or who the player has never met, is
//! simply not met.

use clisland_domain::{GameState, Requirement, RequirementKind};

use crate::infrastructure::ports::{RequirementChecker, RequirementError};

#[derive(Debug, Default, Clone, Copy)]
pub struct RequirementEvaluator;

impl RequirementEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// The current value a requirement compares against, if there is one.
    fn observed(
        &self,
        requirement: &Requirement,
        state: &GameState,
    ) -> Result<Option<f64>, RequirementError> {
        let stats = &state.player.stats;
        let value = match &requirement.kind {
            RequirementKind::Popularity => Some(stats.popularity),
            RequirementKind::Confidence => Some(stats.confidence),
            RequirementKind::Energy => Some(stats.energy),
            RequirementKind::Money => Some(stats.money as f64),
            RequirementKind::DayNumber => Some(f64::from(stats.day_number)),
            RequirementKind::Item => Some(state.player.item_count(&requirement.target) as f64),
            RequirementKind::Affection | RequirementKind::Trust => state
                .resolve_character(&requirement.target)
                .and_then(|id| state.player.relationships.get(&id))
                .map(|rel| {
                    if requirement.kind == RequirementKind::Affection {
                        rel.affection
                    } else {
                        rel.trust
                    }
                }),
            RequirementKind::Unrecognized(raw) => {
                return Err(RequirementError::UnknownRequirementType(raw.clone()))
            }
        };
        Ok(value)
    }
}

impl RequirementChecker for RequirementEvaluator {
    fn check_one(
        &self,
        requirement: &Requirement,
        state: &GameState,
    ) -> Result<bool, RequirementError> {
        let met = self
            .observed(requirement, state)?
            .is_some_and(|actual| requirement.operator.holds(actual, requirement.value));
        Ok(met)
    }

    fn check_all(
        &self,
        requirements: &[Requirement],
        state: &GameState,
    ) -> Result<bool, RequirementError> {
        for requirement in requirements {
            if !self.check_one(requirement, state)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn failed_of(
        &self,
        requirements: &[Requirement],
        state: &GameState,
    ) -> Result<Vec<Requirement>, RequirementError> {
        let mut failed = Vec::new();
        for requirement in requirements {
            if !self.check_one(requirement, state)? {
                failed.push(requirement.clone());
            }
        }
        Ok(failed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use clisland_domain::{
        relationship_entry, Character, CharacterId, CharacterStats, Comparison, GameConfig, Item,
        ItemType, Personality, Player, PlayerId,
    };

    use super::*;

    fn state() -> GameState {
        let player = Player::new(PlayerId::new(), "Alex", &GameConfig::default(), Utc::now())
            .expect("valid player");
        let emma = Character {
            id: CharacterId::new(),
            name: "Emma".to_string(),
            age: 24,
            personality: Personality::NEUTRAL,
            appearance: Default::default(),
            stats: CharacterStats {
                popularity: 75.0,
                energy: 80.0,
                stress: 20.0,
            },
            is_available: true,
            created_at: Utc::now(),
        };
        GameState::new(
            player,
            BTreeMap::from([(emma.id, emma)]),
            BTreeMap::new(),
            BTreeMap::new(),
        )
    }

    fn emma_id(state: &GameState) -> CharacterId {
        state.resolve_character("Emma").expect("Emma exists")
    }

    #[test]
    fn stat_requirements_compare_player_stats() {
        let state = state();
        let checker = RequirementEvaluator::new();

        let cases = [
            (RequirementKind::Energy, Comparison::Gte, 100.0, true),
            (RequirementKind::Energy, Comparison::Gt, 100.0, false),
            (RequirementKind::Confidence, Comparison::Eq, 50.0, true),
            (RequirementKind::Popularity, Comparison::Lt, 25.0, false),
            (RequirementKind::Money, Comparison::Lte, 1000.0, true),
            (RequirementKind::DayNumber, Comparison::Gte, 2.0, false),
        ];
        for (kind, operator, value, expected) in cases {
            let requirement = Requirement::new(kind.clone(), "player", operator, value);
            assert_eq!(
                checker.check_one(&requirement, &state),
                Ok(expected),
                "{requirement}"
            );
        }
    }

    #[test]
    fn relationship_requirements_read_affection_and_trust() {
        let mut state = state();
        let emma = emma_id(&state);
        let rel = relationship_entry(&mut state.player.relationships, emma, Utc::now());
        rel.adjust_affection(25.0);
        rel.adjust_trust(10.0);
        let checker = RequirementEvaluator::new();

        let by_name = Requirement::new(RequirementKind::Affection, "emma", Comparison::Gte, 20.0);
        let by_id = Requirement::new(
            RequirementKind::Trust,
            emma.to_string(),
            Comparison::Gt,
            10.0,
        );

        assert_eq!(checker.check_one(&by_name, &state), Ok(true));
        assert_eq!(checker.check_one(&by_id, &state), Ok(false));
    }

    #[test]
    fn missing_relationship_or_unknown_character_is_not_met() {
        let state = state();
        let checker = RequirementEvaluator::new();

        let strangers = Requirement::new(RequirementKind::Affection, "Emma", Comparison::Gte, 0.0);
        let ghost = Requirement::new(RequirementKind::Trust, "partner", Comparison::Lte, 100.0);

        assert_eq!(checker.check_one(&strangers, &state), Ok(false));
        assert_eq!(checker.check_one(&ghost, &state), Ok(false));
    }

    #[test]
    fn item_requirements_count_inventory_copies() {
        let mut state = state();
        let rose = Item::new("Rose", ItemType::Gift, 50);
        state.player.inventory = vec![rose.clone(), rose];
        let checker = RequirementEvaluator::new();

        let two = Requirement::new(RequirementKind::Item, "rose", Comparison::Eq, 2.0);
        let three = Requirement::new(RequirementKind::Item, "Rose", Comparison::Gte, 3.0);

        assert_eq!(checker.check_one(&two, &state), Ok(true));
        assert_eq!(checker.check_one(&three, &state), Ok(false));
    }

    #[test]
    fn unknown_requirement_type_is_an_error() {
        let state = state();
        let requirement = Requirement::new(
            RequirementKind::from("charisma".to_string()),
            "player",
            Comparison::Gt,
            1.0,
        );

        assert_eq!(
            RequirementEvaluator::new().check_one(&requirement, &state),
            Err(RequirementError::UnknownRequirementType("charisma".to_string()))
        );
    }

    #[test]
    fn empty_requirement_lists_are_satisfied() {
        let state = state();
        let checker = RequirementEvaluator::new();

        assert_eq!(checker.check_all(&[], &state), Ok(true));
        assert_eq!(checker.failed_of(&[], &state), Ok(vec![]));
    }

    #[test]
    fn check_all_stops_at_the_first_failure() {
        let state = state();
        let failing = Requirement::new(RequirementKind::Energy, "player", Comparison::Lt, 10.0);
        let unknown = Requirement::new(
            RequirementKind::from("charisma".to_string()),
            "player",
            Comparison::Gt,
            1.0,
        );

        assert_eq!(
            RequirementEvaluator::new().check_all(&[failing, unknown], &state),
            Ok(false)
        );
    }

    #[test]
    fn failed_of_lists_every_unmet_requirement_in_order() {
        let state = state();
        let met = Requirement::new(RequirementKind::Energy, "player", Comparison::Gte, 50.0);
        let low_money = Requirement::new(RequirementKind::Money, "player", Comparison::Gt, 5000.0);
        let late = Requirement::new(RequirementKind::DayNumber, "player", Comparison::Gte, 10.0);

        let failed = RequirementEvaluator::new()
            .failed_of(&[low_money.clone(), met, late.clone()], &state)
            .expect("known kinds");

        assert_eq!(failed, vec![low_money, late]);
    }
}
