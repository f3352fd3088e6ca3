//! The fixed interaction table: what each kind of engagement says and does.

use chrono::{DateTime, Utc};

use clisland_domain::{Character, Effect, EffectKind, Interaction, InteractionType};

/// Relationship deltas for one interaction. Every effect targets the
/// character by ID.
pub fn interaction_effects(interaction_type: InteractionType, character: &Character) -> Vec<Effect> {
    let target = character.id.to_string();
    let (kind, value, description) = match interaction_type {
        InteractionType::Conversation => (EffectKind::Affection, 5.0, "Good conversation"),
        InteractionType::Date => (EffectKind::Affection, 15.0, "Romantic date"),
        InteractionType::Challenge => (EffectKind::Trust, 10.0, "Teamwork in a challenge"),
        InteractionType::Gift => (EffectKind::Affection, 8.0, "Thoughtful gift"),
        InteractionType::Argument => (EffectKind::Affection, -10.0, "Heated argument"),
    };
    vec![Effect::new(kind, target, value).with_description(description)]
}

pub fn interaction_description(interaction_type: InteractionType, name: &str) -> String {
    match interaction_type {
        InteractionType::Conversation => format!("You had a deep conversation with {name}"),
        InteractionType::Date => format!("You went on a romantic date with {name}"),
        InteractionType::Challenge => format!("You participated in a challenge with {name}"),
        InteractionType::Gift => format!("You gave a thoughtful gift to {name}"),
        InteractionType::Argument => format!("You had a heated argument with {name}"),
    }
}

pub fn synthesize(
    interaction_type: InteractionType,
    character: &Character,
    now: DateTime<Utc>,
) -> Interaction {
    Interaction {
        interaction_type,
        description: interaction_description(interaction_type, &character.name),
        effects: interaction_effects(interaction_type, character),
        timestamp: now,
    }
}

#[cfg(test)]
mod tests {
    use clisland_domain::{CharacterId, CharacterStats, Personality};

    use super::*;

    fn emma() -> Character {
        Character {
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
        }
    }

    #[test]
    fn every_interaction_has_one_relationship_effect_on_the_character() {
        let emma = emma();
        for kind in InteractionType::all() {
            let effects = interaction_effects(*kind, &emma);
            assert_eq!(effects.len(), 1, "{kind}");
            assert!(effects[0].kind.targets_relationship(), "{kind}");
            assert_eq!(effects[0].target, emma.id.to_string());
        }
    }

    #[test]
    fn table_matches_the_documented_deltas() {
        let emma = emma();
        let delta = |kind| {
            let effect = &interaction_effects(kind, &emma)[0];
            (effect.kind.clone(), effect.value)
        };

        assert_eq!(delta(InteractionType::Conversation), (EffectKind::Affection, 5.0));
        assert_eq!(delta(InteractionType::Date), (EffectKind::Affection, 15.0));
        assert_eq!(delta(InteractionType::Challenge), (EffectKind::Trust, 10.0));
        assert_eq!(delta(InteractionType::Gift), (EffectKind::Affection, 8.0));
        assert_eq!(delta(InteractionType::Argument), (EffectKind::Affection, -10.0));
    }

    #[test]
    fn descriptions_name_the_character() {
        let interaction = synthesize(InteractionType::Date, &emma(), Utc::now());
        assert_eq!(interaction.description, "You went on a romantic date with Emma");
    }
}
