//! Effect application.
//!
//! Stat effects saturate at their bounds; money is unbounded. Affection and
//! trust effects create the relationship on first touch. Item effects add or
//! remove copies of a catalog item.

use std::sync::Arc;

use clisland_domain::{relationship_entry, Effect, EffectKind, GameState, StatBounds};

use crate::infrastructure::ports::{ClockPort, EffectApplier, EffectError};

/// Largest number of copies one item effect may add or remove.
const MAX_ITEM_COPIES: f64 = 1000.0;

pub struct EffectProcessor {
    clock: Arc<dyn ClockPort>,
}

impl EffectProcessor {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    fn apply_relationship(&self, effect: &Effect, state: &mut GameState) -> Result<(), EffectError> {
        let character_id = state.resolve_character(&effect.target).ok_or_else(|| {
            EffectError::UnknownTarget {
                kind: effect.kind.clone(),
                target: effect.target.clone(),
            }
        })?;
        let now = self.clock.now();
        let relationship = relationship_entry(&mut state.player.relationships, character_id, now);
        if effect.kind == EffectKind::Affection {
            relationship.adjust_affection(effect.value);
        } else {
            relationship.adjust_trust(effect.value);
        }
        relationship.updated_at = now;
        Ok(())
    }

    fn apply_item(&self, effect: &Effect, state: &mut GameState) -> Result<(), EffectError> {
        let template = state
            .resolve_item(&effect.target)
            .cloned()
            .ok_or_else(|| EffectError::UnknownItem(effect.target.clone()))?;
        let copies = effect.value.trunc().abs() as usize;
        let inventory = &mut state.player.inventory;

        if effect.value >= 0.0 {
            inventory.extend(std::iter::repeat(template).take(copies));
            return Ok(());
        }

        let owned = inventory.iter().filter(|item| item.id == template.id).count();
        if owned < copies {
            return Err(EffectError::InsufficientItems {
                item: template.name,
                owned,
                requested: copies,
            });
        }
        let mut to_remove = copies;
        inventory.retain(|item| {
            if to_remove > 0 && item.id == template.id {
                to_remove -= 1;
                false
            } else {
                true
            }
        });
        Ok(())
    }
}

impl EffectApplier for EffectProcessor {
    fn validate(&self, effect: &Effect) -> Result<(), EffectError> {
        if let EffectKind::Unrecognized(raw) = &effect.kind {
            return Err(EffectError::UnknownEffectType(raw.clone()));
        }
        let oversized = effect.kind == EffectKind::Item && effect.value.abs() > MAX_ITEM_COPIES;
        if !effect.value.is_finite() || oversized {
            return Err(EffectError::InvalidMagnitude {
                kind: effect.kind.clone(),
                value: effect.value,
            });
        }
        Ok(())
    }

    fn apply(&self, effect: &Effect, state: &mut GameState) -> Result<(), EffectError> {
        self.validate(effect)?;
        match &effect.kind {
            EffectKind::Popularity | EffectKind::Confidence | EffectKind::Energy => {
                let stats = &mut state.player.stats;
                let stat = match effect.kind {
                    EffectKind::Popularity => &mut stats.popularity,
                    EffectKind::Confidence => &mut stats.confidence,
                    _ => &mut stats.energy,
                };
                *stat = StatBounds::PERCENT.apply(*stat, effect.value);
            }
            EffectKind::Money => {
                let money = &mut state.player.stats.money;
                *money = money.saturating_add(effect.value as i64);
            }
            EffectKind::Affection | EffectKind::Trust => self.apply_relationship(effect, state)?,
            EffectKind::Item => self.apply_item(effect, state)?,
            EffectKind::Unrecognized(raw) => {
                return Err(EffectError::UnknownEffectType(raw.clone()))
            }
        }
        tracing::debug!(
            kind = %effect.kind,
            target = %effect.target,
            value = effect.value,
            "Applied effect"
        );
        Ok(())
    }

    fn apply_all(&self, effects: &[Effect], state: &mut GameState) -> Result<(), EffectError> {
        let mut scratch = state.clone();
        for effect in effects {
            self.apply(effect, &mut scratch)?;
        }
        *state = scratch;
        Ok(())
    }

    fn reverse(&self, effect: &Effect, state: &mut GameState) -> Result<(), EffectError> {
        self.apply(&effect.reversed(), state)
    }
}
