//! Environment overrides for game tunables.
//!
//! Supported environment variables:
//! - CLISLAND_MAX_DAYS: season length (>= 1)
//! - CLISLAND_ELIMINATION_DAY: day the elimination event is scheduled (>= 1)
//! - CLISLAND_FINALE_DAY: day the recoupling event is scheduled (>= 1)
//! - CLISLAND_MAX_CHARACTERS: how many contestants are loaded (>= 1)
//! - CLISLAND_STARTING_MONEY: the player's opening balance
//!
//! Values that do not parse or fall out of range are ignored with a warning.

use std::str::FromStr;

use clisland_domain::GameConfig;

/// Path of a JSON content catalog to load instead of the built-in one.
pub const CONTENT_PATH_VAR: &str = "CLISLAND_CONTENT_PATH";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut GameConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary key lookup.
pub fn apply_overrides(config: &mut GameConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(days) = parse_override::<u32>(&lookup, "CLISLAND_MAX_DAYS", |v| *v >= 1) {
        config.max_days = days;
    }
    if let Some(day) = parse_override::<u32>(&lookup, "CLISLAND_ELIMINATION_DAY", |v| *v >= 1) {
        config.elimination_day = day;
    }
    if let Some(day) = parse_override::<u32>(&lookup, "CLISLAND_FINALE_DAY", |v| *v >= 1) {
        config.finale_day = day;
    }
    if let Some(count) = parse_override::<usize>(&lookup, "CLISLAND_MAX_CHARACTERS", |v| *v >= 1)
    {
        config.max_characters = count;
    }
    if let Some(money) = parse_override::<i64>(&lookup, "CLISLAND_STARTING_MONEY", |_| true) {
        config.starting_money = money;
    }
}

fn parse_override<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    in_range: impl Fn(&T) -> bool,
) -> Option<T>
where
    T: FromStr + std::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) if in_range(&value) => {
            tracing::info!(key, value = %value, "Applied environment override");
            Some(value)
        }
        Ok(value) => {
            tracing::warn!(key, value = %value, "Environment override out of range, ignoring");
            None
        }
        Err(_) => {
            tracing::warn!(key, val = %raw, "Environment override is not a valid number, ignoring");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn valid_overrides_replace_defaults() {
        let mut config = GameConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[
                ("CLISLAND_MAX_DAYS", "10"),
                ("CLISLAND_ELIMINATION_DAY", "5"),
                ("CLISLAND_FINALE_DAY", "10"),
                ("CLISLAND_MAX_CHARACTERS", "2"),
                ("CLISLAND_STARTING_MONEY", "-20"),
            ]),
        );

        assert_eq!(config.max_days, 10);
        assert_eq!(config.elimination_day, 5);
        assert_eq!(config.finale_day, 10);
        assert_eq!(config.max_characters, 2);
        assert_eq!(config.starting_money, -20);
    }

    #[test]
    fn invalid_overrides_are_ignored() {
        let mut config = GameConfig::default();
        apply_overrides(
            &mut config,
            lookup(&[("CLISLAND_MAX_DAYS", "0"), ("CLISLAND_FINALE_DAY", "soon")]),
        );

        assert_eq!(config, GameConfig::default());
    }
}
