//! Requirements - gating conditions over the current game state.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which value a requirement reads.
///
/// Like `EffectKind`, unknown names survive deserialization and only fail
/// when evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequirementKind {
    Affection,
    Trust,
    Popularity,
    Confidence,
    Energy,
    Money,
    Item,
    DayNumber,
    Unrecognized(String),
}

impl RequirementKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Affection => "affection",
            Self::Trust => "trust",
            Self::Popularity => "popularity",
            Self::Confidence => "confidence",
            Self::Energy => "energy",
            Self::Money => "money",
            Self::Item => "item",
            Self::DayNumber => "day_number",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RequirementKind {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "affection" => Self::Affection,
            "trust" => Self::Trust,
            "popularity" => Self::Popularity,
            "confidence" => Self::Confidence,
            "energy" => Self::Energy,
            "money" => Self::Money,
            "item" => Self::Item,
            "day_number" | "daynumber" => Self::DayNumber,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<RequirementKind> for String {
    fn from(kind: RequirementKind) -> Self {
        match kind {
            RequirementKind::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// Comparison operator of a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl Comparison {
    /// `actual <op> expected`
    pub fn holds(self, actual: f64, expected: f64) -> bool {
        match self {
            Self::Eq => actual == expected,
            Self::Gt => actual > expected,
            Self::Lt => actual < expected,
            Self::Gte => actual >= expected,
            Self::Lte => actual <= expected,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

/// A condition that must hold before an event or choice is available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    /// Character for affection/trust, item for item, ignored otherwise.
    #[serde(default)]
    pub target: String,
    pub value: f64,
    pub operator: Comparison,
}

impl Requirement {
    pub fn new(
        kind: RequirementKind,
        target: impl Into<String>,
        operator: Comparison,
        value: f64,
    ) -> Self {
        Self {
            kind,
            target: target.into(),
            value,
            operator,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.target.is_empty() || self.target == "player" {
            write!(f, "{} {} {}", self.kind, self.operator.symbol(), self.value)
        } else {
            write!(
                f,
                "{}({}) {} {}",
                self.kind,
                self.target,
                self.operator.symbol(),
                self.value
            )
        }
    }
}
