//! Events and the choices they offer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::effect::Effect;
use crate::entities::requirement::Requirement;
use crate::{ChoiceId, EventId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Challenge,
    Date,
    Elimination,
    Drama,
    Recoupling,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Challenge => "challenge",
            Self::Date => "date",
            Self::Elimination => "elimination",
            Self::Drama => "drama",
            Self::Recoupling => "recoupling",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A player decision point inside an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
    #[serde(default)]
    pub description: String,
    /// Applied in order once the choice is accepted.
    #[serde(default)]
    pub effects: Vec<Effect>,
    /// Must all hold before the choice may be taken.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// A content node the engine schedules onto a day.
///
/// Immutable once created except for `is_active`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Gate the event itself.
    #[serde(default)]
    pub requirements: Vec<Requirement>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Event {
    pub fn choice(&self, id: &ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| &choice.id == id)
    }
}
