//! Content catalog: the characters, events and items a season starts from.
//!
//! The built-in catalog ships three contestants, an event for every event
//! type and two gifts. A JSON file with the same shape can replace it (see
//! `settings::CONTENT_PATH_VAR`).

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use clisland_domain::{
    Appearance, Character, CharacterId, CharacterStats, Choice, ChoiceId, Comparison, Effect,
    EffectKind, Event, EventId, EventType, GameConfig, Item, ItemType, Personality, Requirement,
    RequirementKind,
};

use crate::infrastructure::ports::{ConfigError, ConfigProvider};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ContentCatalog {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            characters = catalog.characters.len(),
            events = catalog.events.len(),
            items = catalog.items.len(),
            "Loaded content catalog"
        );
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        Self {
            game: GameConfig::default(),
            characters: vec![
                contestant(
                    "Emma",
                    24,
                    Personality {
                        openness: 80.0,
                        conscientiousness: 60.0,
                        extraversion: 70.0,
                        agreeableness: 85.0,
                        neuroticism: 30.0,
                    },
                    Appearance {
                        height: 165,
                        build: "slim".to_string(),
                        hair_color: "blonde".to_string(),
                        eye_color: "blue".to_string(),
                        style: "casual".to_string(),
                    },
                    CharacterStats {
                        popularity: 75.0,
                        energy: 80.0,
                        stress: 20.0,
                    },
                ),
                contestant(
                    "James",
                    26,
                    Personality {
                        openness: 70.0,
                        conscientiousness: 75.0,
                        extraversion: 60.0,
                        agreeableness: 70.0,
                        neuroticism: 40.0,
                    },
                    Appearance {
                        height: 180,
                        build: "athletic".to_string(),
                        hair_color: "brown".to_string(),
                        eye_color: "brown".to_string(),
                        style: "sporty".to_string(),
                    },
                    CharacterStats {
                        popularity: 65.0,
                        energy: 85.0,
                        stress: 25.0,
                    },
                ),
                contestant(
                    "Sophie",
                    23,
                    Personality {
                        openness: 90.0,
                        conscientiousness: 40.0,
                        extraversion: 85.0,
                        agreeableness: 60.0,
                        neuroticism: 55.0,
                    },
                    Appearance {
                        height: 170,
                        build: "petite".to_string(),
                        hair_color: "red".to_string(),
                        eye_color: "green".to_string(),
                        style: "glamorous".to_string(),
                    },
                    CharacterStats {
                        popularity: 70.0,
                        energy: 75.0,
                        stress: 35.0,
                    },
                ),
            ],
            events: builtin_events(),
            items: vec![
                Item::new("Rose", ItemType::Gift, 50).with_description("A single red rose"),
                Item::new("Chocolate", ItemType::Gift, 30)
                    .with_description("A box of villa-shop chocolates"),
            ],
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn contestant(
    name: &str,
    age: u32,
    personality: Personality,
    appearance: Appearance,
    stats: CharacterStats,
) -> Character {
    Character {
        id: CharacterId::new(),
        name: name.to_string(),
        age,
        personality,
        appearance,
        stats,
        is_available: true,
        created_at: Utc::now(),
    }
}

fn event(title: &str, description: &str, event_type: EventType, choices: Vec<Choice>) -> Event {
    Event {
        id: EventId::new(),
        title: title.to_string(),
        description: description.to_string(),
        event_type,
        choices,
        requirements: Vec::new(),
        is_active: true,
        created_at: Utc::now(),
    }
}

fn choice(id: &str, text: &str, effects: Vec<Effect>) -> Choice {
    Choice {
        id: ChoiceId::new(id),
        text: text.to_string(),
        description: String::new(),
        effects,
        requirements: Vec::new(),
    }
}

fn builtin_events() -> Vec<Event> {
    let mut welcome = event(
        "Welcome to the Villa",
        "You arrive at the villa and meet the other contestants.",
        EventType::Drama,
        vec![
            choice(
                "choice_1",
                "Introduce yourself confidently",
                vec![
                    Effect::new(EffectKind::Confidence, "player", 10.0),
                    Effect::new(EffectKind::Popularity, "player", 5.0),
                ],
            ),
            choice(
                "choice_2",
                "Stay quiet and observe",
                vec![Effect::new(EffectKind::Confidence, "player", -5.0)],
            ),
        ],
    );
    welcome.choices[0].description = "Make a strong first impression".to_string();
    welcome.choices[1].description = "Take time to understand the dynamics".to_string();

    let challenge = event(
        "First Challenge",
        "The islanders compete in a messy relay.",
        EventType::Challenge,
        vec![
            choice(
                "choice_3",
                "Take charge of your team",
                vec![
                    Effect::new(EffectKind::Confidence, "player", 15.0),
                    Effect::new(EffectKind::Energy, "player", -10.0),
                ],
            ),
            choice(
                "choice_4",
                "Support James from the sidelines",
                vec![Effect::new(EffectKind::Trust, "James", 10.0)],
            ),
        ],
    );

    let mut date = event(
        "Dinner Date",
        "A candlelit table is set up on the terrace.",
        EventType::Date,
        vec![
            choice(
                "choice_5",
                "Open up to Emma about your past",
                vec![
                    Effect::new(EffectKind::Affection, "Emma", 10.0),
                    Effect::new(EffectKind::Trust, "Emma", 5.0),
                ],
            ),
            choice(
                "choice_6",
                "Keep the conversation light",
                vec![Effect::new(EffectKind::Confidence, "player", 5.0)],
            ),
        ],
    );
    date.choices[0].requirements = vec![Requirement::new(
        RequirementKind::Energy,
        "player",
        Comparison::Gte,
        20.0,
    )];

    let mut market = event(
        "Villa Market",
        "A stall of treats appears by the pool.",
        EventType::Drama,
        vec![
            choice(
                "choice_7",
                "Buy a rose",
                vec![
                    Effect::new(EffectKind::Money, "player", -50.0),
                    Effect::new(EffectKind::Item, "Rose", 1.0),
                ],
            ),
            choice(
                "choice_8",
                "Save your money",
                vec![Effect::new(EffectKind::Popularity, "player", -2.0)],
            ),
        ],
    );
    market.choices[0].requirements = vec![Requirement::new(
        RequirementKind::Money,
        "player",
        Comparison::Gte,
        50.0,
    )];

    let mut elimination = event(
        "Elimination Night",
        "The public vote is in. Someone is leaving tonight.",
        EventType::Elimination,
        vec![
            choice(
                "choice_9",
                "Plead your case to the villa",
                vec![Effect::new(EffectKind::Popularity, "player", 10.0)],
            ),
            choice(
                "choice_10",
                "Accept whatever happens",
                vec![Effect::new(EffectKind::Confidence, "player", -10.0)],
            ),
        ],
    );
    elimination.choices[0].requirements = vec![Requirement::new(
        RequirementKind::Popularity,
        "player",
        Comparison::Gte,
        30.0,
    )];

    let mut recoupling = event(
        "Recoupling Ceremony",
        "Everyone gathers by the fire pit to choose who to couple up with.",
        EventType::Recoupling,
        vec![
            choice(
                "choice_11",
                "Couple up with Sophie",
                vec![Effect::new(EffectKind::Affection, "Sophie", 20.0)],
            ),
            choice(
                "choice_12",
                "Give a Rose to Emma",
                vec![
                    Effect::new(EffectKind::Item, "Rose", -1.0),
                    Effect::new(EffectKind::Affection, "Emma", 15.0),
                ],
            ),
        ],
    );
    recoupling.choices[0].requirements = vec![Requirement::new(
        RequirementKind::Affection,
        "Sophie",
        Comparison::Gte,
        10.0,
    )];
    recoupling.choices[1].requirements = vec![Requirement::new(
        RequirementKind::Item,
        "Rose",
        Comparison::Gte,
        1.0,
    )];

    vec![welcome, challenge, date, market, elimination, recoupling]
}

// =============================================================================
// Provider
// =============================================================================

/// Serves a content catalog through the `ConfigProvider` port.
pub struct CatalogConfigProvider {
    catalog: ContentCatalog,
}

impl CatalogConfigProvider {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }
}

impl ConfigProvider for CatalogConfigProvider {
    fn game_config(&self) -> Result<GameConfig, ConfigError> {
        self.catalog.game.validate()?;
        Ok(self.catalog.game.clone())
    }

    fn event_configs(&self) -> Result<Vec<Event>, ConfigError> {
        Ok(self.catalog.events.clone())
    }

    fn character_configs(&self) -> Result<Vec<Character>, ConfigError> {
        if self.catalog.characters.is_empty() {
            return Err(ConfigError::Unavailable(
                "content catalog has no characters".to_string(),
            ));
        }
        Ok(self.catalog.characters.clone())
    }

    fn item_configs(&self) -> Result<Vec<Item>, ConfigError> {
        Ok(self.catalog.items.clone())
    }
}
