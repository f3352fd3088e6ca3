//! Personality and appearance value objects.

use serde::{Deserialize, Serialize};

use super::stat::StatBounds;

/// Big-five personality vector, each trait 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl Personality {
    /// Every trait at the midpoint. New players start here.
    pub const NEUTRAL: Personality = Personality {
        openness: 50.0,
        conscientiousness: 50.0,
        extraversion: 50.0,
        agreeableness: 50.0,
        neuroticism: 50.0,
    };

    /// Compatibility score between two personalities, 0-100.
    ///
    /// `max(0, 100 - (|Δopenness| + |Δextraversion| + |Δagreeableness|))`.
    /// Conscientiousness and neuroticism do not take part. The score is
    /// symmetric and never accumulates.
    pub fn compatibility_with(&self, other: &Personality) -> f64 {
        let distance = (self.openness - other.openness).abs()
            + (self.extraversion - other.extraversion).abs()
            + (self.agreeableness - other.agreeableness).abs();
        StatBounds::PERCENT.clamp(100.0 - distance)
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Physical characteristics. Descriptive only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Centimetres.
    pub height: u32,
    pub build: String,
    pub hair_color: String,
    pub eye_color: String,
    pub style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emma() -> Personality {
        Personality {
            openness: 70.0,
            conscientiousness: 60.0,
            extraversion: 80.0,
            agreeableness: 75.0,
            neuroticism: 30.0,
        }
    }

    #[test]
    fn compatibility_uses_three_axes() {
        // |50-70| + |50-80| + |50-75| = 75
        assert_eq!(Personality::NEUTRAL.compatibility_with(&emma()), 25.0);
    }

    #[test]
    fn compatibility_is_symmetric() {
        let a = emma();
        let b = Personality {
            openness: 10.0,
            conscientiousness: 99.0,
            extraversion: 35.0,
            agreeableness: 90.0,
            neuroticism: 1.0,
        };
        assert_eq!(a.compatibility_with(&b), b.compatibility_with(&a));
    }

    #[test]
    fn compatibility_ignores_conscientiousness_and_neuroticism() {
        let mut other = Personality::NEUTRAL;
        other.conscientiousness = 0.0;
        other.neuroticism = 100.0;
        assert_eq!(Personality::NEUTRAL.compatibility_with(&other), 100.0);
    }

    #[test]
    fn compatibility_floors_at_zero() {
        let low = Personality {
            openness: 0.0,
            conscientiousness: 50.0,
            extraversion: 0.0,
            agreeableness: 0.0,
            neuroticism: 50.0,
        };
        let high = Personality {
            openness: 100.0,
            conscientiousness: 50.0,
            extraversion: 100.0,
            agreeableness: 100.0,
            neuroticism: 50.0,
        };
        assert_eq!(low.compatibility_with(&high), 0.0);
    }
}
