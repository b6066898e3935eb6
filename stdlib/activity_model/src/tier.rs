use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the high tier.
pub const HIGH_THRESHOLD: f64 = 0.80;
/// Lower bound (inclusive) of the moderate tier.
pub const MODERATE_THRESHOLD: f64 = 0.50;

/// Coarse bucket of a predicted probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Moderate,
    High,
}

impl Tier {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= HIGH_THRESHOLD {
            Tier::High
        } else if probability >= MODERATE_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Moderate => "moderate",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sigmoid;

    #[test]
    fn boundaries_are_inclusive_from_below() {
        assert_eq!(Tier::from_probability(0.80), Tier::High);
        assert_eq!(Tier::from_probability(0.50), Tier::Moderate);
        assert_eq!(Tier::from_probability(0.7999999), Tier::Moderate);
        assert_eq!(Tier::from_probability(0.4999999), Tier::Low);
        assert_eq!(Tier::from_probability(0.0), Tier::Low);
        assert_eq!(Tier::from_probability(1.0), Tier::High);
    }

    #[test]
    fn boundary_logits_land_in_upper_tier() {
        // ln(4) is the logit of 0.8; zero is the logit of 0.5
        assert_eq!(sigmoid(4f64.ln()), 0.8);
        assert_eq!(Tier::from_probability(sigmoid(4f64.ln())), Tier::High);
        assert_eq!(Tier::from_probability(sigmoid(0.0)), Tier::Moderate);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Moderate).unwrap(), "\"moderate\"");
        assert_eq!(Tier::High.to_string(), "high");
    }
}
