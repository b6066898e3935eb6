//! Categorical model inputs.
//!
//! Each input has exactly two admissible values with a fixed 0/1 encoding.
//! Parsing from text lives here so front-ends can reduce free-form answers
//! to the enumerated domain before calling the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three input dimensions of the model, in reasoning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    Gender,
    Health,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Age, Field::Gender, Field::Health];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Age => "age bracket",
            Field::Gender => "gender",
            Field::Health => "health status",
        };
        f.write_str(s)
    }
}

/// A selection that does not map onto the field's two values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {field} selection: '{value}'")]
pub struct SelectionError {
    pub field: Field,
    pub value: String,
}

impl SelectionError {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Resolve `raw` against the accepted spellings of a binary field.
///
/// `0`/`1` and `false`/`true` are accepted for every field.
fn parse_flag(field: Field, raw: &str, off: &[&str], on: &[&str]) -> Result<bool, SelectionError> {
    let norm = normalize(raw);
    match norm.as_str() {
        "0" | "false" => return Ok(false),
        "1" | "true" => return Ok(true),
        _ => {}
    }
    if off.contains(&norm.as_str()) {
        Ok(false)
    } else if on.contains(&norm.as_str()) {
        Ok(true)
    } else {
        Err(SelectionError::new(field, raw.trim()))
    }
}

/// Age bracket, split at 50 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Under50,
    FiftyOrOlder,
}

impl AgeBracket {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            AgeBracket::FiftyOrOlder
        } else {
            AgeBracket::Under50
        }
    }

    pub fn is_set(self) -> bool {
        self == AgeBracket::FiftyOrOlder
    }

    pub fn encode(self) -> f64 {
        if self.is_set() {
            1.0
        } else {
            0.0
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            AgeBracket::Under50 => "younger than 50",
            AgeBracket::FiftyOrOlder => "aged 50 or older",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AgeBracket::Under50 => "under 50",
            AgeBracket::FiftyOrOlder => "50 or older",
        })
    }
}

impl FromStr for AgeBracket {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "no"/"yes" answer the question "is age 50 or older?"
        parse_flag(
            Field::Age,
            s,
            &["no", "under50", "under 50", "<50", "younger than 50"],
            &["yes", "fiftyorolder", "50 or older", "50+", ">=50", "≥50", "aged 50 or older"],
        )
        .map(AgeBracket::from_flag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn is_set(self) -> bool {
        self == Gender::Female
    }

    pub fn encode(self) -> f64 {
        if self.is_set() {
            1.0
        } else {
            0.0
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

impl FromStr for Gender {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag(Field::Gender, s, &["male", "m"], &["female", "f"]).map(Gender::from_flag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    NotGood,
    Good,
}

impl HealthStatus {
    pub fn from_flag(flag: bool) -> Self {
        if flag {
            HealthStatus::Good
        } else {
            HealthStatus::NotGood
        }
    }

    pub fn is_set(self) -> bool {
        self == HealthStatus::Good
    }

    pub fn encode(self) -> f64 {
        if self.is_set() {
            1.0
        } else {
            0.0
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            HealthStatus::NotGood => "not in good health",
            HealthStatus::Good => "in good health",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HealthStatus::NotGood => "not good",
            HealthStatus::Good => "good",
        })
    }
}

impl FromStr for HealthStatus {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_flag(
            Field::Health,
            s,
            &["not good", "notgood", "poor", "bad"],
            &["good"],
        )
        .map(HealthStatus::from_flag)
    }
}

/// One full set of answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionInput {
    pub age: AgeBracket,
    pub gender: Gender,
    pub health: HealthStatus,
}

impl PredictionInput {
    pub fn new(age: bool, gender: bool, health: bool) -> Self {
        Self {
            age: AgeBracket::from_flag(age),
            gender: Gender::from_flag(gender),
            health: HealthStatus::from_flag(health),
        }
    }

    /// All eight combinations in binary order, age being the most
    /// significant bit.
    pub fn all() -> impl Iterator<Item = PredictionInput> {
        (0u8..8).map(|bits| PredictionInput::new(bits & 4 != 0, bits & 2 != 0, bits & 1 != 0))
    }

    /// The 0/1 encodings in (age, gender, health) order.
    pub fn encoded(&self) -> [f64; 3] {
        [self.age.encode(), self.gender.encode(), self.health.encode()]
    }
}

impl fmt::Display for PredictionInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "age {}, {}, health {}", self.age, self.gender, self.health)
    }
}
