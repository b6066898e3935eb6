//! Logistic regression predictor.
//!
//! The model is a fixed closed-form formula over three binary inputs:
//!
//! ```text
//! logit       = 2.88 - 1.78*age - 2.36*gender + 2.22*health
//! probability = 1 / (1 + exp(-logit))
//! ```
//!
//! Every call is pure and total; the logit takes one of eight values in
//! roughly [-4.04, 5.10], so `exp` never overflows.

use serde::{Deserialize, Serialize};

use crate::explain::reasoning_phrases;
use crate::inputs::{Field, PredictionInput};
use crate::tier::Tier;

/// Logistic function mapping a logit to a probability in (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// One `coefficient * value` term of the linear predictor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub field: Field,
    pub coefficient: f64,
    pub value: f64,
}

impl Term {
    pub fn contribution(&self) -> f64 {
        self.coefficient * self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub intercept: f64,
    pub age: f64,
    pub gender: f64,
    pub health: f64,
}

impl Coefficients {
    /// Published estimates for the physical activity model.
    pub const STUDY: Coefficients = Coefficients {
        intercept: 2.88,
        age: -1.78,
        gender: -2.36,
        health: 2.22,
    };

    pub fn terms(&self, input: &PredictionInput) -> [Term; 3] {
        let [age, gender, health] = input.encoded();
        [
            Term {
                field: Field::Age,
                coefficient: self.age,
                value: age,
            },
            Term {
                field: Field::Gender,
                coefficient: self.gender,
                value: gender,
            },
            Term {
                field: Field::Health,
                coefficient: self.health,
                value: health,
            },
        ]
    }

    pub fn logit(&self, input: &PredictionInput) -> f64 {
        self.terms(input)
            .iter()
            .fold(self.intercept, |acc, term| acc + term.contribution())
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::STUDY
    }
}

/// Outcome of a single prediction. Built once per call and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub input: PredictionInput,
    pub logit: f64,
    pub probability: f64,
    pub tier: Tier,
    pub reasoning: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PredictorEngine {
    coefficients: Coefficients,
}

impl PredictorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predict(&self, input: &PredictionInput) -> PredictionResult {
        let logit = self.coefficients.logit(input);
        let probability = sigmoid(logit);
        let tier = Tier::from_probability(probability);
        log::trace!("predict {input}: logit={logit} probability={probability} tier={tier}");

        PredictionResult {
            input: *input,
            logit,
            probability,
            tier,
            reasoning: reasoning_phrases(input),
        }
    }

    /// Predictions for all eight input combinations, in
    /// [`PredictionInput::all`] order.
    pub fn outcome_table(&self) -> Vec<PredictionResult> {
        PredictionInput::all().map(|input| self.predict(&input)).collect()
    }
}

/// Predict from the raw flags: `age_bracket` is 50 or older, `gender` is
/// female, `health` is good.
pub fn predict(age_bracket: bool, gender: bool, health: bool) -> PredictionResult {
    predict_input(&PredictionInput::new(age_bracket, gender, health))
}

pub fn predict_input(input: &PredictionInput) -> PredictionResult {
    PredictorEngine::new().predict(input)
}

pub fn outcome_table() -> Vec<PredictionResult> {
    PredictorEngine::new().outcome_table()
}
