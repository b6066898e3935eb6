//! Presentation layer for the physical activity predictor: label
//! configuration, the interactive form, and machine-readable output.

pub mod config;
pub mod form;

use activity_model::{PredictionResult, Report, Selections};
use serde::Serialize;

pub use config::{ConfigError, FieldConfig, FormConfig};
pub use form::FormSession;

/// JSON shape of a single prediction.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutput {
    pub selections: Selections,
    pub result: PredictionResult,
    pub report: Report,
}

impl PredictionOutput {
    pub fn new(config: &FormConfig, result: PredictionResult) -> Self {
        Self {
            selections: config.selections(&result.input),
            report: Report::new(&result),
            result,
        }
    }
}
