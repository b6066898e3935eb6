//! Probability of being physically active from age bracket, gender and
//! health status.
//!
//! The model is a fixed logistic regression. [`predict`] turns the three
//! binary answers into a [`PredictionResult`]; [`Report`] renders it and
//! [`ExportRecord`] produces the one-row CSV export.
//!
//! ```
//! use activity_model::{predict, Tier};
//!
//! let result = predict(false, false, false);
//! assert_eq!(result.tier, Tier::High);
//! assert!((result.logit - 2.88).abs() < 1e-12);
//! ```

pub mod engine;
pub mod explain;
pub mod export;
pub mod inputs;
pub mod render;
pub mod tier;

pub use engine::{
    outcome_table, predict, predict_input, sigmoid, Coefficients, PredictionResult,
    PredictorEngine, Term,
};
pub use explain::{interpretation, reasoning_phrases};
pub use export::{round_to, ExportError, ExportRecord, Selections};
pub use inputs::{AgeBracket, Field, Gender, HealthStatus, PredictionInput, SelectionError};
pub use render::Report;
pub use tier::{Tier, HIGH_THRESHOLD, MODERATE_THRESHOLD};
