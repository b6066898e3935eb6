//! Tabular export of a single prediction.
//!
//! A CSV export always has a header row and exactly one data row.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::PredictionResult;
use crate::inputs::PredictionInput;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// The raw selections exactly as the interface presented them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selections {
    pub age: String,
    pub gender: String,
    pub health: String,
}

impl Selections {
    pub fn new(
        age: impl Into<String>,
        gender: impl Into<String>,
        health: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            gender: gender.into(),
            health: health.into(),
        }
    }
}

impl From<&PredictionInput> for Selections {
    fn from(input: &PredictionInput) -> Self {
        Self::new(
            input.age.to_string(),
            input.gender.to_string(),
            input.health.to_string(),
        )
    }
}

/// One exported row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    #[serde(rename = "age_50_or_older")]
    pub age: String,
    pub gender: String,
    #[serde(rename = "health_status")]
    pub health: String,
    pub logit: f64,
    pub probability: f64,
}

impl ExportRecord {
    pub fn new(selections: Selections, result: &PredictionResult) -> Self {
        Self {
            age: selections.age,
            gender: selections.gender,
            health: selections.health,
            logit: round_to(result.logit, 2),
            probability: round_to(result.probability, 3),
        }
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.serialize(self)?;
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write the record to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))?;
        log::debug!("wrote prediction export to {}", path.display());
        Ok(())
    }
}
