//! Label configuration for the form.
//!
//! Labels are a presentation concern: the model only sees the 0/1 encoding.
//! A config file can rename any field; tables that are left out keep their
//! defaults.
//!
//! ```toml
//! title = "Physical Activity Predictor"
//!
//! [age]
//! prompt = "Is age ≥ 50?"
//! labels = ["No", "Yes"]
//! ```

use std::fs::read_to_string;
use std::io;
use std::path::Path;

use activity_model::{
    AgeBracket, Field, Gender, HealthStatus, PredictionInput, SelectionError, Selections,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldConfig {
    pub prompt: String,
    /// Label for the 0 encoding, then the 1 encoding.
    pub labels: [String; 2],
}

impl FieldConfig {
    fn new(prompt: &str, off: &str, on: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            labels: [off.to_string(), on.to_string()],
        }
    }

    pub fn label(&self, flag: bool) -> &str {
        &self.labels[usize::from(flag)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormConfig {
    pub title: String,
    pub age: FieldConfig,
    pub gender: FieldConfig,
    pub health: FieldConfig,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "Probability of Being Physically Active".to_string(),
            age: FieldConfig::new("Is age ≥ 50?", "No", "Yes"),
            gender: FieldConfig::new("Gender", "Male", "Female"),
            health: FieldConfig::new("Health Status", "Not good", "Good"),
        }
    }
}

impl FormConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded form config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for field in Field::ALL {
            let [off, on] = &self.field(field).labels;
            if off.trim().is_empty() || on.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("empty label for {field}")));
            }
            if off.trim().eq_ignore_ascii_case(on.trim()) {
                return Err(ConfigError::Invalid(format!(
                    "both {field} labels are '{}'",
                    off.trim()
                )));
            }
        }
        Ok(())
    }

    pub fn field(&self, field: Field) -> &FieldConfig {
        match field {
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Health => &self.health,
        }
    }

    /// Reduce a free-form answer to the field's binary value.
    ///
    /// Configured labels are tried first, then the spellings the model
    /// itself understands (`0`/`1`, canonical names).
    pub fn resolve(&self, field: Field, raw: &str) -> Result<bool, SelectionError> {
        let answer = raw.trim();
        if let Some(idx) = self
            .field(field)
            .labels
            .iter()
            .position(|label| label.trim().eq_ignore_ascii_case(answer))
        {
            return Ok(idx == 1);
        }
        match field {
            Field::Age => answer.parse::<AgeBracket>().map(AgeBracket::is_set),
            Field::Gender => answer.parse::<Gender>().map(Gender::is_set),
            Field::Health => answer.parse::<HealthStatus>().map(HealthStatus::is_set),
        }
    }

    pub fn resolve_input(
        &self,
        age: &str,
        gender: &str,
        health: &str,
    ) -> Result<PredictionInput, SelectionError> {
        Ok(PredictionInput::new(
            self.resolve(Field::Age, age)?,
            self.resolve(Field::Gender, gender)?,
            self.resolve(Field::Health, health)?,
        ))
    }

    /// The labels shown for `input`, as recorded in exports.
    pub fn selections(&self, input: &PredictionInput) -> Selections {
        Selections::new(
            self.age.label(input.age.is_set()),
            self.gender.label(input.gender.is_set()),
            self.health.label(input.health.is_set()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_use_form_labels() {
        let config = FormConfig::default();
        let input = PredictionInput::new(true, false, true);
        assert_eq!(config.selections(&input), Selections::new("Yes", "Male", "Good"));
    }

    #[test]
    fn resolves_labels_case_insensitively() {
        let config = FormConfig::default();
        assert_eq!(config.resolve(Field::Health, "not GOOD"), Ok(false));
        assert_eq!(config.resolve(Field::Age, " yes "), Ok(true));
        assert_eq!(config.resolve(Field::Gender, "0"), Ok(false));
        assert!(config.resolve(Field::Gender, "other").is_err());
    }

    #[test]
    fn partial_file_keeps_default_tables() {
        let config = FormConfig::from_toml_str(
            r#"
            title = "Actividad física"

            [gender]
            prompt = "Sexo"
            labels = ["Hombre", "Mujer"]
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Actividad física");
        assert_eq!(config.resolve(Field::Gender, "mujer"), Ok(true));
        assert_eq!(config.age, FormConfig::default().age);
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = FormConfig::from_toml_str(
            r#"
            [health]
            prompt = "Health"
            labels = ["Good", "good"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.toml");
        std::fs::write(&path, "title = \"Custom\"\n").unwrap();
        assert_eq!(FormConfig::load(&path).unwrap().title, "Custom");
        assert!(matches!(
            FormConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
