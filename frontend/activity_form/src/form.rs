//! Line-oriented interactive form.
//!
//! The session asks for age, gender and health in that order. After the
//! third answer it prints the report and starts over; `:save` downloads the
//! last prediction as CSV.

use std::path::{Path, PathBuf};

use activity_model::{
    ExportRecord, Field, PredictionInput, PredictionResult, PredictorEngine, Report, Selections,
};

use crate::config::FormConfig;

const HELP: &[&str] = &[
    "commands: :help, :reset, :save <file>, :quit",
    "answer with one of the listed labels, or 0/1",
];

#[derive(Debug)]
pub struct FormSession {
    config: FormConfig,
    engine: PredictorEngine,
    answers: Vec<bool>,
    last: Option<(PredictionResult, Selections)>,
    autosave: Option<PathBuf>,
}

impl FormSession {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            engine: PredictorEngine::new(),
            answers: Vec::with_capacity(Field::ALL.len()),
            last: None,
            autosave: None,
        }
    }

    /// Export every completed prediction to `path`.
    pub fn with_autosave(mut self, path: impl Into<PathBuf>) -> Self {
        self.autosave = Some(path.into());
        self
    }

    pub fn intro(&self) -> Vec<String> {
        vec![
            self.config.title.clone(),
            "This tool estimates the probability of a person being physically active.".to_string(),
            "type :help for commands".to_string(),
        ]
    }

    pub fn current_field(&self) -> Field {
        Field::ALL[self.answers.len()]
    }

    pub fn prompt(&self) -> String {
        let field = self.config.field(self.current_field());
        format!("{} [{}/{}] > ", field.prompt, field.labels[0], field.labels[1])
    }

    pub fn last_prediction(&self) -> Option<&PredictionResult> {
        self.last.as_ref().map(|(result, _)| result)
    }

    /// Process one line of input. Returns the lines to print and whether the
    /// session should end.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }

        let field = self.current_field();
        match self.config.resolve(field, trimmed) {
            Ok(flag) => self.answers.push(flag),
            Err(e) => {
                let labels = &self.config.field(field).labels;
                return (
                    vec![format!(
                        "error: {e} (expected '{}' or '{}')",
                        labels[0], labels[1]
                    )],
                    false,
                );
            }
        }

        if self.answers.len() < Field::ALL.len() {
            return (Vec::new(), false);
        }
        (self.complete(), false)
    }

    fn complete(&mut self) -> Vec<String> {
        let input = PredictionInput::new(self.answers[0], self.answers[1], self.answers[2]);
        self.answers.clear();

        let result = self.engine.predict(&input);
        let selections = self.config.selections(&input);
        log::info!(
            "prediction for {input}: probability={:.3} tier={}",
            result.probability,
            result.tier
        );

        let mut out: Vec<String> = Report::new(&result)
            .to_string()
            .lines()
            .map(str::to_string)
            .collect();
        self.last = Some((result, selections));

        if let Some(path) = self.autosave.clone() {
            out.push(self.save(&path));
        }
        out.push(
            "type :save <file> to download the CSV, or answer again for a new prediction".to_string(),
        );
        out
    }

    fn save(&self, path: &Path) -> String {
        let Some((result, selections)) = &self.last else {
            return "error: nothing to save yet".to_string();
        };
        match ExportRecord::new(selections.clone(), result).save(path) {
            Ok(()) => format!("saved prediction to {}", path.display()),
            Err(e) => format!("error: failed to write '{}': {e}", path.display()),
        }
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        let (cmd, arg) = match line.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };
        match cmd {
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":help" => (HELP.iter().map(|s| s.to_string()).collect(), false),
            ":reset" => {
                self.answers.clear();
                (vec!["form cleared".to_string()], false)
            }
            ":save" if arg.is_empty() => (vec!["usage: :save <file>".to_string()], false),
            ":save" => (vec![self.save(Path::new(arg))], false),
            _ => (vec![format!("unknown command: {cmd} (try :help)")], false),
        }
    }
}
