//! Display formatting for prediction results.
//!
//! Probabilities are shown to three decimals and as a percentage to one
//! decimal; the logit equation is shown with the substituted 0/1 values and
//! its result to two decimals.

use std::fmt;

use serde::Serialize;

use crate::engine::{Coefficients, PredictionResult};
use crate::explain::interpretation;
use crate::tier::Tier;

pub fn format_probability(probability: f64) -> String {
    format!("{probability:.3}")
}

pub fn format_percentage(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

pub fn format_logit(logit: f64) -> String {
    format!("{logit:.2}")
}

/// `Logit = 2.88 - 1.78×(1) - 2.36×(0) + 2.22×(1) = 3.32`
///
/// Terms come from the published coefficients, the same ones
/// [`PredictorEngine`](crate::PredictorEngine) evaluates.
pub fn logit_equation(result: &PredictionResult) -> String {
    let coefficients = Coefficients::STUDY;
    let mut eq = format!("Logit = {:.2}", coefficients.intercept);
    for term in coefficients.terms(&result.input) {
        let sign = if term.coefficient < 0.0 { '-' } else { '+' };
        eq.push_str(&format!(
            " {sign} {:.2}×({:.0})",
            term.coefficient.abs(),
            term.value
        ));
    }
    eq.push_str(" = ");
    eq.push_str(&format_logit(result.logit));
    eq
}

/// Rendered view of a prediction, ready for a terminal or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub probability: String,
    pub percentage: String,
    pub equation: String,
    pub tier: Tier,
    pub reasoning: Vec<String>,
    pub interpretation: String,
}

impl Report {
    pub fn new(result: &PredictionResult) -> Self {
        Self {
            probability: format_probability(result.probability),
            percentage: format_percentage(result.probability),
            equation: logit_equation(result),
            tier: result.tier,
            reasoning: result.reasoning.clone(),
            interpretation: interpretation(result),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Predicted probability: {} ({})",
            self.probability, self.percentage
        )?;
        writeln!(f, "{}", self.equation)?;
        writeln!(f, "Tier: {}", self.tier)?;
        write!(f, "{}", self.interpretation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::predict;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_baseline_report() {
        let report = Report::new(&predict(false, false, false));
        assert_eq!(report.probability, "0.947");
        assert_eq!(report.percentage, "94.7%");
        assert_eq!(
            report.equation,
            "Logit = 2.88 - 1.78×(0) - 2.36×(0) + 2.22×(0) = 2.88"
        );
        assert_eq!(report.tier, Tier::High);
    }

    #[test]
    fn equation_substitutes_values() {
        let report = Report::new(&predict(true, true, true));
        assert_eq!(
            report.equation,
            "Logit = 2.88 - 1.78×(1) - 2.36×(1) + 2.22×(1) = 0.96"
        );
        assert_eq!(report.probability, "0.723");
        assert_eq!(report.percentage, "72.3%");
    }

    #[test]
    fn equation_terms_sum_to_predicted_logit() {
        for result in crate::engine::outcome_table() {
            let sum = Coefficients::STUDY
                .terms(&result.input)
                .iter()
                .fold(Coefficients::STUDY.intercept, |acc, t| acc + t.contribution());
            assert_eq!(sum, result.logit);
            let equation = logit_equation(&result);
            assert!(equation.ends_with(&format!("= {}", format_logit(result.logit))));
        }
    }

    #[test]
    fn display_has_four_lines() {
        let text = Report::new(&predict(true, true, false)).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Predicted probability: 0.221 (22.1%)");
        assert_eq!(lines[2], "Tier: low");
        assert!(lines[1].ends_with("= -1.26"));
    }
}
