use activity_form::{FormConfig, FormSession, PredictionOutput};
use activity_model::{ExportRecord, Field, PredictorEngine, Tier};
use approx::assert_abs_diff_eq;
use pretty_assertions::assert_eq;
use tests::{closed_form, init_test_logging};

#[test]
fn form_answers_flow_into_prediction_and_export() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prediction.csv");

    let mut session = FormSession::new(FormConfig::default());
    for answer in ["yes", "male", "not good"] {
        let (_, exit) = session.handle_line(answer);
        assert!(!exit);
    }

    let result = session.last_prediction().cloned().unwrap();
    let (logit, probability) = closed_form(true, false, false);
    assert_abs_diff_eq!(result.logit, logit, epsilon = 1e-9);
    assert_abs_diff_eq!(result.probability, probability, epsilon = 1e-9);
    assert_eq!(result.tier, Tier::Moderate);

    let (out, _) = session.handle_line(&format!(":save {}", path.display()));
    assert_eq!(out.len(), 1);

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "age_50_or_older,gender,health_status,logit,probability\nYes,Male,Not good,1.1,0.75\n"
    );
}

#[test]
fn custom_labels_are_exported_verbatim() {
    let config = FormConfig::from_toml_str(
        r#"
        [age]
        prompt = "¿Tiene 50 años o más?"
        labels = ["No", "Sí"]

        [health]
        prompt = "Estado de salud"
        labels = ["Regular", "Bueno"]
        "#,
    )
    .unwrap();

    let input = config.resolve_input("Sí", "female", "Bueno").unwrap();
    let result = PredictorEngine::new().predict(&input);
    let csv = ExportRecord::new(config.selections(&input), &result)
        .to_csv_string()
        .unwrap();
    assert_eq!(csv.lines().nth(1), Some("Sí,Female,Bueno,0.96,0.723"));
}

#[test]
fn rejected_answer_names_the_field() {
    let config = FormConfig::default();
    let err = config.resolve_input("No", "Male", "excellent").unwrap_err();
    assert_eq!(err.field, Field::Health);
    assert_eq!(err.value, "excellent");
}

#[test]
fn json_output_carries_result_and_report() {
    let config = FormConfig::default();
    let result = activity_model::predict(false, true, false);
    let json = serde_json::to_value(PredictionOutput::new(&config, result)).unwrap();

    assert_eq!(json["selections"]["gender"], "Female");
    assert_eq!(json["result"]["tier"], "moderate");
    assert_eq!(json["result"]["input"]["age"], "under50");
    assert_eq!(json["report"]["probability"], "0.627");
    assert_eq!(json["report"]["reasoning"][1], "female");
}
