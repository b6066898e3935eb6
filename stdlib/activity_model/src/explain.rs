use crate::engine::PredictionResult;
use crate::inputs::PredictionInput;

/// One phrase per input dimension, in age, gender, health order.
pub fn reasoning_phrases(input: &PredictionInput) -> Vec<String> {
    vec![
        input.age.phrase().to_string(),
        input.gender.phrase().to_string(),
        input.health.phrase().to_string(),
    ]
}

/// Human-readable sentence describing a prediction.
pub fn interpretation(result: &PredictionResult) -> String {
    let who = match result.reasoning.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, last] => format!("{first} and {last}"),
        [first, middle @ .., last] => format!("{first}, {} and {last}", middle.join(", ")),
    };
    format!(
        "A person who is {who} has a {} probability of being physically active.",
        result.tier
    )
}
