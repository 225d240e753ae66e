use serde_json::{json, Value};

use crate::question_engine::models::{AnswerOption, QuestionResult};

/// One entry of the host's choice dialog.
fn choice(option: &AnswerOption) -> Value {
    json!({ "value": option.value, "text": option.text })
}

/// Payload for the host's `showChoices` dialog.
///
/// Options keep their shuffled order; the host reports the chosen index back
/// and checks `value` to decide whether the sphinx takes `damage`.
pub fn question_to_json(question: &QuestionResult) -> Value {
    json!({
        "statement": question.statement,
        "options": question.options.iter().map(choice).collect::<Vec<_>>(),
        "damage": question.damage
    })
}

/// Course lines for a villager's speech; `null` when no course was found so
/// the host can fall back to its own line.
pub fn course_to_json(lines: Option<&[String]>) -> Value {
    json!({ "lines": lines })
}
