use std::collections::HashSet;

use serde_json::Value as JsonValue;

use crate::models::question::{AnswerKey, Question};

/// Judges a submitted answer against a question's answer key.
pub struct Evaluator;

impl Evaluator {
    /// `Set` keys compare as sets of strings, ignoring order and repeats.
    /// `Scalar` keys compare by direct value equality. A `null` or
    /// shape-mismatched submission is incorrect, never an error.
    pub fn evaluate(question: &Question, submitted: &JsonValue) -> bool {
        match &question.correct {
            AnswerKey::Set(expected) => match string_set(submitted) {
                Some(given) => {
                    let expected: HashSet<&str> = expected.iter().map(String::as_str).collect();
                    given == expected
                }
                None => false,
            },
            AnswerKey::Scalar(expected) => submitted == expected,
        }
    }
}

/// Set reading of a submission: must be an array of strings.
fn string_set(value: &JsonValue) -> Option<HashSet<&str>> {
    let items = value.as_array()?;
    let mut set = HashSet::with_capacity(items.len());
    for item in items {
        set.insert(item.as_str()?);
    }
    Some(set)
}
