use serde::Serialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: i32,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    pub points: i32,
    pub correct: AnswerKey,
    #[serde(flatten)]
    pub details: QuestionDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    Matching,
    MultipleChoiceExplanation,
    MultipleSelect,
}

/// Answer-key shapes. `Set` keys are judged order- and
/// duplicate-independent; `Scalar` keys by direct value equality.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Set(Vec<String>),
    Scalar(JsonValue),
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuestionDetails {
    Matching(MatchingDetails),
    Choice(ChoiceDetails),
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchingDetails {
    pub items: Vec<MatchingItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchingItem {
    pub term: String,
    pub options: Vec<String>,
    pub correct: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceDetails {
    pub options: Vec<String>,
}
