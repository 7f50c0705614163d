use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// One quiz submission. Created once at submission time and never mutated
/// afterwards; only read in aggregate for the final score.
#[derive(Debug, Clone, Serialize)]
pub struct SubmittedAnswer {
    pub id: Uuid,
    pub question_id: i32,
    pub answer: JsonValue,
    pub is_correct: bool,
    pub submitted_at: DateTime<Utc>,
}
