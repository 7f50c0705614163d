use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// One lesson-page interaction. Pure logging, no correctness evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct LessonActivity {
    pub id: Uuid,
    pub lesson_id: i64,
    pub selection: JsonValue,
    pub recorded_at: DateTime<Utc>,
}
