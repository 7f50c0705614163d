use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Serialize)]
pub struct LessonContentResponse {
    pub lesson_id: i64,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordInteractionRequest {
    #[serde(default)]
    pub selection: JsonValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordInteractionResponse {
    pub next: String,
}
