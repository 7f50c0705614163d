use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Absent field defaults to `null`, which evaluates as incorrect.
    #[serde(default)]
    pub answer: JsonValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitAnswerResponse {
    pub next: String,
}
