use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::dto::lesson_dto::{
    LessonContentResponse, RecordInteractionRequest, RecordInteractionResponse,
};
use crate::error::Result;
use crate::services::progression::Progression;
use crate::AppState;

/// Lesson content exists for any id; unknown lessons are never a 404.
#[axum::debug_handler]
pub async fn get_lesson(Path(lesson_id): Path<i64>) -> Result<Response> {
    let response = LessonContentResponse {
        lesson_id,
        content: format!("Content for lesson {}", lesson_id),
    };
    Ok(Json(response).into_response())
}

#[axum::debug_handler]
pub async fn record_interaction(
    State(state): State<AppState>,
    Path(lesson_id): Path<i64>,
    body: Option<Json<RecordInteractionRequest>>,
) -> Result<Response> {
    let selection = body
        .map(|Json(req)| req.selection)
        .unwrap_or(JsonValue::Null);
    state.lesson_log.record(lesson_id, selection);
    tracing::info!(lesson_id, "Recorded lesson interaction");

    let next = Progression::next_lesson(lesson_id);
    Ok(Json(RecordInteractionResponse { next: next.path() }).into_response())
}
