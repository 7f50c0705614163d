use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value as JsonValue;

use crate::dto::quiz_dto::{SubmitAnswerRequest, SubmitAnswerResponse};
use crate::error::{Error, Result};
use crate::services::evaluator::Evaluator;
use crate::services::progression::Progression;
use crate::AppState;

#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
) -> Result<Response> {
    let question = state
        .question_bank
        .get(question_id)
        .ok_or_else(|| Error::NotFound("Question not found".to_string()))?;
    Ok(Json(question.clone()).into_response())
}

#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(question_id): Path<i32>,
    body: Option<Json<SubmitAnswerRequest>>,
) -> Result<Response> {
    // Missing or malformed bodies count as an empty submission.
    let answer: JsonValue = body.map(|Json(req)| req.answer).unwrap_or(JsonValue::Null);

    // Unknown ids are recorded as incorrect rather than rejected.
    let is_correct = state
        .question_bank
        .get(question_id)
        .map(|q| Evaluator::evaluate(q, &answer))
        .unwrap_or(false);

    state.submission_log.record(question_id, answer, is_correct);
    tracing::info!(question_id, is_correct, "Recorded quiz submission");

    let next = Progression::next_question(question_id, state.question_bank.total());
    Ok(Json(SubmitAnswerResponse { next: next.path() }).into_response())
}

#[axum::debug_handler]
pub async fn get_result(State(state): State<AppState>) -> Result<Response> {
    let summary = state.submission_log.score();
    Ok(Json(summary).into_response())
}
