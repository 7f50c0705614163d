use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
    });
    (StatusCode::OK, Json(body))
}

#[axum::debug_handler]
pub async fn home() -> impl IntoResponse {
    let body = json!({
        "message": "Welcome to Defensive IQ",
        "start": "/learn/1",
    });
    (StatusCode::OK, Json(body))
}
