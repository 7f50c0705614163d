use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use defensive_iq_backend::{routes, services::question_bank::QuestionBank, AppState};

fn setup_app() -> Router {
    let state = AppState::new(QuestionBank::builtin());
    Router::new()
        .route(
            "/quiz/:question_id",
            get(routes::quiz::get_question).post(routes::quiz::submit_answer),
        )
        .route("/result", get(routes::quiz::get_result))
        .with_state(state)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

async fn post_json(app: &Router, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

#[tokio::test]
async fn quiz_flow_end_to_end() {
    let app = setup_app();

    let (status, body) = get_json(&app, "/quiz/0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "matching");
    assert_eq!(body["id"], 0);
    assert!(body["items"].is_array());

    let (status, body) = post_json(&app, "/quiz/1", json!({ "answer": "Zone" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next"], "/quiz/2");

    let (status, body) = post_json(
        &app,
        "/quiz/3",
        json!({ "answer": ["High pressure on ball-handler", "Builds individual accountability"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next"], "/quiz/4");

    // Wrong answers advance too; the last question points at the results.
    let (status, body) = post_json(&app, "/quiz/4", json!({ "answer": ["Lockdown players"] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next"], "/result");

    let (status, body) = get_json(&app, "/result").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": 2, "total": 3 }));
}

#[tokio::test]
async fn unknown_question_is_not_found_on_get_but_recorded_on_post() {
    let app = setup_app();

    let (status, body) = get_json(&app, "/quiz/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Question not found");

    let (status, body) = post_json(&app, "/quiz/99", json!({ "answer": "Zone" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next"], "/result");

    let (_, body) = get_json(&app, "/result").await;
    assert_eq!(body, json!({ "score": 0, "total": 1 }));
}

#[tokio::test]
async fn submission_body_is_optional() {
    let app = setup_app();

    let req = Request::builder()
        .method("POST")
        .uri("/quiz/1")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["next"], "/quiz/2");

    let (status, body) = post_json(&app, "/quiz/1", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next"], "/quiz/2");

    // Both count as incorrect submissions.
    let (_, body) = get_json(&app, "/result").await;
    assert_eq!(body, json!({ "score": 0, "total": 2 }));
}

#[tokio::test]
async fn matching_answers_compare_in_item_order() {
    let app = setup_app();

    let (status, body) = post_json(
        &app,
        "/quiz/0",
        json!({ "answer": ["One-on-one", "Zone", "Box and 1"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next"], "/quiz/1");

    let (_, _) = post_json(
        &app,
        "/quiz/0",
        json!({ "answer": ["Box and 1", "Zone", "One-on-one"] }),
    )
    .await;

    let (_, body) = get_json(&app, "/result").await;
    assert_eq!(body, json!({ "score": 1, "total": 2 }));
}
