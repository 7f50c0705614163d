use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceExt;

use defensive_iq_backend::{middleware::rate_limit, routes, services::question_bank::QuestionBank, AppState};

#[tokio::test]
async fn requests_over_budget_get_429() {
    let state = AppState::new(QuestionBank::builtin());
    let app = Router::new()
        .route("/health", get(routes::health::health))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(2),
            rate_limit::rps_middleware,
        ))
        .with_state(state);

    for _ in 0..2 {
        let req = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
}
