use axum::{extract::DefaultBodyLimit, routing::get, Router};
use defensive_iq_backend::{
    config::{get_config, init_config},
    middleware::cors::permissive_cors,
    middleware::rate_limit,
    routes,
    services::question_bank::QuestionBank,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let question_bank = QuestionBank::builtin();
    info!(
        "Loaded question catalog with {} questions",
        question_bank.total()
    );
    let app_state = AppState::new(question_bank);

    let app = Router::new()
        .route("/", get(routes::health::home))
        .route("/health", get(routes::health::health))
        .route(
            "/learn/:lesson_id",
            get(routes::lesson::get_lesson).post(routes::lesson::record_interaction),
        )
        .route(
            "/quiz/:question_id",
            get(routes::quiz::get_question).post(routes::quiz::submit_answer),
        )
        .route("/result", get(routes::quiz::get_result))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(config.public_rps),
            rate_limit::rps_middleware,
        ))
        .with_state(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(64 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
