//! Axum HTTP server for the browser front-end.
//!
//! All endpoints share one `Arc<RoundController>`. Operations that run the
//! embedding model are moved onto the blocking pool so they never stall the
//! async workers.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Single-page front-end |
//! | GET | `/health` | Health check |
//! | POST | `/new-game` | Start a new round |
//! | POST | `/guess` | Score a guess, return ranked history |
//! | GET | `/game-status` | Ranked history and win flag |
//! | POST | `/give-up` | Reveal the secret word |
//!
//! Every error body has the shape `{"status": "error", "message": ...}`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use crate::game::{GameError, RoundController};

pub type AppState = Arc<RoundController>;

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub fn create_router(game: Arc<RoundController>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health_check))
        .route("/new-game", post(handle_new_game))
        .route("/guess", post(handle_guess))
        .route("/game-status", get(handle_game_status))
        .route("/give-up", post(handle_give_up))
        .layer(cors)
        .with_state(game)
}

// ── Request/Response helpers ────────────────────────────────────────

#[derive(Deserialize)]
struct GuessRequest {
    #[serde(default)]
    guess: String,
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "status": "error", "message": msg })))
}

fn game_error_response(err: &GameError) -> (StatusCode, Json<Value>) {
    let status = match err {
        GameError::EmptyGuess => StatusCode::BAD_REQUEST,
        GameError::NoActiveRound => StatusCode::CONFLICT,
        GameError::Embedding(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    error_response(status, &err.to_string())
}

/// Run a model-bound game operation on the blocking pool
async fn run_blocking<T, F>(op: F) -> Result<T, (StatusCode, Json<Value>)>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, GameError> + Send + 'static,
{
    match tokio::task::spawn_blocking(op).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(game_error_response(&err)),
        Err(err) => {
            log::error!("Blocking game task failed: {err}");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
            ))
        }
    }
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn handle_health_check() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

async fn handle_game_status(State(game): State<AppState>) -> Json<Value> {
    let status = game.status();
    Json(json!({
        "status": "success",
        "guesses": status.guesses,
        "has_correct_guess": status.has_correct_guess,
        "is_game_active": status.is_game_active,
    }))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_new_game(State(game): State<AppState>) -> ApiResult {
    run_blocking(move || game.start_round()).await?;
    Ok(Json(json!({
        "status": "success",
        "message": "New game started",
    })))
}

async fn handle_guess(
    State(game): State<AppState>,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = payload.map_err(|rejection| {
        log::debug!("Rejected guess body: {rejection}");
        error_response(StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let result = run_blocking(move || game.submit_guess(&req.guess)).await?;

    let mut body = json!({
        "status": "success",
        "similarity": result.similarity,
        "is_correct": result.is_correct,
        "duplicate": result.outcome.is_duplicate(),
        "guesses": result.guesses,
    });
    if let Some(message) = result.message() {
        body["message"] = json!(message);
    }

    Ok(Json(body))
}

async fn handle_give_up(State(game): State<AppState>) -> ApiResult {
    let secret = game.give_up().map_err(|e| game_error_response(&e))?;
    Ok(Json(json!({
        "status": "success",
        "secret_word": secret,
    })))
}
