//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt), no TCP binding needed.
//! The hash embedder and a fixed selector make every score deterministic.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use semantic_hunter::embedding::{Embedding, EmbeddingError, EmbeddingProvider, HashEmbedder};
use semantic_hunter::game::{RoundController, WIN_MESSAGE};
use semantic_hunter::server::create_router;
use semantic_hunter::wordlists::{FixedSelector, WordPool};

/// Controller whose secret is always "苹果"; no round started yet.
fn game() -> Arc<RoundController> {
    let pool = WordPool::from_words(["苹果", "香蕉"]).unwrap();
    Arc::new(RoundController::new(
        pool,
        Arc::new(HashEmbedder::default()),
        Box::new(FixedSelector(0)),
    ))
}

/// Hash embedder that fails with a backend error once switched off.
struct SwitchableProvider {
    inner: HashEmbedder,
    offline: AtomicBool,
}

impl EmbeddingProvider for SwitchableProvider {
    fn encode(&self, text: &str) -> Result<Embedding, EmbeddingError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(EmbeddingError::Backend("onnx runtime crashed".to_string()));
        }
        self.inner.encode(text)
    }

    fn name(&self) -> &str {
        "switchable"
    }
}

fn switchable_game() -> (Arc<SwitchableProvider>, Arc<RoundController>) {
    let provider = Arc::new(SwitchableProvider {
        inner: HashEmbedder::default(),
        offline: AtomicBool::new(false),
    });
    let pool = WordPool::from_words(["苹果", "香蕉"]).unwrap();
    let game = Arc::new(RoundController::new(
        pool,
        provider.clone(),
        Box::new(FixedSelector(0)),
    ));
    (provider, game)
}

fn assert_unavailable(status: StatusCode, json: &serde_json::Value) {
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "error");
    let message = json["message"].as_str().unwrap();
    assert!(!message.is_empty());
    assert!(!message.contains("onnx"));
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    game: &Arc<RoundController>,
    req: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let resp = create_router(game.clone()).oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp.into_body()).await)
}

fn post_empty(path: &str) -> Request<Body> {
    Request::post(path).body(Body::empty()).unwrap()
}

fn post_guess(guess: &str) -> Request<Body> {
    Request::post("/guess")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::json!({ "guess": guess }).to_string()))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

// ── GET / and /health ────────────────────────────────────────────────

#[tokio::test]
async fn index_serves_html() {
    let resp = create_router(game()).oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<html"));
    assert!(html.contains("/game-status"));
}

#[tokio::test]
async fn health_returns_200() {
    let (status, json) = send(&game(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
}

// ── POST /new-game ───────────────────────────────────────────────────

#[tokio::test]
async fn new_game_succeeds() {
    let game = game();
    let (status, json) = send(&game, post_empty("/new-game")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert!(json["message"].is_string());
    assert!(game.status().is_game_active);
}

#[tokio::test]
async fn new_game_with_failing_model_keeps_round() {
    let (provider, game) = switchable_game();
    send(&game, post_empty("/new-game")).await;
    send(&game, post_guess("香蕉")).await;
    let (_, before) = send(&game, get("/game-status")).await;

    provider.offline.store(true, Ordering::SeqCst);
    let (status, json) = send(&game, post_empty("/new-game")).await;

    assert_unavailable(status, &json);
    let (_, after) = send(&game, get("/game-status")).await;
    assert_eq!(after, before);
}

// ── POST /guess ──────────────────────────────────────────────────────

#[tokio::test]
async fn guess_without_round_is_conflict() {
    let (status, json) = send(&game(), post_guess("苹果")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["status"], "error");
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn correct_guess_wins() {
    let game = game();
    send(&game, post_empty("/new-game")).await;

    let (status, json) = send(&game, post_guess("苹果")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["is_correct"], true);
    assert_eq!(json["similarity"], 100.0);
    assert_eq!(json["duplicate"], false);
    assert_eq!(json["message"], WIN_MESSAGE);
    assert_eq!(json["guesses"][0]["word"], "苹果");
}

#[tokio::test]
async fn wrong_guess_has_no_message() {
    let game = game();
    send(&game, post_empty("/new-game")).await;

    let (status, json) = send(&game, post_guess("香蕉")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_correct"], false);
    assert!(json["similarity"].as_f64().unwrap() < 100.0);
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn guesses_are_ranked() {
    let game = game();
    send(&game, post_empty("/new-game")).await;
    send(&game, post_guess("香蕉")).await;

    let (_, json) = send(&game, post_guess("苹果")).await;
    let guesses = json["guesses"].as_array().unwrap();

    assert_eq!(guesses.len(), 2);
    assert_eq!(guesses[0]["word"], "苹果");
    assert_eq!(guesses[1]["word"], "香蕉");
    assert!(guesses[0].get("is_latest").is_none());
}

#[tokio::test]
async fn empty_guess_is_validation_error() {
    let game = game();
    send(&game, post_empty("/new-game")).await;
    send(&game, post_guess("香蕉")).await;

    let (status, json) = send(&game, post_guess("   ")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(game.status().guesses.len(), 1);
}

#[tokio::test]
async fn missing_guess_field_is_validation_error() {
    let game = game();
    send(&game, post_empty("/new-game")).await;

    let req = Request::post("/guess")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, json) = send(&game, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn malformed_body_is_rejected_as_json() {
    let game = game();
    send(&game, post_empty("/new-game")).await;

    let req = Request::post("/guess")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let (status, json) = send(&game, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn repeat_guess_is_flagged_duplicate() {
    let game = game();
    send(&game, post_empty("/new-game")).await;
    let (_, first) = send(&game, post_guess("香蕉")).await;

    let (status, second) = send(&game, post_guess(" 香蕉 ")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["duplicate"], true);
    assert_eq!(second["similarity"], first["similarity"]);
    assert_eq!(second["guesses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn guess_with_failing_model_is_unavailable() {
    let (provider, game) = switchable_game();
    send(&game, post_empty("/new-game")).await;
    send(&game, post_guess("香蕉")).await;
    let (_, before) = send(&game, get("/game-status")).await;

    provider.offline.store(true, Ordering::SeqCst);
    let (status, json) = send(&game, post_guess("苹果")).await;

    assert_unavailable(status, &json);
    let (_, after) = send(&game, get("/game-status")).await;
    assert_eq!(after, before);
}

// ── GET /game-status ─────────────────────────────────────────────────

#[tokio::test]
async fn status_before_round() {
    let (status, json) = send(&game(), get("/game-status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["is_game_active"], false);
    assert_eq!(json["has_correct_guess"], false);
    assert_eq!(json["guesses"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn status_reports_win_without_secret() {
    let game = game();
    send(&game, post_empty("/new-game")).await;
    send(&game, post_guess("香蕉")).await;

    let (_, before) = send(&game, get("/game-status")).await;
    assert_eq!(before["has_correct_guess"], false);
    assert_eq!(before["is_game_active"], true);
    assert!(before.get("secret_word").is_none());
    assert!(!before.to_string().contains("苹果"));

    send(&game, post_guess("苹果")).await;
    let (_, after) = send(&game, get("/game-status")).await;
    assert_eq!(after["has_correct_guess"], true);
    assert_eq!(after["is_game_active"], true);
    assert_eq!(after["guesses"][0]["word"], "苹果");
}

// ── POST /give-up ────────────────────────────────────────────────────

#[tokio::test]
async fn give_up_reveals_secret_and_keeps_round() {
    let game = game();
    send(&game, post_empty("/new-game")).await;
    send(&game, post_guess("香蕉")).await;

    let (status, json) = send(&game, post_empty("/give-up")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
    assert_eq!(json["secret_word"], "苹果");

    let (_, status_json) = send(&game, get("/game-status")).await;
    assert_eq!(status_json["guesses"].as_array().unwrap().len(), 1);
    assert_eq!(status_json["is_game_active"], true);
}

#[tokio::test]
async fn give_up_without_round_is_conflict() {
    let (status, json) = send(&game(), post_empty("/give-up")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn new_game_clears_history() {
    let game = game();
    send(&game, post_empty("/new-game")).await;
    send(&game, post_guess("苹果")).await;

    send(&game, post_empty("/new-game")).await;
    let (_, json) = send(&game, get("/game-status")).await;

    assert_eq!(json["guesses"].as_array().unwrap().len(), 0);
    assert_eq!(json["has_correct_guess"], false);
}
