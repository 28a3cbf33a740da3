use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use axum::Router;
use axum::routing::post;
use serde_json::{Value, json};

use crate::config::RelayTimeouts;
use crate::relay::GameRelay;
use crate::routes;
use crate::state::AppState;

// =============================================================================
// HELPERS
// =============================================================================

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Stand-in for the game server: echoes the column back as the AI's move.
fn fake_game_server() -> Router {
    Router::new()
        .route(
            "/move",
            post(|axum::Json(body): axum::Json<Value>| async move {
                let col = body["player_col"].as_i64().unwrap_or_default();
                if col == 6 {
                    return axum::Json(json!({ "winner": "Player", "ai_col": null }));
                }
                // Float-encoded column, as a numpy-backed server might send.
                axum::Json(json!({ "winner": null, "ai_col": (col as f64) }))
            }),
        )
        .route("/reset", post(|| async { "Game reset!" }))
}

fn static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

async fn host_for(upstream: &str, timeouts: RelayTimeouts) -> String {
    let relay = GameRelay::new(upstream, timeouts).unwrap();
    let addr = serve(routes::app(AppState::new(relay), static_dir())).await;
    format!("http://{addr}")
}

async fn host() -> String {
    let upstream = serve(fake_game_server()).await;
    host_for(&format!("http://{upstream}"), RelayTimeouts::default()).await
}

// =============================================================================
// MOVE
// =============================================================================

#[tokio::test]
async fn move_is_relayed_and_normalized() {
    let base = host().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/move"))
        .json(&json!({ "player_col": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "winner": null, "ai_col": 3 }));
}

#[tokio::test]
async fn winner_is_passed_through() {
    let base = host().await;
    let body: Value = reqwest::Client::new()
        .post(format!("{base}/move"))
        .json(&json!({ "player_col": 6 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["winner"], "Player");
    assert_eq!(body["ai_col"], Value::Null);
}

#[tokio::test]
async fn out_of_range_column_is_bad_request() {
    let base = host().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/move"))
        .json(&json!({ "player_col": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let base = host().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/move"))
        .json(&json!({ "column": "left" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn upstream_error_status_is_bad_gateway() {
    let upstream = serve(Router::new().route(
        "/move",
        post(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;
    let base = host_for(&format!("http://{upstream}"), RelayTimeouts::default()).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/move"))
        .json(&json!({ "player_col": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn slow_upstream_is_gateway_timeout() {
    let upstream = serve(Router::new().route(
        "/move",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            "late"
        }),
    ))
    .await;
    let timeouts = RelayTimeouts { request: Duration::from_millis(200), connect: Duration::from_secs(1) };
    let base = host_for(&format!("http://{upstream}"), timeouts).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/move"))
        .json(&json!({ "player_col": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Bind then drop to get a port nothing listens on.
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
    let base = host_for(&format!("http://{closed}"), RelayTimeouts::default()).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/move"))
        .json(&json!({ "player_col": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
}

// =============================================================================
// RESET / STATIC
// =============================================================================

#[tokio::test]
async fn reset_returns_no_content() {
    let base = host().await;
    let resp = reqwest::Client::new().post(format!("{base}/reset")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = host().await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn index_page_is_served() {
    let base = host().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.unwrap().contains(r#"id="connect4""#));
}
