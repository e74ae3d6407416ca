use std::net::SocketAddr;

use serde_json::json;

use super::*;
use crate::client::{BuildApi, ChatSession, HttpApi, SessionState};
use crate::state::test_helpers;
use crate::types::{ChatResponse, ErrorBody, HealthResponse};

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_app() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let app = app(test_helpers::test_app_state());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn chat_route_returns_build() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/chat"))
        .json(&json!({ "prompt": "heavy armor battle mage", "game": "oblivion" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: ChatResponse = resp.json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.build.name, "Battle Mage");
}

#[tokio::test]
async fn build_alias_shares_contract() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/build"))
        .json(&json!({ "prompt": "archer" }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["build"]["keyItem"], "Enchanted Bow of Lightning");
}

#[tokio::test]
async fn chat_route_rejects_bad_bodies_with_400() {
    let base = spawn_app().await;
    let http = reqwest::Client::new();

    for payload in [json!({}), json!({ "prompt": "" }), json!({ "prompt": 5 })] {
        let resp = http.post(format!("{base}/api/chat")).json(&payload).send().await.unwrap();
        assert_eq!(resp.status(), 400, "payload: {payload}");
        let body: ErrorBody = resp.json().await.unwrap();
        assert_eq!(body.error, "Invalid prompt provided");
    }

    let resp = http
        .post(format!("{base}/api/chat"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn search_route_rejects_missing_query() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/search"))
        .json(&json!({ "category": "spells" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn health_routes_answer_ok() {
    let base = spawn_app().await;
    for path in ["/api/health", "/health"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body: HealthResponse = resp.json().await.unwrap();
        assert_eq!(body.status, "ok");
    }
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .get(format!("{base}/api/health"))
        .header("origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
}

#[tokio::test]
async fn chat_session_round_trip_against_live_router() {
    let base = spawn_app().await;
    let session = ChatSession::new(HttpApi::new(&base).unwrap());
    assert!(session.health().await);

    let reply = session.send("a holy paladin").await.unwrap();
    assert_eq!(reply.build().map(|b| b.id.as_str()), Some("1"));

    let reply = session.send("find me a bow").await.unwrap();
    assert!(reply.content.starts_with("Found "));

    assert_eq!(session.messages().len(), 4);
    assert_eq!(session.state(), SessionState::Idle);
}

#[tokio::test]
async fn chat_session_falls_back_when_server_is_down() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpApi::new(&format!("http://{addr}")).unwrap();
    assert!(!api.health().await);
    let session = ChatSession::new(api);
    let reply = session.send("sneaky").await.unwrap();
    assert_eq!(reply.content, crate::client::session::FALLBACK_REPLY);
}

#[tokio::test]
async fn search_route_accepts_loose_limit_and_category() {
    let base = spawn_app().await;
    let http = reqwest::Client::new();
    for payload in [
        json!({ "query": "bow", "limit": 2.0 }),
        json!({ "query": "bow", "limit": "3" }),
        json!({ "query": "bow", "category": 5 }),
    ] {
        let resp = http.post(format!("{base}/search")).json(&payload).send().await.unwrap();
        assert_eq!(resp.status(), 200, "payload: {payload}");
    }
}

#[tokio::test]
async fn panicking_handler_becomes_500() {
    async fn boom() -> &'static str {
        panic!("handler blew up");
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = with_layers(Router::new().route("/boom", get(boom)));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let resp = reqwest::get(format!("http://{addr}/boom")).await.unwrap();
    assert_eq!(resp.status(), 500);
    let body: ErrorBody = resp.json().await.unwrap();
    assert_eq!(body.error, "Internal server error");
}
