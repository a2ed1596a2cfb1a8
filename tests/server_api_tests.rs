mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{assert_approx, fixture_db};
use mhrb::server::create_router;
use tower::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(fixture_db()))
}

async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let payload = serde_json::from_slice(&bytes).expect("response should be valid json");
    (status, payload)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn health_endpoint_returns_ok_json() {
    let (status, payload) = send(get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["service"], "mhrb-api");
    assert_eq!(payload["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn weapons_endpoint_filters_by_category() {
    let (status, payload) = send(get("/api/weapons?category=bow")).await;
    assert_eq!(status, StatusCode::OK);
    let weapons = payload["weapons"].as_array().expect("weapons array");
    assert_eq!(payload["count"], weapons.len());
    assert_eq!(weapons.len(), 3);
    assert!(weapons.iter().all(|weapon| weapon["category"] == "bow"));

    let (_, everything) = send(get("/api/weapons")).await;
    assert!(everything["count"].as_u64().unwrap_or(0) > 3);
}

#[tokio::test]
async fn weapons_endpoint_rejects_unknown_category() {
    let (status, payload) = send(get("/api/weapons?category=sword")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["status"], "error");
    assert!(payload["message"].as_str().unwrap_or_default().contains("sword"));
}

#[tokio::test]
async fn calc_state_spec_lists_both_groups() {
    let (status, payload) = send(get("/api/calc-state/spec")).await;
    assert_eq!(status, StatusCode::OK);
    let text = payload.to_string();
    assert!(text.contains("skill_conditions"));
    assert!(text.contains("misc_buffs"));
    assert!(text.contains("powercharm"));
}

#[tokio::test]
async fn calculate_endpoint_returns_performance() {
    let body = r#"{
        "build": {"category": "greatsword", "weapon_id": "white_greatsword"},
        "calc_state": {}
    }"#;
    let (status, payload) = send(post_json("/api/calculate", body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_approx(payload["effective_raw"].as_f64().expect("number"), 184.8);
    assert_eq!(payload["weapon_id"], "white_greatsword");
    assert_eq!(payload["mechanics"]["kind"], "plain");
}

#[tokio::test]
async fn calculate_endpoint_applies_skills_and_picks() {
    let body = r#"{
        "build": {
            "category": "hammer",
            "weapon_id": "ramp_hammer",
            "rampage_picks": ["attack_boost_1", null]
        },
        "calc_state": {"skills": {"handicraft": 5}}
    }"#;
    let (status, payload) = send(post_json("/api/calculate", body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["weapon_attack"], 104);
}

#[tokio::test]
async fn calculate_endpoint_rejects_invalid_builds() {
    let unknown = r#"{"build": {"category": "lance", "weapon_id": "nope"}}"#;
    let (status, payload) = send(post_json("/api/calculate", unknown)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["status"], "error");
    assert!(payload["message"].as_str().unwrap_or_default().contains("nope"));

    let bad_state = r#"{
        "build": {"category": "greatsword", "weapon_id": "white_greatsword"},
        "calc_state": {"states": {"misc_buffs": {"powercharm": 9}}}
    }"#;
    let (status, _) = send(post_json("/api/calculate", bad_state)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calculate_endpoint_rejects_malformed_json() {
    let (status, payload) = send(post_json("/api/calculate", "{ not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["status"], "error");
}
