mod common;

use axum::http::StatusCode;
use common::{router, send_json, MemoryStore};
use std::sync::Arc;

#[tokio::test]
async fn lists_every_project() {
    let app = router(Arc::new(MemoryStore::with_projects(&["alpha", "beta", "gamma"])));
    let (status, json) = send_json(&app, "GET", "/projects").await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["alpha", "beta", "gamma"]);
}

#[tokio::test]
async fn empty_table_is_empty_array() {
    let app = router(Arc::new(MemoryStore::default()));
    let (status, json) = send_json(&app, "GET", "/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn health_ready_and_fallback() {
    let app = router(Arc::new(MemoryStore::default()));
    let (status, json) = send_json(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let (status, json) = send_json(&app, "GET", "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["database"], "ok");

    let (status, json) = send_json(&app, "GET", "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "resource-api");

    let (status, json) = send_json(&app, "GET", "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn ready_is_503_when_store_is_down() {
    let app = router(Arc::new(MemoryStore {
        offline: true,
        ..MemoryStore::default()
    }));
    let (status, json) = send_json(&app, "GET", "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "degraded");
}
