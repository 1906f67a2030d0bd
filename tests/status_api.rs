//! tests/status_api.rs
//! Operational endpoints answer with the standard envelope.

#[path = "mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn status_reports_snakes_and_environment() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/status", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["code"], 200);
    assert_eq!(json["data"]["environment"], "development");
    assert_eq!(json["data"]["snakes"], json!(["random", "smart", "genius"]));
    assert!(json["data"]["uptime_seconds"].as_i64().unwrap() >= 0);
    assert_eq!(json["messages"], json!(["Snake server is running"]));
}

#[tokio::test]
async fn health_is_healthy() {
    let base_url: String = common::spawn_app();

    let json: Value = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();

    assert_eq!(json["data"], json!({ "status": "healthy" }));
}
