//! tests/endpoints/home.rs
//! Ensures that GET / greets with the container message and environment.

#[path = "../common/mod.rs"]
mod common;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn home_returns_200_with_greeting_and_environment() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["message"], "Hello from Docker container!");
    // No ENVIRONMENT variable is set in the test runner, so the default applies.
    assert_eq!(json["environment"], "development");

    let timestamp: DateTime<Utc> = json["timestamp"]
        .as_str()
        .expect("timestamp should be a string")
        .parse()
        .expect("timestamp should be valid RFC3339");
    let age = Utc::now().signed_duration_since(timestamp);
    assert!(age.num_seconds().abs() < 5, "timestamp too far from now: {}", age);
}
