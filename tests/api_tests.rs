//! API integration tests
//!
//! These run against a live server (and its Redis) started separately.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000/api/v1";

/// Helper to create a target and return its id
async fn create_target(client: &Client, body: Value) -> String {
    let response = client
        .post(format!("{}/targets", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_str().expect("No id in response").to_string()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_target() {
    let client = Client::new();

    let id = create_target(
        &client,
        json!({
            "url": "http://example.com",
            "value": "0.50",
            "maxAcceptsPerDay": "10",
            "accept": {
                "geoState": { "$in": ["ca", "ny"] },
                "hour": { "$in": ["13", "14", "15"] }
            }
        }),
    )
    .await;

    let response = client
        .get(format!("{}/targets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["url"], "http://example.com");
    assert_eq!(body["maxAcceptsPerDay"], "10");
}

#[tokio::test]
#[ignore]
async fn test_list_targets() {
    let client = Client::new();

    let id = create_target(
        &client,
        json!({
            "url": "http://example.com",
            "value": "0.25",
            "maxAcceptsPerDay": "5",
            "accept": {
                "geoState": { "$in": ["wa"] },
                "hour": { "$in": ["9"] }
            }
        }),
    )
    .await;

    let response = client
        .get(format!("{}/targets", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let targets = body.as_array().expect("Targets should be an array");
    assert!(targets.iter().any(|t| t["id"] == id.as_str()));
}

#[tokio::test]
#[ignore]
async fn test_get_missing_target_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/targets/no-such-id", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_update_target() {
    let client = Client::new();

    let id = create_target(
        &client,
        json!({
            "url": "http://example.com",
            "value": "0.10",
            "maxAcceptsPerDay": "3",
            "accept": {
                "geoState": { "$in": ["or"] },
                "hour": { "$in": ["10"] }
            }
        }),
    )
    .await;

    let response = client
        .put(format!("{}/targets/{}", BASE_URL, id))
        .json(&json!({ "value": "0.20", "id": "must-be-ignored" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/targets/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], id.as_str());
    assert_eq!(body["value"], "0.20");
}

#[tokio::test]
#[ignore]
async fn test_update_missing_target_is_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/targets/no-such-id", BASE_URL))
        .json(&json!({ "value": "0.20" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_route_decision_round_trip() {
    let client = Client::new();

    // A target that accepts visitors from "nv" at every hour of the day
    let hours: Vec<String> = (0..24).map(|h| h.to_string()).collect();
    create_target(
        &client,
        json!({
            "url": "http://nv.example.com",
            "value": "9.99",
            "maxAcceptsPerDay": "100",
            "accept": {
                "geoState": { "$in": ["nv"] },
                "hour": { "$in": hours }
            }
        }),
    )
    .await;

    let response = client
        .post(format!("{}/route", BASE_URL))
        .json(&json!({
            "geoState": "nv",
            "timestamp": "2024-01-01T14:30:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["decision"], "accept");
    assert_eq!(body["url"], "http://nv.example.com");
}

#[tokio::test]
#[ignore]
async fn test_route_rejects_unmatched_visitor() {
    let client = Client::new();

    let response = client
        .post(format!("{}/route", BASE_URL))
        .json(&json!({
            "geoState": "zz",
            "timestamp": "2024-01-01T14:30:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["decision"], "reject");
    assert!(body.get("url").is_none());
}

#[tokio::test]
#[ignore]
async fn test_route_malformed_visitor_is_400() {
    let client = Client::new();

    let response = client
        .post(format!("{}/route", BASE_URL))
        .json(&json!({ "geoState": "ca", "timestamp": "not-a-timestamp" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_create_target_without_url_is_400() {
    let client = Client::new();

    let response = client
        .post(format!("{}/targets", BASE_URL))
        .json(&json!({ "value": "0.50" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
