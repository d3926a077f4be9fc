mod common;

use common::TestApp;
use items_service::config::ItemsConfig;
use items_service::startup::Application;
use mongodb::bson::doc;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn empty_collection_returns_empty_array() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/items", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type")
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let body: Vec<serde_json::Value> = response.json().await.expect("Failed to parse JSON");
    assert!(body.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn items_returns_collection_contents() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Explicit string ids keep the round-tripped JSON predictable
    app.db
        .items()
        .insert_many(
            vec![
                doc! { "_id": "a", "name": "alpha" },
                doc! { "_id": "b", "name": "beta", "count": 2 },
                doc! { "_id": "c" },
            ],
            None,
        )
        .await
        .expect("Failed to seed items collection");

    let response = client
        .get(format!("{}/items", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: Vec<serde_json::Value> = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.len(), 3);

    // No ordering guarantee is defined, so compare order-insensitively
    for expected in [
        json!({ "_id": "a", "name": "alpha" }),
        json!({ "_id": "b", "name": "beta", "count": 2 }),
        json!({ "_id": "c" }),
    ] {
        assert!(
            body.contains(&expected),
            "missing {} in {:?}",
            expected,
            body
        );
    }

    app.cleanup().await;
}

#[tokio::test]
async fn items_are_returned_verbatim_without_imposed_schema() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Two documents with nothing in common: items are opaque
    app.db
        .items()
        .insert_many(
            vec![
                doc! { "_id": "n1", "nested": { "deep": [1, 2, 3] } },
                doc! { "_id": "n2", "entirely": "different", "shape": true },
            ],
            None,
        )
        .await
        .expect("Failed to seed items collection");

    let response = client
        .get(format!("{}/items", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let body: Vec<serde_json::Value> = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body.len(), 2);
    assert!(body.contains(&json!({ "_id": "n1", "nested": { "deep": [1, 2, 3] } })));
    assert!(body.contains(&json!({ "_id": "n2", "entirely": "different", "shape": true })));

    app.cleanup().await;
}

/// A store that fails mid-flight must surface as an explicit 503 with the
/// shared JSON error body, never as a dropped request or a fabricated 200.
/// Shutting the driver down makes every subsequent query fail, which is the
/// closest in-process stand-in for the store going away under a live server.
#[tokio::test]
async fn items_returns_503_json_error_when_store_fails_mid_flight() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    // Drop the test database first; the handle is unusable afterwards
    app.cleanup().await;
    app.db.client().clone().shutdown().await;

    let response = client
        .get(format!("{}/items", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 503);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Service unavailable");
    assert!(body["details"].is_string());
}

/// An unreachable store must never produce a 200 with fabricated data. With
/// the connect-before-listen sequence, startup itself fails: there is no
/// window in which the service accepts requests it cannot answer.
#[tokio::test]
async fn startup_fails_when_store_is_unreachable() {
    let mut config = ItemsConfig::load().expect("Failed to load configuration");
    config.port = 0;
    // Nothing listens here; short timeouts keep the test fast
    config.mongodb.uri =
        "mongodb://127.0.0.1:59999/?serverSelectionTimeoutMS=1000&connectTimeoutMS=1000"
            .to_string();
    config.mongodb.database = "items_test_unreachable".to_string();

    let result = Application::build(config).await;
    assert!(result.is_err());
}
