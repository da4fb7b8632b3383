//! Integration tests for the analyze endpoint, backed by the mock provider.
//!
//! Run with: cargo test --test analyze

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use translate_api::config::TranslateConfig;
use translate_api::services::providers::mock::MockChatProvider;
use translate_api::startup::Application;

/// Spawn the application with a mock provider the test can inspect.
async fn spawn_app() -> (u16, Arc<MockChatProvider>) {
    std::env::set_var("PORT", "0");
    std::env::set_var("GROQ_ENABLED", "false");

    let config = TranslateConfig::load().expect("Failed to load config");
    let provider = Arc::new(MockChatProvider::new(true));
    let app = Application::build_with_provider(config, provider.clone())
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    (port, provider)
}

#[tokio::test]
async fn analyze_returns_result_with_fixed_confidence() {
    let (port, provider) = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/analyze", port))
        .json(&serde_json::json!({"text": "Great product, fast shipping!"}))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["result"],
        "Mock response for: Metni analiz et: Great product, fast shipping!"
    );
    assert_eq!(body["confidence"], 0.95);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn analyze_rejects_missing_text_without_calling_upstream() {
    let (port, provider) = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/analyze", port))
        .json(&serde_json::json!({}))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 422);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["detail"].as_str().is_some_and(|d| !d.is_empty()));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn analyze_rejects_non_string_text_without_calling_upstream() {
    let (port, provider) = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/analyze", port))
        .json(&serde_json::json!({"text": 42}))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 422);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn analyze_passes_caller_text_through_verbatim() {
    let (port, _provider) = spawn_app().await;
    let client = Client::new();

    // Embedded quotes and non-ASCII text must survive untouched.
    let text = "Ürün \"harika\" — çok memnunum!";
    let response = client
        .post(format!("http://localhost:{}/analyze", port))
        .json(&serde_json::json!({"text": text}))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let result = body["result"].as_str().unwrap();
    assert!(result.contains(text));
}
