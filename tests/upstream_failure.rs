//! Integration test for the upstream-failure path.
//!
//! Kept in its own binary so its provider wiring cannot interfere with the
//! happy-path suite.

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use translate_api::config::TranslateConfig;
use translate_api::services::providers::mock::MockChatProvider;
use translate_api::startup::Application;

#[tokio::test]
async fn upstream_failure_returns_500_with_detail() {
    std::env::set_var("PORT", "0");
    std::env::set_var("GROQ_ENABLED", "false");

    let config = TranslateConfig::load().expect("Failed to load config");
    // Disabled mock: every completion call fails like an unreachable upstream.
    let provider = Arc::new(MockChatProvider::new(false));
    let app = Application::build_with_provider(config, provider.clone())
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = Client::new();
    let response = client
        .post(format!("http://localhost:{}/analyze", port))
        .json(&serde_json::json!({"text": "Great product, fast shipping!"}))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let detail = body["detail"].as_str().expect("detail must be a string");
    assert!(!detail.is_empty());

    // Exactly one upstream attempt: no retry.
    assert_eq!(provider.call_count(), 1);
}
