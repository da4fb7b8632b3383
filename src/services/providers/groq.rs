//! Groq provider implementation.
//!
//! Implements chat completion against Groq's OpenAI-compatible API.

use super::{ChatCompletion, ChatMessage, ChatProvider, GenerationParams, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Groq API base URL.
const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Groq provider configuration.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub model: String,
}

/// Groq chat-completion provider.
pub struct GroqChatProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqChatProvider {
    pub fn new(config: GroqConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", GROQ_API_BASE, path)
    }
}

#[async_trait]
impl ChatProvider for GroqChatProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> Result<ChatCompletion, ProviderError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str().to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        tracing::debug!(
            model = %self.config.model,
            message_count = messages.len(),
            "Sending request to Groq API"
        );

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthFailed(format!(
                    "Groq API error {}: {}",
                    status, error_text
                )));
            }

            return Err(ProviderError::ApiError(format!(
                "Groq API error {}: {}",
                status, error_text
            )));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e)))?;

        extract_completion(api_response)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Groq API key not configured".to_string(),
            ));
        }

        // List models to verify the API key works
        let response = self
            .client
            .get(self.api_url("models"))
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

/// Extract the first choice's content and usage from an API response.
fn extract_completion(response: ChatCompletionResponse) -> Result<ChatCompletion, ProviderError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content)
        .ok_or_else(|| ProviderError::ApiError("Response contained no choices".to_string()))?;

    let usage = response.usage.unwrap_or_default();

    Ok(ChatCompletion {
        content,
        input_tokens: usage.prompt_tokens.unwrap_or(0),
        output_tokens: usage.completion_tokens.unwrap_or(0),
    })
}

// ============================================================================
// Groq API Request/Response Types (OpenAI-compatible)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: WireMessage,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Usage {
    prompt_tokens: Option<i32>,
    completion_tokens: Option<i32>,
    #[allow(dead_code)]
    total_tokens: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_completion_response() {
        let raw = serde_json::json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": "Harika ürün, hızlı kargo!"},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 32, "completion_tokens": 12, "total_tokens": 44}
        });

        let response: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        let completion = extract_completion(response).unwrap();

        assert_eq!(completion.content, "Harika ürün, hızlı kargo!");
        assert_eq!(completion.input_tokens, 32);
        assert_eq!(completion.output_tokens, 12);
    }

    #[test]
    fn empty_choices_is_an_api_error() {
        let raw = serde_json::json!({"choices": []});
        let response: ChatCompletionResponse = serde_json::from_value(raw).unwrap();

        let err = extract_completion(response).unwrap_err();
        assert!(matches!(err, ProviderError::ApiError(_)));
    }

    #[test]
    fn missing_usage_defaults_to_zero_tokens() {
        let raw = serde_json::json!({
            "choices": [{
                "message": {"role": "assistant", "content": "Kısa cevap."}
            }]
        });

        let response: ChatCompletionResponse = serde_json::from_value(raw).unwrap();
        let completion = extract_completion(response).unwrap();

        assert_eq!(completion.input_tokens, 0);
        assert_eq!(completion.output_tokens, 0);
    }
}
