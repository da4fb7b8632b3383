//! Mock provider implementation for testing.

use super::{ChatCompletion, ChatMessage, ChatProvider, GenerationParams, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock chat provider for testing.
///
/// Counts calls so tests can assert whether an outbound call was made.
pub struct MockChatProvider {
    enabled: bool,
    calls: AtomicUsize,
}

impl MockChatProvider {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of completion calls issued against this provider.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: &GenerationParams,
    ) -> Result<ChatCompletion, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.enabled {
            return Err(ProviderError::NetworkError(
                "Mock chat provider not enabled".to_string(),
            ));
        }

        let prompt = messages
            .last()
            .map(|m| m.content.as_str())
            .unwrap_or_default();

        // Simulate some processing
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Ok(ChatCompletion {
            content: format!("Mock response for: {}", prompt),
            input_tokens: prompt.len() as i32 / 4,
            output_tokens: 10,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock chat provider not enabled".to_string(),
            ))
        }
    }
}
