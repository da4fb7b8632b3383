//! Application startup and lifecycle management.

use crate::config::TranslateConfig;
use crate::error::AppError;
use crate::services::providers::groq::{GroqChatProvider, GroqConfig};
use crate::services::providers::mock::MockChatProvider;
use crate::services::providers::ChatProvider;
use crate::{build_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: TranslateConfig) -> Result<Self, AppError> {
        let chat_provider: Arc<dyn ChatProvider> = if config.groq.enabled {
            if config.groq.api_key.is_empty() {
                tracing::warn!("GROQ_API_KEY is empty; upstream calls will fail");
            }
            tracing::info!(model = %config.groq.model, "Initialized Groq chat provider");
            Arc::new(GroqChatProvider::new(GroqConfig {
                api_key: config.groq.api_key.clone(),
                model: config.groq.model.clone(),
            }))
        } else {
            tracing::info!("Groq provider disabled, using mock chat provider");
            Arc::new(MockChatProvider::new(true))
        };

        Self::build_with_provider(config, chat_provider).await
    }

    /// Build the application with an explicit provider (used by tests).
    pub async fn build_with_provider(
        config: TranslateConfig,
        chat_provider: Arc<dyn ChatProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            chat_provider,
        };

        // Bind the listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;
        let port = listener
            .local_addr()
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?
            .port();

        tracing::info!("Translate API listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
