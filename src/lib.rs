pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod observability;
pub mod services;
pub mod startup;

use axum::{
    http::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::TranslateConfig;
use crate::services::providers::ChatProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: TranslateConfig,
    pub chat_provider: Arc<dyn ChatProvider>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::status::root,
        handlers::status::health,
        handlers::analyze::analyze,
    ),
    components(
        schemas(
            handlers::analyze::AnalyzeRequest,
            handlers::analyze::AnalyzeResponse,
            error::ErrorResponse,
        )
    ),
    info(
        title = "translate api",
        description = "A translation API that can translate customer reviews on my e-commerce site into Turkish",
        version = "1.0.0"
    ),
    tags(
        (name = "Translation", description = "Text analysis endpoints"),
        (name = "Status", description = "Identity and liveness endpoints")
    )
)]
pub struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::status::health))
        .route("/analyze", post(handlers::analyze::analyze))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");

            tracing::info_span!(
                "http_request",
                request_id = %request_id,
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
        // The upstream contract allows any origin; credentials cannot be
        // combined with a wildcard origin, so they are not advertised.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
