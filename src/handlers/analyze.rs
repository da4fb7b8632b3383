//! Analyze handler: forwards caller text to the completion provider and
//! wraps the model's answer in the response envelope.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorResponse};
use crate::extract::JsonBody;
use crate::services::providers::{ChatMessage, GenerationParams};
use crate::AppState;

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Request carrying the text to analyze.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    #[schema(example = "Great product, fast shipping!")]
    pub text: String,
}

/// Response carrying the model's answer.
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    #[schema(example = "Harika ürün, hızlı kargo!")]
    pub result: String,
    #[schema(example = 0.95)]
    pub confidence: f64,
}

// ============================================================================
// Fixed model parameters
// ============================================================================

const SYSTEM_PROMPT: &str = "Sen bir translation uzmanısın. Kısa ve net cevap ver.";
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: i32 = 500;

/// Hardcoded confidence reported with every answer. Not derived from any
/// signal; kept as a literal for parity with the service contract.
const CONFIDENCE: f64 = 0.95;

// ============================================================================
// Handler
// ============================================================================

/// Translate/analyze the submitted text
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis result", body = AnalyzeResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Upstream call failed", body = ErrorResponse),
        (status = 502, description = "Upstream authentication failed", body = ErrorResponse),
        (status = 503, description = "Upstream rate limited", body = ErrorResponse)
    ),
    tag = "Translation"
)]
#[tracing::instrument(skip(state, req), fields(text_len = req.text.len()))]
pub async fn analyze(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AnalyzeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let messages = [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!("Metni analiz et: {}", req.text)),
    ];

    let params = GenerationParams {
        temperature: Some(TEMPERATURE),
        max_tokens: Some(MAX_TOKENS),
    };

    let completion = state
        .chat_provider
        .complete(&messages, &params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Completion call failed");
            AppError::from(e)
        })?;

    tracing::info!(
        input_tokens = completion.input_tokens,
        output_tokens = completion.output_tokens,
        "Completion call succeeded"
    );

    Ok((
        StatusCode::OK,
        Json(AnalyzeResponse {
            result: completion.content,
            confidence: CONFIDENCE,
        }),
    ))
}
