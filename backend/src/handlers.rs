use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};

use crate::{
    models::{AnalyzeRequest, ErrorResponse},
    state::AppState,
};

pub const API_KEY_NOT_CONFIGURED: &str = "API key not configured";
pub const MISSING_PARAMETERS: &str = "Missing required parameters";
pub const UPSTREAM_FAILED: &str = "Upstream request failed";

/// Forward a chat-completion request upstream and relay the answer verbatim.
///
/// Only two conditions are detected locally: a missing credential (500) and
/// a body that is not an object carrying `messages` and `model` (400).
/// Whatever the upstream answers, error payloads included, goes back to the
/// caller with its status code.
pub async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let Some(api_key) = state.relay().api_key() else {
        tracing::error!("relay called without OPENAI_API_KEY");
        return Err(relay_error(StatusCode::INTERNAL_SERVER_ERROR, API_KEY_NOT_CONFIGURED));
    };

    let payload = AnalyzeRequest::parse(&body)
        .ok_or_else(|| relay_error(StatusCode::BAD_REQUEST, MISSING_PARAMETERS))?;

    tracing::info!(model = %payload.model, "relaying chat completion");

    let upstream = state
        .client()
        .post(&state.relay().upstream_url)
        .bearer_auth(api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| upstream_error("Failed to reach upstream", e))?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = upstream
        .bytes()
        .await
        .map_err(|e| upstream_error("Failed to read upstream body", e))?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "upstream answered with an error");
    }

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

fn relay_error(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn upstream_error(message: &str, err: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("{}: {}", message, err);
    relay_error(StatusCode::BAD_GATEWAY, UPSTREAM_FAILED)
}
