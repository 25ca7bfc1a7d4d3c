use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DEFAULT_TEMPERATURE: f64 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Body accepted by `POST /api/analyze`. A field set to `null` counts as
/// absent.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub messages: Option<Value>,
    pub model: Option<Value>,
    pub temperature: Option<Value>,
    pub max_tokens: Option<Value>,
}

impl AnalyzeRequest {
    /// Parse a request body. Only a JSON object qualifies; arrays would
    /// otherwise fill the fields by position.
    pub fn parse(body: &[u8]) -> Option<UpstreamRequest> {
        let value = serde_json::from_slice::<Value>(body).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value::<AnalyzeRequest>(value)
            .ok()?
            .into_upstream()
    }

    /// Apply defaults; `None` when `messages` or `model` is missing.
    pub fn into_upstream(self) -> Option<UpstreamRequest> {
        let (Some(model), Some(messages)) = (self.model, self.messages) else {
            return None;
        };

        Some(UpstreamRequest {
            model,
            messages,
            temperature: self.temperature.unwrap_or_else(|| json!(DEFAULT_TEMPERATURE)),
            max_tokens: self.max_tokens.unwrap_or_else(|| json!(DEFAULT_MAX_TOKENS)),
        })
    }
}

/// Body sent to the completion API; values are forwarded as received.
#[derive(Debug, Serialize, PartialEq)]
pub struct UpstreamRequest {
    pub model: Value,
    pub messages: Value,
    pub temperature: Value,
    pub max_tokens: Value,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
