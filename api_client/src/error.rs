use reqwest::StatusCode;
use serde::Deserialize;
use shared::error::{ConfigError, UserFacingError};
use thiserror::Error;

const UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please check your connection and try again.";
const UNEXPECTED_MESSAGE: &str = "The server returned an unexpected response.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request with {status}: {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub(crate) fn rejected(status: StatusCode, body: &str) -> Self {
        ApiError::Rejected {
            status,
            message: server_message(status, body),
        }
    }
}

impl UserFacingError for ApiError {
    fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Transport(_) => UNREACHABLE_MESSAGE.to_string(),
            ApiError::Decode { .. } => UNEXPECTED_MESSAGE.to_string(),
            ApiError::Cancelled => "Request cancelled".to_string(),
            ApiError::InvalidUrl { .. } | ApiError::Config(_) => self.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// `error`, then `message`, then the raw body, then the status reason.
fn server_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body)
        && let Some(message) = parsed.error.or(parsed.message)
    {
        return message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .map_or_else(|| format!("Request failed with status {}", status.as_u16()), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_error_field() {
        let msg = server_message(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Quantity exceeds stock", "message": "ignored"}"#,
        );
        assert_eq!(msg, "Quantity exceeds stock");
    }

    #[test]
    fn falls_back_to_message_field() {
        let msg = server_message(StatusCode::CONFLICT, r#"{"message": "Already ordered"}"#);
        assert_eq!(msg, "Already ordered");
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        let msg = server_message(StatusCode::BAD_GATEWAY, "upstream timed out\n");
        assert_eq!(msg, "upstream timed out");
    }

    #[test]
    fn empty_body_uses_status_reason() {
        assert_eq!(server_message(StatusCode::NOT_FOUND, ""), "Not Found");
        assert_eq!(server_message(StatusCode::INTERNAL_SERVER_ERROR, "{}"), "Internal Server Error");
    }
}
