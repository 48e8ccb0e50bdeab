use api_client::ApiError;
use shared::error::{ConfigError, InitializationError, UserFacingError};
use thiserror::Error;
use views::forms::ValidationErrors;

#[derive(Debug, Error)]
pub enum MainError {
    #[error(transparent)]
    Init(#[from] InitializationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
