use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dtos::MessageResponse;

/// Application error taxonomy.
///
/// The two not-found variants carry the exact messages of the wire contract
/// in their `#[error]` strings, so display and response body cannot drift
/// apart.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Data not available for the requested year.")]
    YearNotFound,

    #[error("Data not available for the requested race.")]
    RaceNotFound,

    #[error("Configuration error: {0}")]
    Config(anyhow::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::YearNotFound | AppError::RaceNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::Config(err) | AppError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}
