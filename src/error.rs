use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Top-level error type for the HTTP surface.
///
/// Every handler is a terminal boundary: errors are converted into a JSON
/// `{error, details?}` body here and never escape further. How much upstream
/// detail reaches the caller varies per variant: prediction failures hide it
/// behind a fixed message, nearby-centre failures expose it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Missing Google API Key")]
    MissingPlacesKey,

    #[error("prediction relay failed: {0}")]
    PredictionFailed(#[source] anyhow::Error),

    #[error("nearby centre search failed: {0}")]
    CentresFailed(#[source] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        let (status, error_message, details) = match self {
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected request");
                (StatusCode::BAD_REQUEST, msg, None)
            }
            AppError::MissingPlacesKey => {
                tracing::error!("Places API key is not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Missing Google API Key".to_string(),
                    None,
                )
            }
            AppError::PredictionFailed(err) => {
                // Detail stays server-side only.
                tracing::error!(error = %err, "Prediction relay failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Prediction failed. Server might be offline.".to_string(),
                    None,
                )
            }
            AppError::CentresFailed(err) => {
                tracing::error!(error = %err, "Nearby centre search failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch nearby centres".to_string(),
                    Some(err.to_string()),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
                details,
            }),
        )
            .into_response()
    }
}
