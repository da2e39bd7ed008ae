pub mod centres;
pub mod lookup;
pub mod predict;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "screening-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
