//! Prediction relay handler.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{error::AppError, AppState};

/// Forward an arbitrary JSON body to the inference service and return its
/// response augmented with a `condition` field.
///
/// `condition` is the first entry of the upstream `labels` array when that
/// array is present and non-empty, and JSON null otherwise. Every failure on
/// this path (unreachable service, non-2xx status, malformed JSON) collapses
/// into one fixed client-facing error; the cause is only logged.
pub async fn predict(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let upstream = state
        .inference
        .predict(&payload)
        .await
        .map_err(AppError::PredictionFailed)?;

    let condition = upstream
        .get("labels")
        .and_then(Value::as_array)
        .and_then(|labels| labels.first())
        .cloned()
        .unwrap_or(Value::Null);

    let body = match upstream {
        Value::Object(mut fields) => {
            fields.insert("condition".to_string(), condition);
            Value::Object(fields)
        }
        // Nothing to augment on a non-object payload.
        _ => json!({ "condition": condition }),
    };

    Ok(Json(body))
}
