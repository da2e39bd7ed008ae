//! Nearby-centres relay handler.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::models::{CentreSummary, NearbyCentresRequest, NearbyCentresResponse};
use crate::{error::AppError, AppState};

/// Result list cap, applied after the provider responds.
const MAX_CENTRES: usize = 12;

/// Search radius in meters when the request omits one or it fails coercion.
const DEFAULT_RADIUS_METERS: f64 = 5000.0;

/// Validate coordinates, query the places provider and project the results.
///
/// Coordinate validation happens before any outbound call, as does the API
/// key check. Unlike the prediction relay, failures here return the
/// underlying error message in a `details` field.
pub async fn nearby_centres(
    State(state): State<AppState>,
    Json(payload): Json<NearbyCentresRequest>,
) -> Result<Json<NearbyCentresResponse>, AppError> {
    let (lat, lng) = match (coordinate(&payload.lat), coordinate(&payload.lng)) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => return Err(AppError::BadRequest("lat and lng are required".to_string())),
    };

    if !state.places.is_configured() {
        return Err(AppError::MissingPlacesKey);
    }

    let radius = payload
        .radius
        .as_ref()
        .and_then(coerce_number)
        .unwrap_or(DEFAULT_RADIUS_METERS);

    let location = format!("{},{}", lat, lng);
    let upstream = state
        .places
        .nearby_search(&location, radius)
        .await
        .map_err(AppError::CentresFailed)?;

    let centres: Vec<CentreSummary> = upstream
        .get("results")
        .and_then(Value::as_array)
        .map(|results| {
            results
                .iter()
                .take(MAX_CENTRES)
                .map(CentreSummary::from_place)
                .collect()
        })
        .unwrap_or_default();

    let status = upstream
        .get("status")
        .and_then(Value::as_str)
        .unwrap_or("OK")
        .to_string();

    tracing::info!(
        centres = centres.len(),
        status = %status,
        "Nearby centre search completed"
    );

    Ok(Json(NearbyCentresResponse { centres, status }))
}

/// Render a coordinate for the provider query, treating JS-falsy values
/// (null, false, 0, "") the same as a missing one.
fn coordinate(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Coerce a JSON value to a finite number, accepting numeric strings.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
