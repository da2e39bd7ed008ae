//! Request and response shapes for the HTTP surface.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the two static lookup endpoints.
///
/// `condition` is kept as raw JSON: anything that is not a string degrades to
/// the empty key (and therefore the fallback record) instead of a 422.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub condition: Value,
}

impl LookupRequest {
    /// Derive the table key: strings are trimmed, everything else is empty.
    pub fn condition_key(&self) -> &str {
        self.condition.as_str().map(str::trim).unwrap_or("")
    }
}

/// Static per-condition information record.
#[derive(Debug, Clone, Serialize)]
pub struct ConditionInfo {
    pub description: String,
    pub causes: Vec<String>,
    pub effects: Vec<String>,
    #[serde(rename = "commonEmotions")]
    pub common_emotions: Vec<String>,
}

/// Body of the nearby-centres endpoint.
///
/// Coordinates arrive as raw JSON so the handler can apply the source app's
/// truthiness rules (null, false, 0 and "" all count as missing).
#[derive(Debug, Deserialize)]
pub struct NearbyCentresRequest {
    #[serde(default)]
    pub lat: Option<Value>,
    #[serde(default)]
    pub lng: Option<Value>,
    #[serde(default)]
    pub radius: Option<Value>,
}

/// Reduced projection of one places-provider result.
#[derive(Debug, Serialize)]
pub struct CentreSummary {
    pub name: Option<String>,
    pub address: String,
    pub rating: Option<f64>,
    pub user_ratings_total: u64,
    pub place_id: Option<String>,
    /// Provider coordinate object (`geometry.location`), passed through as-is.
    pub location: Option<Value>,
    pub types: Vec<String>,
}

impl CentreSummary {
    /// Project an upstream place result, tolerating any missing field.
    pub fn from_place(place: &Value) -> Self {
        let address = place
            .get("vicinity")
            .and_then(Value::as_str)
            .or_else(|| place.get("formatted_address").and_then(Value::as_str))
            .unwrap_or("")
            .to_string();

        Self {
            name: place.get("name").and_then(Value::as_str).map(str::to_string),
            address,
            rating: place.get("rating").and_then(Value::as_f64),
            user_ratings_total: place
                .get("user_ratings_total")
                .and_then(Value::as_u64)
                .unwrap_or(0),
            place_id: place
                .get("place_id")
                .and_then(Value::as_str)
                .map(str::to_string),
            location: place.pointer("/geometry/location").cloned(),
            types: place
                .get("types")
                .and_then(Value::as_array)
                .map(|types| {
                    types
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Response of the nearby-centres endpoint.
#[derive(Debug, Serialize)]
pub struct NearbyCentresResponse {
    pub centres: Vec<CentreSummary>,
    pub status: String,
}
