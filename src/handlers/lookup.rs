//! Static lookup handlers for treatment plans and condition information.
//!
//! Both endpoints always answer 200: unknown, empty or non-string condition
//! keys resolve to the canonical fallback record.

use axum::Json;
use serde_json::{json, Value};

use crate::models::{ConditionInfo, LookupRequest};
use crate::services::catalog;

pub async fn treatment_plan(Json(payload): Json<LookupRequest>) -> Json<Value> {
    let plan = catalog::treatment_plan(payload.condition_key());
    Json(json!({ "plan": plan }))
}

pub async fn condition_info(Json(payload): Json<LookupRequest>) -> Json<&'static ConditionInfo> {
    Json(catalog::condition_info(payload.condition_key()))
}
