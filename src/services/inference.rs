//! Client for the ML inference service.
//!
//! The request body is forwarded verbatim; no local schema is enforced on
//! either direction, so the response is handled as raw JSON.

use crate::config::InferenceSettings;
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::Value;

#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    settings: InferenceSettings,
}

impl InferenceClient {
    pub fn new(settings: InferenceSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// POST the payload to the inference service and return its parsed
    /// JSON response.
    pub async fn predict(&self, payload: &Value) -> Result<Value> {
        let url = format!("{}/predict", self.settings.url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach inference service at {}: {}", url, e);
                anyhow!("inference request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "inference service returned {}: {}",
                status.as_u16(),
                body
            ));
        }

        let parsed = response
            .json::<Value>()
            .await
            .map_err(|e| anyhow!("inference service returned invalid JSON: {}", e))?;

        Ok(parsed)
    }
}
