//! Client for the third-party places search provider.

use crate::config::PlacesSettings;
use anyhow::{anyhow, Result};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde_json::Value;

/// Fixed keyword filter for care-centre searches.
const SEARCH_KEYWORDS: &str = "therapy|mental health|counselling|psychologist|psychiatrist";

/// Fixed provider category filter.
const SEARCH_TYPE: &str = "health";

#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    settings: PlacesSettings,
}

impl PlacesClient {
    pub fn new(settings: PlacesSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// Check whether a provider API key is configured.
    pub fn is_configured(&self) -> bool {
        !self.settings.api_key.expose_secret().is_empty()
    }

    /// Run a nearby search around `location` (a `lat,lng` pair) within
    /// `radius` meters and return the provider's parsed JSON response.
    pub async fn nearby_search(&self, location: &str, radius: f64) -> Result<Value> {
        let response = self
            .client
            .get(&self.settings.base_url)
            .query(&[
                ("location", location),
                ("radius", &radius.to_string()),
                ("keyword", SEARCH_KEYWORDS),
                ("type", SEARCH_TYPE),
                ("key", self.settings.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to reach places provider at {}: {}",
                    self.settings.base_url,
                    e
                );
                anyhow!("places request failed: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("places provider returned {}", status.as_u16()));
        }

        let parsed = response
            .json::<Value>()
            .await
            .map_err(|e| anyhow!("places provider returned invalid JSON: {}", e))?;

        Ok(parsed)
    }
}
