pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use crate::config::Settings;
use crate::services::{InferenceClient, PlacesClient};

/// Shared application state containing configuration and upstream clients.
#[derive(Clone)]
pub struct AppState {
    pub config: Settings,
    pub inference: InferenceClient,
    pub places: PlacesClient,
}

impl AppState {
    pub fn new(config: Settings) -> Self {
        let inference = InferenceClient::new(config.inference.clone());
        let places = PlacesClient::new(config.places.clone());
        Self {
            config,
            inference,
            places,
        }
    }
}
