use screening_service::config::{InferenceSettings, PlacesSettings, ServerSettings, Settings};
use screening_service::startup::Application;
use secrecy::Secret;
use wiremock::MockServer;

pub const PLACES_SEARCH_PATH: &str = "/maps/api/place/nearbysearch/json";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub inference: MockServer,
    pub places: MockServer,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_places_key("test-places-key").await
    }

    /// Spawn the app with an explicit places API key; pass "" to exercise
    /// the missing-key path.
    pub async fn spawn_with_places_key(api_key: &str) -> Self {
        let inference = MockServer::start().await;
        let places = MockServer::start().await;

        let config = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            inference: InferenceSettings {
                url: inference.uri(),
            },
            places: PlacesSettings {
                api_key: Secret::new(api_key.to_string()),
                base_url: format!("{}{}", places.uri(), PLACES_SEARCH_PATH),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            inference,
            places,
        }
    }

    pub async fn post(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
