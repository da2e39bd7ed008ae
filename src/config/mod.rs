use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub inference: InferenceSettings,
    pub places: PlacesSettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    /// Port 0 asks the OS for an ephemeral port (used by the test harness).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

#[derive(Deserialize, Clone)]
pub struct InferenceSettings {
    /// Base URL of the ML inference service; requests go to `{url}/predict`.
    #[serde(default = "default_inference_url")]
    pub url: String,
}

fn default_inference_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

#[derive(Deserialize, Clone)]
pub struct PlacesSettings {
    /// Places provider API key. May be empty; the nearby-centres handler
    /// rejects requests until one is configured.
    #[serde(default = "default_api_key")]
    pub api_key: Secret<String>,
    /// Search endpoint base URL (overridable so tests can point at a mock).
    #[serde(default = "default_places_base_url")]
    pub base_url: String,
}

fn default_api_key() -> Secret<String> {
    Secret::new(String::new())
}

fn default_places_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("config");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
