//! Application startup and lifecycle management.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::{handlers, AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/predict", post(handlers::predict::predict))
        .route("/treatment-plan", post(handlers::lookup::treatment_plan))
        .route("/condition-info", post(handlers::lookup::condition_info))
        .route("/nearby-centres", post(handlers::centres::nearby_centres))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
///
/// The listener is bound during `build` so that a configured port of 0
/// resolves to a real OS-assigned port before the server starts; the test
/// harness relies on this.
pub struct Application {
    port: u16,
    listener: tokio::net::TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Settings) -> anyhow::Result<Self> {
        let state = AppState::new(config.clone());

        if state.places.is_configured() {
            tracing::info!("Places client initialized");
        } else {
            tracing::warn!(
                "Places API key not configured - nearby centre search will be unavailable"
            );
        }

        let router = build_router(state);

        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
            anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        tracing::info!("Listening on {}", self.listener.local_addr()?);
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
