//! HTTP control panel in front of one thermostat.

mod handlers;
mod models;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::ThermostatClient;

pub use handlers::ApiError;
pub use models::{CommandResponse, SetModeRequest, SetTempRequest, StatusResponse};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ThermostatClient>,
}

impl AppState {
    pub fn new(client: ThermostatClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/status", get(handlers::status))
        .route("/api/settemp", post(handlers::set_temp))
        .route("/api/setmode", post(handlers::set_mode))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
