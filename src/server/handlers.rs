use std::fmt;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::{error, info};

use super::AppState;
use super::models::{CommandResponse, SetModeRequest, SetTempRequest, StatusResponse};
use crate::Error;
use crate::types::Mode;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Debug)]
pub enum ApiError {
    InvalidRequest,
    Thermostat(Error),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiError::Thermostat(e) => match e {
                Error::TemperatureOutOfRange(_) | Error::InvalidMode(_) => StatusCode::BAD_REQUEST,
                Error::SetpointUnavailable(_) => StatusCode::CONFLICT,
                Error::Network(_) | Error::Decode(_) => StatusCode::BAD_GATEWAY,
                Error::Io(_) | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidRequest => f.write_str("Invalid request"),
            ApiError::Thermostat(e) => write!(f, "{e}"),
        }
    }
}

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError::Thermostat(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(_: serde_json::Error) -> Self {
        ApiError::InvalidRequest
    }
}

/// Request bodies are decoded as JSON whatever `Content-Type` the caller sent.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, "thermostat request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /api/status
pub async fn status(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    let report = state.client.report().await?;
    Ok(Json(report.into()))
}

/// POST /api/settemp
pub async fn set_temp(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CommandResponse>, ApiError> {
    let req: SetTempRequest = parse_body(&body)?;
    state.client.set_temperature(req.temp).await?;
    info!(temp = req.temp, "setpoint updated");
    Ok(Json(CommandResponse::success()))
}

/// POST /api/setmode
pub async fn set_mode(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CommandResponse>, ApiError> {
    let req: SetModeRequest = parse_body(&body)?;
    let mode = Mode::try_from(req.mode)?;
    state.client.set_mode(mode).await?;
    info!(%mode, "mode updated");
    Ok(Json(CommandResponse::success()))
}
