use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;
use tracing::{debug, warn};

use crate::format::{format_status, StatusReport};
use crate::logger::{MessageLogMode, MessageLogger};
use crate::protocol::{set_mode_body, set_setpoint_body, tstat_url, TSTAT_PATH};
use crate::types::*;
use crate::{Error, Result};

pub struct ThermostatClientBuilder {
    address: String,
    log_mode: Option<MessageLogMode>,
    log_path: Option<PathBuf>,
}

impl ThermostatClientBuilder {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            log_mode: None,
            log_path: None,
        }
    }

    pub fn message_log(mut self, mode: MessageLogMode, path: impl Into<PathBuf>) -> Self {
        self.log_mode = Some(mode);
        self.log_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<ThermostatClient> {
        let http = reqwest::Client::builder().build()?;

        let logger = match (self.log_mode, self.log_path) {
            (Some(mode), Some(path)) => Some(Mutex::new(MessageLogger::new(mode, &path)?)),
            _ => None,
        };

        Ok(ThermostatClient {
            http,
            url: tstat_url(&format!("http://{}", self.address)),
            address: self.address,
            logger,
        })
    }
}

/// Client for a single thermostat's `/tstat` endpoint.
///
/// Every call is one independent request/response pair; nothing is cached
/// between calls, so a shared `&ThermostatClient` is safe to use from
/// concurrent tasks.
pub struct ThermostatClient {
    http: reqwest::Client,
    address: String,
    url: String,
    logger: Option<Mutex<MessageLogger>>,
}

impl ThermostatClient {
    pub fn builder(address: impl Into<String>) -> ThermostatClientBuilder {
        ThermostatClientBuilder::new(address)
    }

    pub fn new(address: impl Into<String>) -> Result<Self> {
        Self::builder(address).build()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Fetch the current device status.
    pub async fn status(&self) -> Result<ThermostatStatus> {
        debug!(url = %self.url, "polling thermostat");
        self.log(|logger| logger.log_request("GET", TSTAT_PATH));

        let resp = self.http.get(&self.url).send().await?.error_for_status()?;
        let code = resp.status().as_u16();
        let body = resp.text().await?;

        let raw: Value = serde_json::from_str(&body)?;
        self.log(|logger| logger.log_poll(code, &raw));

        Ok(serde_json::from_value(raw)?)
    }

    /// Fetch and format in one step.
    pub async fn report(&self) -> Result<StatusReport> {
        let status = self.status().await?;
        Ok(format_status(&status))
    }

    /// Set the target temperature for the mode the thermostat is currently in.
    ///
    /// Fails without touching the network when `temp` is outside
    /// [`MIN_SETPOINT`]..=[`MAX_SETPOINT`], and without sending a command
    /// when the device is in Off or Auto.
    pub async fn set_temperature(&self, temp: i32) -> Result<()> {
        if !(MIN_SETPOINT..=MAX_SETPOINT).contains(&temp) {
            return Err(Error::TemperatureOutOfRange(temp));
        }

        let status = self.status().await?;
        let body = status
            .mode()
            .and_then(|mode| set_setpoint_body(mode, temp))
            .ok_or(Error::SetpointUnavailable(label_for::<Mode>(status.tmode)))?;

        self.post_command("set_temperature", body).await
    }

    pub async fn set_mode(&self, mode: Mode) -> Result<()> {
        self.post_command("set_mode", set_mode_body(mode)).await
    }

    async fn post_command(&self, action: &str, body: Value) -> Result<()> {
        debug!(url = %self.url, action, %body, "sending command");
        self.log(|logger| logger.log_command(action, &body));

        let resp = self.http.post(&self.url).json(&body).send().await?;
        if !resp.status().is_success() {
            warn!(action, status = %resp.status(), "thermostat rejected command");
        }
        Ok(())
    }

    fn log(&self, f: impl FnOnce(&mut MessageLogger)) {
        let Some(ref logger) = self.logger else {
            return;
        };
        let mut guard = logger.lock().unwrap_or_else(|poisoned| {
            warn!("message log lock poisoned, continuing with recovered logger");
            poisoned.into_inner()
        });
        f(&mut guard);
    }
}
