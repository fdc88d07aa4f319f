use std::fmt;

use serde::Serialize;

use crate::types::*;

/// Human-facing view of a [`ThermostatStatus`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub current_temp: f64,
    pub target_temp: Option<f64>,
    pub mode: &'static str,
    pub mode_code: i64,
    pub operating_state: &'static str,
    #[serde(rename = "override")]
    pub override_label: &'static str,
    pub hold: &'static str,
    pub fan_mode: &'static str,
    pub fan_state: &'static str,
    pub device_time: Option<String>,
}

pub fn format_status(status: &ThermostatStatus) -> StatusReport {
    StatusReport {
        current_temp: status.temp,
        target_temp: status.target_setpoint(),
        mode: label_for::<Mode>(status.tmode),
        mode_code: status.tmode,
        operating_state: label_for::<OperatingState>(status.tstate),
        override_label: label_for::<Flag>(status.override_flag),
        hold: label_for::<Flag>(status.hold),
        fan_mode: label_for::<FanMode>(status.fmode),
        fan_state: label_for::<FanState>(status.fstate),
        device_time: status.time.weekday().map(|_| status.time.to_string()),
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Thermostat Mode = {}", self.mode)?;
        writeln!(f, "Current Temp = {}", self.current_temp)?;
        match self.target_temp {
            Some(t) => writeln!(f, "Target Temp = {t}")?,
            None => writeln!(f, "Target Temp = {UNKNOWN}")?,
        }
        writeln!(f, "Operating Status = {}", self.operating_state)?;
        writeln!(f, "Override {}", self.override_label)?;
        writeln!(f, "Manual Hold {}", self.hold)?;
        writeln!(f, "Fan Mode = {}", self.fan_mode)?;
        write!(f, "Fan = {}", self.fan_state)?;
        if let Some(ref time) = self.device_time {
            write!(f, "\nDevice Time = {time}")?;
        }
        Ok(())
    }
}
