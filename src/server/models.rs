use serde::{Deserialize, Serialize};

use crate::format::StatusReport;

/// `GET /api/status` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub current_temp: f64,
    pub target_temp: Option<f64>,
    pub mode: &'static str,
    pub mode_code: i64,
    pub operating_state: &'static str,
    #[serde(rename = "override")]
    pub override_label: &'static str,
    pub hold: &'static str,
}

impl From<StatusReport> for StatusResponse {
    fn from(report: StatusReport) -> Self {
        Self {
            current_temp: report.current_temp,
            target_temp: report.target_temp,
            mode: report.mode,
            mode_code: report.mode_code,
            operating_state: report.operating_state,
            override_label: report.override_label,
            hold: report.hold,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SetTempRequest {
    pub temp: i32,
}

#[derive(Debug, Deserialize)]
pub struct SetModeRequest {
    pub mode: i64,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub status: &'static str,
}

impl CommandResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
