//! Thermostat address resolution.
//!
//! Sources are consulted in a fixed order and the first non-empty value wins:
//!
//! 1. the `THERMOSTAT_IP` environment variable,
//! 2. the `--ip` command-line flag,
//! 3. the `ThermostatIP` key of the JSON config file
//!    (default `~/.config/thermostat/config.json`).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

pub const ADDRESS_ENV_VAR: &str = "THERMOSTAT_IP";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(rename = "ThermostatIP", default)]
    pub thermostat_ip: String,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// `~/.config/thermostat/config.json`, or a relative `config.json` when no
/// home directory can be determined.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".config").join("thermostat").join("config.json"))
        .unwrap_or_else(|| PathBuf::from("config.json"))
}

/// Pick the thermostat address from env, flag, then config file.
///
/// The environment value is passed in rather than read here; callers pass
/// `std::env::var(ADDRESS_ENV_VAR).ok()`.
pub fn resolve_address(
    env: Option<String>,
    flag: Option<String>,
    config_path: &Path,
) -> Result<String> {
    if let Some(ip) = non_empty(env) {
        debug!(source = ADDRESS_ENV_VAR, %ip, "thermostat address resolved");
        return Ok(ip);
    }
    if let Some(ip) = non_empty(flag) {
        debug!(source = "flag", %ip, "thermostat address resolved");
        return Ok(ip);
    }

    let config = ConfigFile::load(config_path)?;
    match non_empty(Some(config.thermostat_ip)) {
        Some(ip) => {
            debug!(source = %config_path.display(), %ip, "thermostat address resolved");
            Ok(ip)
        }
        None => Err(Error::Config(format!(
            "thermostat address not configured: set {ADDRESS_ENV_VAR}, pass --ip, or add ThermostatIP to {}",
            config_path.display()
        ))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_with(content: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(content.as_bytes()).unwrap();
        tmp
    }

    #[test]
    fn env_wins_over_flag_and_file() {
        let file = config_with(r#"{"ThermostatIP": "10.0.0.3"}"#);
        let ip = resolve_address(
            Some("10.0.0.1".into()),
            Some("10.0.0.2".into()),
            file.path(),
        )
        .unwrap();
        assert_eq!(ip, "10.0.0.1");
    }

    #[test]
    fn flag_wins_over_file() {
        let file = config_with(r#"{"ThermostatIP": "10.0.0.3"}"#);
        let ip = resolve_address(None, Some("10.0.0.2".into()), file.path()).unwrap();
        assert_eq!(ip, "10.0.0.2");
    }

    #[test]
    fn empty_env_falls_through() {
        let file = config_with(r#"{"ThermostatIP": "10.0.0.3"}"#);
        let ip = resolve_address(Some(String::new()), Some("  ".into()), file.path()).unwrap();
        assert_eq!(ip, "10.0.0.3");
    }

    #[test]
    fn flag_skips_config_file_entirely() {
        let ip = resolve_address(
            None,
            Some("10.0.0.2".into()),
            Path::new("/nonexistent/thermostat/config.json"),
        )
        .unwrap();
        assert_eq!(ip, "10.0.0.2");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = resolve_address(None, None, Path::new("/nonexistent/thermostat/config.json"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)), "got {err:?}");
    }

    #[test]
    fn malformed_file_is_decode_error() {
        let file = config_with("ThermostatIP = 10.0.0.3");
        let err = resolve_address(None, None, file.path()).unwrap_err();
        assert!(matches!(err, Error::Decode(_)), "got {err:?}");
    }

    #[test]
    fn blank_address_in_file_is_config_error() {
        let file = config_with(r#"{"ThermostatIP": ""}"#);
        let err = resolve_address(None, None, file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {err:?}");
        assert!(err.to_string().contains(ADDRESS_ENV_VAR));
    }

    #[test]
    fn default_path_ends_with_config_json() {
        let path = default_config_path();
        assert!(path.ends_with("config.json"));
    }
}
