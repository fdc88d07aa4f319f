use std::fmt;

#[derive(Debug)]
pub enum Error {
    Network(reqwest::Error),
    Decode(serde_json::Error),
    TemperatureOutOfRange(i32),
    InvalidMode(i64),
    SetpointUnavailable(&'static str),
    Io(std::io::Error),
    Config(String),
}

impl Error {
    /// True for precondition failures detected before or instead of talking to the device.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::TemperatureOutOfRange(_) | Error::InvalidMode(_) | Error::SetpointUnavailable(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network(e) => write!(f, "network error: {e}"),
            Error::Decode(e) => write!(f, "decode error: {e}"),
            Error::TemperatureOutOfRange(_) => {
                write!(
                    f,
                    "Temperature must be between {} and {}",
                    crate::types::MIN_SETPOINT,
                    crate::types::MAX_SETPOINT
                )
            }
            Error::InvalidMode(_) => {
                write!(f, "Mode must be 0 (Off), 1 (Heat), 2 (Cool), or 3 (Auto)")
            }
            Error::SetpointUnavailable(mode) => write!(
                f,
                "thermostat must be in heat or cool mode to set temperature (currently {mode})"
            ),
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::Config(msg) => write!(f, "config error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Network(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
