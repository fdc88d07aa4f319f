mod client;
pub mod config;
mod error;
mod format;
mod logger;
mod protocol;
pub mod server;
mod types;

pub use client::{ThermostatClient, ThermostatClientBuilder};
pub use error::{Error, Result};
pub use format::{format_status, StatusReport};
pub use logger::MessageLogMode;
pub use types::*;
