//! Radio Thermostat CLI
//!
//! Prints the thermostat status, or sets the operating mode and target temperature.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use radio_thermostat::{
    MAX_SETPOINT, MIN_SETPOINT, MessageLogMode, Mode, ThermostatClient, config,
};

/// Poll or control a Radio Thermostat CT50 on the local network
#[derive(Parser, Debug)]
#[command(name = "thermostat")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Target temperature to set, degrees F (50-90)
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_SETPOINT as i64..=MAX_SETPOINT as i64))]
    temp: Option<i32>,

    /// Operating mode to set
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Thermostat address; THERMOSTAT_IP takes precedence
    #[arg(long)]
    ip: Option<String>,

    /// Path of the JSON config file holding ThermostatIP
    #[arg(short, long, default_value_os_t = config::default_config_path())]
    config: PathBuf,

    /// Print the status as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Append device traffic to this NDJSON file
    #[arg(long)]
    log: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Off,
    Heat,
    Cool,
    Auto,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Off => Mode::Off,
            ModeArg::Heat => Mode::Heat,
            ModeArg::Cool => Mode::Cool,
            ModeArg::Auto => Mode::Auto,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let address = config::resolve_address(
        std::env::var(config::ADDRESS_ENV_VAR).ok(),
        args.ip.clone(),
        &args.config,
    )
    .context("failed to resolve thermostat address")?;

    let mut builder = ThermostatClient::builder(&address);
    if let Some(ref path) = args.log {
        builder = builder.message_log(MessageLogMode::Full, path);
    }
    let client = builder.build().context("failed to create thermostat client")?;

    if let Some(mode) = args.mode {
        let mode = Mode::from(mode);
        client
            .set_mode(mode)
            .await
            .with_context(|| format!("failed to set mode on {address}"))?;
        println!("Set Mode to {mode}");
    }

    if let Some(temp) = args.temp {
        client
            .set_temperature(temp)
            .await
            .with_context(|| format!("failed to set temperature on {address}"))?;
        println!("Set Temp to {temp}");
    }

    if args.mode.is_none() && args.temp.is_none() {
        let report = client
            .report()
            .await
            .with_context(|| format!("failed to read status from {address}"))?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{report}");
        }
    }

    Ok(())
}
