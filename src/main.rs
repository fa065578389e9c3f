mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod poller;
mod runtime;
mod session;
mod sheets;
mod snapshot;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::watch_consts::polling;
use crate::environment::Environment;
use crate::error_classifier::ErrorClassifier;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::sheets::SheetsClient;
use crate::snapshot::SlotId;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start watching the spreadsheet
    Start {
        /// Spreadsheet to poll, overriding the stored configuration.
        #[arg(long, value_name = "SPREADSHEET_ID")]
        spreadsheet_id: Option<String>,

        /// API key to use, overriding the stored configuration.
        #[arg(long, value_name = "API_KEY")]
        api_key: Option<String>,

        /// Seconds between poll cycles.
        #[arg(long, default_value_t = polling::DEFAULT_INTERVAL_SECS)]
        interval: u64,

        /// Run without the terminal UI, logging events to the console.
        #[arg(long)]
        headless: bool,

        /// Stop after this many poll cycles.
        #[arg(long, value_name = "MAX_POLLS")]
        max_polls: Option<u32>,

        /// Disable background colors in the dashboard.
        #[arg(long)]
        no_background_color: bool,
    },
    /// Run a single poll cycle and print the fetched slot values.
    Fetch {
        /// Spreadsheet to poll, overriding the stored configuration.
        #[arg(long, value_name = "SPREADSHEET_ID")]
        spreadsheet_id: Option<String>,

        /// API key to use, overriding the stored configuration.
        #[arg(long, value_name = "API_KEY")]
        api_key: Option<String>,
    },
    /// Store the spreadsheet id and API key in the configuration file.
    Configure {
        /// Spreadsheet to store.
        #[arg(long, value_name = "SPREADSHEET_ID")]
        spreadsheet_id: Option<String>,

        /// API key to store.
        #[arg(long, value_name = "API_KEY")]
        api_key: Option<String>,
    },
    /// Delete the stored configuration.
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("SHEETWATCH_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            spreadsheet_id,
            api_key,
            interval,
            headless,
            max_polls,
            no_background_color,
        } => {
            let config = resolve_config(&config_path, spreadsheet_id, api_key);
            let session = setup_session(
                config,
                environment,
                Duration::from_secs(interval.max(1)),
                max_polls,
            );
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::Fetch {
            spreadsheet_id,
            api_key,
        } => {
            let config = resolve_config(&config_path, spreadsheet_id, api_key);
            fetch_once(config, environment).await
        }
        Command::Configure {
            spreadsheet_id,
            api_key,
        } => {
            let mut config = Config::load_from_file(&config_path).unwrap_or_default();
            if let Some(spreadsheet_id) = spreadsheet_id {
                config.spreadsheet_id = spreadsheet_id;
            }
            if let Some(api_key) = api_key {
                config.api_key = api_key;
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            crate::print_cmd_success!(
                "Configuration saved",
                "{}",
                config_path.to_string_lossy()
            );
            if !config.is_configured() {
                crate::print_cmd_warn!(
                    "Configuration",
                    "No API key stored yet; polls will fail until one is configured."
                );
            }
            Ok(())
        }
        Command::Clear => {
            crate::print_cmd_info!("Clearing stored configuration", "");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Stored configuration with command-line overrides applied on top.
fn resolve_config(
    config_path: &Path,
    spreadsheet_id: Option<String>,
    api_key: Option<String>,
) -> Config {
    let mut config = Config::load_from_file(config_path).unwrap_or_default();
    if let Some(spreadsheet_id) = spreadsheet_id {
        config.spreadsheet_id = spreadsheet_id;
    }
    if let Some(api_key) = api_key {
        config.api_key = api_key;
    }
    config
}

/// Runs a single poll cycle against the configured spreadsheet and prints the
/// outcome. Exits non-zero on any failure, including a missing credential.
async fn fetch_once(config: Config, environment: Environment) -> Result<(), Box<dyn Error>> {
    let sheets = SheetsClient::new(environment);
    match poller::poll_ranges(&sheets, &config, 1).await {
        Ok(snapshot) => {
            crate::print_cmd_success!(
                "Fetched",
                "{} slots at {}",
                snapshot.slots.len(),
                snapshot.formatted_time()
            );
            for slot in SlotId::SENSORS.into_iter().chain(SlotId::ACTUATORS) {
                println!("  {:<12} {}", slot.to_string(), snapshot.slot_text(slot));
            }
            Ok(())
        }
        Err(error) => {
            let banner = ErrorClassifier::new().classify(&error);
            let message = banner.message();
            crate::print_cmd_error!("Poll failed", message.as_str());
            Err(Box::from(message))
        }
    }
}
