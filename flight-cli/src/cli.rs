use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use flight_core::{
    Config, TravelWindow, analyze, config::API_KEY_ENV, provider_from_credential, tables::AIRPORTS,
};
use inquire::{CustomType, Password, PasswordDisplayMode};
use tracing::debug;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "flight", version, about = "Flight delay risk and reminder CLI")]
pub struct Cli {
    /// Print debug logs to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Estimate delay risk and print reminders for a departure.
    Analyze {
        /// Departure city, e.g. "mumbai" or "new york".
        city: String,

        /// Travel date (YYYY-MM-DD), today up to 30 days ahead; defaults to today.
        #[arg(long)]
        date: Option<String>,

        /// OpenWeather API key; overrides the environment and config file.
        #[arg(long)]
        api_key: Option<String>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Store the OpenWeather API key and request timeout.
    Configure,

    /// List supported departure cities.
    Cities,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Analyze { city, date, api_key, json } => {
                let config = Config::load()?;
                let window = TravelWindow::starting(Local::now().date_naive());
                let travel_date = match date {
                    Some(raw) => window.parse(&raw)?,
                    None => window.earliest,
                };

                let env_key = std::env::var(API_KEY_ENV).ok();
                let api_key = config.resolve_api_key(api_key.as_deref(), env_key.as_deref());
                let provider = provider_from_credential(api_key, &config);
                debug!(%city, %travel_date, live = provider.is_some(), "analyzing flight");

                let mut rng = rand::rng();
                let report = analyze(provider.as_deref(), &city, travel_date, &mut rng).await;

                if json {
                    let text = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize report to JSON")?;
                    println!("{text}");
                } else {
                    output::print_report(&report);
                }
            }
            Command::Configure => {
                let mut config = Config::load()?;

                let key = Password::new("OpenWeather API key (leave empty for mock data):")
                    .with_display_mode(PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()
                    .context("API key prompt cancelled")?;
                let timeout = CustomType::<u64>::new("Request timeout in seconds:")
                    .with_default(config.timeout_secs)
                    .with_error_message("Please enter a whole number of seconds")
                    .prompt()
                    .context("Timeout prompt cancelled")?;

                config.set_api_key(key);
                config.timeout_secs = timeout;
                config.save()?;

                println!("Saved configuration to {}", Config::config_file_path()?.display());
            }
            Command::Cities => {
                for (city, code) in AIRPORTS {
                    println!("{city:<12} {code}");
                }
            }
        }

        Ok(())
    }
}
