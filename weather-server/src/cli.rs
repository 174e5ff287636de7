use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, PasswordDisplayMode};
use tokio::net::TcpListener;
use tracing::{info, warn};
use weather_core::{Config, PresentedItem, fetcher_from_config, present, present_first};
use weather_server::{AppState, create_router};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather forecast proxy")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Interface to bind, overrides config and environment.
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, overrides config and environment.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Print the forecast for a city.
    Show {
        /// City name, optionally with country code, e.g. "London,GB".
        city: String,

        /// Print every forecast entry instead of the next 24 hours.
        #[arg(long)]
        all: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Serve { host, port } => {
                let mut config = Config::resolve(self.config.as_deref())?;
                if let Some(host) = host {
                    config.server.host = host;
                }
                if let Some(port) = port {
                    config.server.port = port;
                }
                serve(config).await
            }
            Command::Configure => configure(self.config),
            Command::Show { city, all } => {
                let config = Config::resolve(self.config.as_deref())?;
                show(&config, &city, all).await
            }
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let fetcher = fetcher_from_config(&config)?;
    let app = create_router(AppState::new(fetcher), &config.server);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        addr = %addr,
        static_dir = %config.server.static_dir.display(),
        templates_dir = %config.server.templates_dir.display(),
        "Weather server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Weather server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn configure(path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match path {
        Some(p) => p,
        None => Config::config_file_path()?,
    };

    // Environment overrides are not applied here so they never end up on disk.
    let mut config = Config::load_from(&path)?;

    if config.api_key.is_some() {
        let replace = Confirm::new("An API key is already configured. Replace it?")
            .with_default(false)
            .prompt()?;
        if !replace {
            println!("Keeping existing API key.");
            return Ok(());
        }
    }

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    config.save_to(&path)?;

    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn show(config: &Config, city: &str, all: bool) -> anyhow::Result<()> {
    if city.is_empty() {
        bail!("city is required");
    }

    let fetcher = fetcher_from_config(config)?;
    let forecast = fetcher
        .fetch(city)
        .await
        .with_context(|| format!("Failed to get forecast for {city}"))?;

    let items = if all { present_first(forecast, usize::MAX) } else { present(forecast) };

    println!("Weather for {city}:");
    for item in &items {
        println!("{}", format_item(item));
        println!("---------------------------");
    }

    Ok(())
}

fn format_item(item: &PresentedItem) -> String {
    format!(
        "Date and time: {}\nTemp: {:.2}°C (feels like {:.2}°C)\nHumidity: {}%\nChance of rain: {}",
        item.dt_txt, item.temp, item.feels_like, item.humidity, item.pop
    )
}
