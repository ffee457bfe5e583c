mod app;
mod button;
mod components;
mod config;
mod input;
mod report;
mod styles;
mod view;
mod weather;

use anyhow::Context;
use app::{Flags, WeatherApp};
use config::Config;
use iced::{window, Application, Settings, Size};
use tracing_subscriber::EnvFilter;
use weather::WeatherClient;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weather_now=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return Err(e).context("Failed to load configuration");
        }
    };
    tracing::info!(
        api_url = %config.api_url,
        units = %config.units,
        lang = %config.lang,
        timeout_secs = config.timeout_secs,
        background = ?config.background,
        "Configuration loaded"
    );

    let client = WeatherClient::new(&config).context("Failed to build HTTP client")?;

    WeatherApp::run(Settings {
        window: window::Settings {
            size: Size::new(500.0, 700.0),
            resizable: false,
            ..window::Settings::default()
        },
        ..Settings::with_flags(Flags {
            client,
            background: config.background,
        })
    })
    .context("Weather window exited with an error")
}
