#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod sentiment;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use domain::{PriceSeries, Timeframe};
pub use indicators::IndicatorSet;
pub use sentiment::{SentimentLabel, SentimentScore};
pub use ui::{DashboardApp, Services};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Finnhub API key; falls back to the FINNHUB_API_KEY environment variable
    #[arg(long)]
    pub news_api_key: Option<String>,
}

impl Cli {
    /// Resolve the news API key from the flag or the environment.
    pub fn resolve_news_api_key(&self) -> anyhow::Result<String> {
        if let Some(key) = &self.news_api_key {
            return Ok(key.clone());
        }
        std::env::var(config::NEWS.api_key_env).map_err(|_| {
            anyhow::anyhow!(
                "no news API key: pass --news-api-key or set {}",
                config::NEWS.api_key_env
            )
        })
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    services: Services,
    initial: ui::CycleOutput,
) -> Box<dyn eframe::App> {
    let app = DashboardApp::new(cc, services, initial);
    Box::new(app)
}
