#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use std::sync::Arc;
use tokio::runtime::Runtime;

use stock_scope::config::MARKET;
use stock_scope::data::{FinnhubNews, YahooFinance};
use stock_scope::sentiment::HeadlineLexicon;
use stock_scope::ui::{SelectionParams, run_cycle_blocking};
use stock_scope::{Cli, Services, Timeframe, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    let api_key = match args.resolve_news_api_key() {
        Ok(key) => key,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    };

    // C. Wire Services
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let services = Services {
        market: Arc::new(YahooFinance),
        news: Arc::new(FinnhubNews::new(api_key)),
        scorer: Arc::new(HeadlineLexicon::new()),
        runtime: rt.handle().clone(),
    };

    // D. Startup Fetch (Blocking, so the first frame has data)
    let initial_params = SelectionParams {
        ticker: MARKET.tickers[0].to_string(),
        timeframe: Timeframe::default(),
    };
    let initial = run_cycle_blocking(&services, initial_params);

    // E. Run Native App
    let options = NativeOptions::default();
    eframe::run_native(
        "Stock Scope",
        options,
        Box::new(move |cc| Ok(run_app(cc, services, initial))),
    )
}
