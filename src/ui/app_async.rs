//! The fetch-and-recompute cycle behind each selection change.
//!
//! A cycle fetches prices and headlines concurrently, derives the indicator
//! set and the sentiment score, and hands everything back to the GUI thread
//! through a [`Promise`]. The GUI polls the promise each frame and never
//! blocks on the network.

use anyhow::Result;
use poll_promise::Promise;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::NEWS;
use crate::domain::PriceSeries;
use crate::indicators::IndicatorSet;
use crate::sentiment::{SentimentScore, score_ticker_sentiment};
use crate::ui::app::{DashboardApp, DashboardError, SelectionParams, Services};

/// Derived data of one completed cycle.
#[derive(Debug)]
pub struct CycleData {
    pub series: PriceSeries,
    pub indicators: IndicatorSet,
    pub sentiment: SentimentScore,
}

/// What a cycle hands back to the GUI thread, success or failure.
pub struct CycleOutput {
    pub params: SelectionParams,
    pub result: Result<CycleData, DashboardError>,
    pub elapsed: Duration,
}

/// Run one full cycle on the calling thread. Used by the worker thread and
/// for the pre-GUI startup fetch.
pub fn run_cycle_blocking(services: &Services, params: SelectionParams) -> CycleOutput {
    let started = Instant::now();
    let result = services
        .runtime
        .block_on(run_cycle(services, &params))
        .map_err(|err| DashboardError::FetchFailed(format!("{err:#}")));
    CycleOutput {
        params,
        result,
        elapsed: started.elapsed(),
    }
}

async fn run_cycle(services: &Services, params: &SelectionParams) -> Result<CycleData> {
    let (series, headlines) = tokio::join!(
        services.market.daily_closes(&params.ticker, params.timeframe),
        services.news.latest_headlines(NEWS.category),
    );
    let series = series?;
    let headlines = headlines?;

    let indicators = IndicatorSet::compute(&series);
    let texts: Vec<&str> = headlines.iter().map(|h| h.headline.as_str()).collect();
    let sentiment = score_ticker_sentiment(&params.ticker, &texts, services.scorer.as_ref());

    Ok(CycleData {
        series,
        indicators,
        sentiment,
    })
}

impl DashboardApp {
    /// Spawn a worker thread for one cycle. Callers must have already checked
    /// that no cycle is in flight.
    pub(super) fn start_cycle(&mut self, params: SelectionParams) {
        if self.cycle_promise.is_some() {
            return;
        }
        log::info!(
            "starting cycle for {} over {} via {}",
            params.ticker,
            params.timeframe.range_param(),
            self.services.market.signature(),
        );
        let services = self.services.clone();
        self.cycle_promise = Some(Promise::spawn_thread("fetch_cycle", move || {
            run_cycle_blocking(&services, params)
        }));
    }

    /// Poll the in-flight cycle, applying its output once ready. While it
    /// runs, keep repainting so the spinner animates and completion is
    /// noticed promptly.
    pub(super) fn poll_cycle(&mut self, ctx: &egui::Context) {
        if let Some(promise) = self.cycle_promise.take() {
            match promise.try_take() {
                Ok(output) => self.apply_cycle_output(output),
                Err(promise) => {
                    self.cycle_promise = Some(promise);
                    ctx.request_repaint_after(Duration::from_millis(100));
                }
            }
        }
    }
}
