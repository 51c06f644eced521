use eframe::{Frame, egui};
use poll_promise::Promise;
use std::fmt;
use std::sync::Arc;

use crate::data::market::MarketDataProvider;
use crate::data::news::HeadlineSource;
use crate::domain::{PriceSeries, Timeframe};
use crate::indicators::IndicatorSet;
use crate::sentiment::{PolarityScorer, SentimentScore};
use crate::ui::app_async::CycleOutput;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::panels::{Panel, SelectionChanged, SelectionPanel, SentimentPanel};
use crate::ui::plot_view;
use crate::ui::utils::setup_custom_visuals;

/// Error types for dashboard operations
#[derive(Debug, Clone)]
pub enum DashboardError {
    /// No price data came back for the selection
    DataNotAvailable,
    /// An external fetch failed; the message carries the provider error chain
    FetchFailed(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::DataNotAvailable => write!(f, "No data available"),
            DashboardError::FetchFailed(msg) => write!(f, "Fetch failed: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

/// Everything the most recent completed cycle produced.
#[derive(Default)]
pub struct DataState {
    pub series: Option<PriceSeries>,
    pub indicators: Option<IndicatorSet>,
    pub sentiment: Option<SentimentScore>,
    pub last_error: Option<DashboardError>,
}

/// Snapshot of the selection inputs of one cycle.
///
/// PartialEq drives change detection: a cycle runs when the current snapshot
/// differs from the last accepted (or last failed) one, and never reruns for
/// an identical snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionParams {
    pub ticker: String,
    pub timeframe: Timeframe,
}

/// Decides whether the current selection warrants a new fetch-and-recompute
/// cycle. Exactly one cycle runs per accepted selection: nothing starts while
/// one is in flight, and params that already completed or already failed do
/// not rerun until the selection changes.
pub fn should_start_cycle(
    current: &SelectionParams,
    last_completed: Option<&SelectionParams>,
    last_failed: Option<&SelectionParams>,
    in_flight: bool,
) -> bool {
    if in_flight {
        return false;
    }
    if last_completed == Some(current) || last_failed == Some(current) {
        return false;
    }
    true
}

/// External collaborators handed to the app once at startup. No ambient
/// globals: everything a cycle touches travels through this struct.
#[derive(Clone)]
pub struct Services {
    pub market: Arc<dyn MarketDataProvider>,
    pub news: Arc<dyn HeadlineSource>,
    pub scorer: Arc<dyn PolarityScorer>,
    pub runtime: tokio::runtime::Handle,
}

pub struct DashboardApp {
    // UI selection state
    pub(super) selected_ticker: String,
    pub(super) timeframe: Timeframe,

    // Data state from the last completed cycle
    pub(super) data_state: DataState,

    // External collaborators
    pub(super) services: Services,

    // In-flight cycle, at most one at a time
    pub(super) cycle_promise: Option<Promise<CycleOutput>>,

    // Change detection: last accepted and last failed selection snapshots
    pub(super) last_params: Option<SelectionParams>,
    pub(super) last_failed_params: Option<SelectionParams>,
}

impl DashboardApp {
    /// Build the app around an already-completed startup cycle so the first
    /// frame has data (or the startup error) to show.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        services: Services,
        initial: CycleOutput,
    ) -> Self {
        let mut app = Self {
            selected_ticker: initial.params.ticker.clone(),
            timeframe: initial.params.timeframe,
            data_state: DataState::default(),
            services,
            cycle_promise: None,
            last_params: None,
            last_failed_params: None,
        };
        app.apply_cycle_output(initial);
        app
    }

    pub(super) fn current_params(&self) -> SelectionParams {
        SelectionParams {
            ticker: self.selected_ticker.clone(),
            timeframe: self.timeframe,
        }
    }

    pub(super) fn apply_cycle_output(&mut self, output: CycleOutput) {
        match output.result {
            Ok(data) => {
                log::info!(
                    "cycle for {} over {} finished in {:?} ({} closes, {} matched headlines)",
                    output.params.ticker,
                    output.params.timeframe.range_param(),
                    output.elapsed,
                    data.series.len(),
                    data.sentiment.matched_headlines,
                );
                self.last_failed_params = None;
                self.last_params = Some(output.params);
                self.data_state = DataState {
                    series: Some(data.series),
                    indicators: Some(data.indicators),
                    sentiment: Some(data.sentiment),
                    last_error: None,
                };
            }
            Err(err) => {
                log::error!("cycle for {} failed: {}", output.params.ticker, err);
                self.last_failed_params = Some(output.params);
                self.data_state.last_error = Some(err);
            }
        }
    }

    fn maybe_start_cycle(&mut self) {
        let params = self.current_params();
        if should_start_cycle(
            &params,
            self.last_params.as_ref(),
            self.last_failed_params.as_ref(),
            self.cycle_promise.is_some(),
        ) {
            self.start_cycle(params);
        }
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls_panel").show(ctx, |ui| {
            let mut panel = SelectionPanel::new(self.selected_ticker.clone(), self.timeframe);
            for event in panel.render(ui) {
                match event {
                    SelectionChanged::Ticker(ticker) => self.selected_ticker = ticker,
                    SelectionChanged::Timeframe(timeframe) => self.timeframe = timeframe,
                }
            }
        });
    }

    fn render_status_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("sentiment_panel").show(ctx, |ui| {
            let latest_rsi = self
                .data_state
                .indicators
                .as_ref()
                .and_then(IndicatorSet::latest_rsi);
            let latest_close = self
                .data_state
                .series
                .as_ref()
                .and_then(PriceSeries::latest_close);
            SentimentPanel::new(
                self.data_state.sentiment.as_ref(),
                latest_rsi,
                latest_close,
                self.cycle_promise.is_some(),
            )
            .render(ui);
        });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.data_state.last_error {
                ui.colored_label(UI_CONFIG.colors.error, err.to_string());
            }

            match (&self.data_state.series, &self.data_state.indicators) {
                (Some(series), Some(indicators)) if !series.is_empty() => {
                    plot_view::show_price_plot(ui, series, indicators);
                }
                (Some(_), _) => {
                    ui.label(UI_TEXT.no_data);
                }
                _ => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(format!("{} for {}", UI_TEXT.fetching, self.selected_ticker));
                    });
                }
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_cycle(ctx);

        self.render_side_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        self.maybe_start_cycle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(ticker: &str, timeframe: Timeframe) -> SelectionParams {
        SelectionParams {
            ticker: ticker.to_string(),
            timeframe,
        }
    }

    #[test]
    fn timeframe_only_change_triggers_exactly_one_cycle() {
        let computed = params("AAPL", Timeframe::SixMonths);
        let current = params("AAPL", Timeframe::OneYear);

        // Timeframe changed while the ticker is held fixed: one cycle starts.
        assert!(should_start_cycle(&current, Some(&computed), None, false));

        // Once that cycle is accepted, the identical selection never reruns.
        assert!(!should_start_cycle(&current, Some(&current), None, false));
    }

    #[test]
    fn no_cycle_while_one_is_in_flight() {
        let current = params("MSFT", Timeframe::OneMonth);
        assert!(!should_start_cycle(&current, None, None, true));
    }

    #[test]
    fn failed_params_do_not_retry_without_a_change() {
        let failed = params("TSLA", Timeframe::FiveYears);
        assert!(!should_start_cycle(&failed, None, Some(&failed), false));

        // Changing any field of the selection re-enables the cycle.
        let changed = params("TSLA", Timeframe::OneMonth);
        assert!(should_start_cycle(&changed, None, Some(&failed), false));
    }

    #[test]
    fn fresh_selection_always_starts() {
        let current = params("NVDA", Timeframe::SixMonths);
        assert!(should_start_cycle(&current, None, None, false));
    }
}
