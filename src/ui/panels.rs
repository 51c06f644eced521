use eframe::egui::{RichText, ScrollArea, Ui};
use strum::IntoEnumIterator;

use crate::config::MARKET;
use crate::domain::Timeframe;
use crate::sentiment::{SentimentLabel, SentimentScore};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::utils::{colored_subsection_heading, format_price, section_heading, spaced_separator};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug)]
pub enum SelectionChanged {
    Ticker(String),
    Timeframe(Timeframe),
}

/// Panel with the two dashboard controls: ticker list and timeframe row.
pub struct SelectionPanel {
    selected_ticker: String,
    timeframe: Timeframe,
}

impl SelectionPanel {
    pub fn new(selected_ticker: String, timeframe: Timeframe) -> Self {
        Self {
            selected_ticker,
            timeframe,
        }
    }

    fn render_ticker_selector(&mut self, ui: &mut Ui) -> Option<String> {
        let mut changed = None;

        ui.label(colored_subsection_heading(UI_TEXT.ticker_heading));
        ScrollArea::vertical()
            .max_height(UI_CONFIG.ticker_list_max_height)
            .id_salt("ticker_selector")
            .show(ui, |ui| {
                for ticker in MARKET.tickers {
                    let is_selected = self.selected_ticker == ticker;
                    if ui.selectable_label(is_selected, ticker).clicked() && !is_selected {
                        self.selected_ticker = ticker.to_string();
                        changed = Some(ticker.to_string());
                    }
                }
            });

        changed
    }

    fn render_timeframe_selector(&mut self, ui: &mut Ui) -> Option<Timeframe> {
        let mut changed = None;

        ui.label(colored_subsection_heading(UI_TEXT.timeframe_heading));
        ui.horizontal(|ui| {
            for timeframe in Timeframe::iter() {
                if ui
                    .selectable_value(&mut self.timeframe, timeframe, timeframe.to_string())
                    .changed()
                {
                    changed = Some(timeframe);
                }
            }
        });

        changed
    }
}

impl Panel for SelectionPanel {
    type Event = SelectionChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.controls_heading);

        if let Some(ticker) = self.render_ticker_selector(ui) {
            log::info!("ticker selection changed to {ticker}");
            events.push(SelectionChanged::Ticker(ticker));
        }
        spaced_separator(ui);

        if let Some(timeframe) = self.render_timeframe_selector(ui) {
            log::info!("timeframe selection changed to {}", timeframe.range_param());
            events.push(SelectionChanged::Timeframe(timeframe));
        }
        ui.add_space(20.0);

        events
    }
}

/// Read-only panel with the sentiment line and latest indicator readings.
pub struct SentimentPanel<'a> {
    sentiment: Option<&'a SentimentScore>,
    latest_rsi: Option<f64>,
    latest_close: Option<f64>,
    in_flight: bool,
}

impl<'a> SentimentPanel<'a> {
    pub fn new(
        sentiment: Option<&'a SentimentScore>,
        latest_rsi: Option<f64>,
        latest_close: Option<f64>,
        in_flight: bool,
    ) -> Self {
        Self {
            sentiment,
            latest_rsi,
            latest_close,
            in_flight,
        }
    }

    fn sentiment_line(score: &SentimentScore) -> (eframe::egui::Color32, String) {
        let color = match score.label {
            SentimentLabel::Positive => UI_CONFIG.colors.sentiment_positive,
            SentimentLabel::Negative => UI_CONFIG.colors.sentiment_negative,
            SentimentLabel::Neutral => UI_CONFIG.colors.sentiment_neutral,
        };
        let mut line = format!("{} {:.2} ({})", UI_TEXT.sentiment_prefix, score.score, score.label);
        if score.matched_headlines == 0 {
            line.push_str(&format!(" [{}]", UI_TEXT.sentiment_no_match));
        }
        (color, line)
    }
}

impl Panel for SentimentPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        section_heading(ui, UI_TEXT.sentiment_heading);

        if let Some(score) = self.sentiment {
            let (color, line) = Self::sentiment_line(score);
            ui.label(RichText::new(line).color(color));
        } else if self.in_flight {
            ui.label(RichText::new(UI_TEXT.fetching).color(UI_CONFIG.colors.label));
        }

        ui.horizontal(|ui| {
            match self.latest_rsi {
                Some(rsi) => ui.label(format!("{} {rsi:.1}", UI_TEXT.rsi_prefix)),
                None => ui.label(format!("{} {}", UI_TEXT.rsi_prefix, UI_TEXT.rsi_no_history)),
            };
            if let Some(close) = self.latest_close {
                ui.separator();
                ui.label(format!("{} {}", UI_TEXT.last_close_prefix, format_price(close)));
            }
        });
        ui.add_space(10.0);

        Vec::new()
    }
}
