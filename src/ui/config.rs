use eframe::egui::Color32;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub sentiment_positive: Color32,
    pub sentiment_negative: Color32,
    pub sentiment_neutral: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub ticker_list_max_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(20, 24, 32),
        side_panel: Color32::from_rgb(25, 25, 25),
        sentiment_positive: Color32::from_rgb(130, 200, 140),
        sentiment_negative: Color32::from_rgb(220, 120, 120),
        sentiment_neutral: Color32::from_rgb(160, 160, 160),
        error: Color32::from_rgb(220, 120, 120),
    },
    ticker_list_max_height: 320.0,
};

/// All user-facing strings in one place.
pub struct UiText {
    pub controls_heading: &'static str,
    pub ticker_heading: &'static str,
    pub timeframe_heading: &'static str,
    pub sentiment_heading: &'static str,
    pub sentiment_prefix: &'static str,
    pub sentiment_no_match: &'static str,
    pub rsi_prefix: &'static str,
    pub rsi_no_history: &'static str,
    pub last_close_prefix: &'static str,
    pub fetching: &'static str,
    pub no_data: &'static str,
    pub plot_y_axis: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    controls_heading: "Stock Tracker",
    ticker_heading: "Select Stock",
    timeframe_heading: "Select Timeframe",
    sentiment_heading: "Market Sentiment",
    sentiment_prefix: "Sentiment Score:",
    sentiment_no_match: "no matching headlines",
    rsi_prefix: "RSI(14):",
    rsi_no_history: "insufficient history",
    last_close_prefix: "Last close:",
    fetching: "Fetching data",
    no_data: "No price data for this selection",
    plot_y_axis: "Close",
};
