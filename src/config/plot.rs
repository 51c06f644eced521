//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub close_color: Color32,
    pub upper_band_color: Color32,
    pub lower_band_color: Color32,
    pub ma50_color: Color32,
    pub ma200_color: Color32,
    /// Width of the close-price line
    pub close_line_width: f32,
    /// Width of the indicator overlay lines
    pub indicator_line_width: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    close_color: Color32::from_rgb(255, 215, 0),      // Gold
    upper_band_color: Color32::from_rgb(200, 0, 0),   // Red
    lower_band_color: Color32::from_rgb(0, 200, 0),   // Green
    ma50_color: Color32::from_rgb(0, 191, 255),       // Deep sky blue
    ma200_color: Color32::from_rgb(180, 160, 230),    // Lavender
    close_line_width: 2.5,
    indicator_line_width: 1.5,
};
