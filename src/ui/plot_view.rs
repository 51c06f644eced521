//! Price/indicator overlay chart.

use eframe::egui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints};

use chrono::NaiveDate;

use crate::config::PLOT_CONFIG;
use crate::domain::PriceSeries;
use crate::indicators::IndicatorSet;
use crate::ui::config::UI_TEXT;
use crate::utils::time_utils::{date_to_plot_x, plot_x_label};

/// Pair each defined value with its date's x-coordinate, skipping the NAN
/// head of a windowed series so lines start where the window first fills.
fn dated_points(dates: &[NaiveDate], values: &[f64]) -> Vec<[f64; 2]> {
    dates
        .iter()
        .zip(values)
        .filter(|(_, value)| !value.is_nan())
        .map(|(date, value)| [date_to_plot_x(*date), *value])
        .collect()
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x().formatter(|grid_mark, _range| plot_x_label(grid_mark.value))
}

fn create_y_axis(ticker: &str) -> AxisHints<'static> {
    let label = format!("{}  {}", ticker, UI_TEXT.plot_y_axis);
    AxisHints::new_y()
        .label(label)
        .formatter(|grid_mark, _range| format!("${:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}

/// Render the overlay chart: close price plus the four band/average lines.
pub fn show_price_plot(ui: &mut egui::Ui, series: &PriceSeries, indicators: &IndicatorSet) {
    let legend = Legend::default().position(Corner::RightTop);

    Plot::new("price_plot")
        .legend(legend)
        .custom_x_axes(vec![create_x_axis()])
        .custom_y_axes(vec![create_y_axis(&series.ticker)])
        .label_formatter(|name, point| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{name}\n{}  ${:.2}", plot_x_label(point.x), point.y)
            }
        })
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            let overlays = [
                ("Upper Band", &indicators.upper_band, PLOT_CONFIG.upper_band_color),
                ("Lower Band", &indicators.lower_band, PLOT_CONFIG.lower_band_color),
                ("MA50", &indicators.ma50, PLOT_CONFIG.ma50_color),
                ("MA200", &indicators.ma200, PLOT_CONFIG.ma200_color),
            ];
            for (name, values, color) in overlays {
                let points = dated_points(&series.dates, values);
                if points.is_empty() {
                    continue;
                }
                plot_ui.line(
                    Line::new(name, PlotPoints::new(points))
                        .color(color)
                        .width(PLOT_CONFIG.indicator_line_width),
                );
            }

            // Close on top of the overlays
            plot_ui.line(
                Line::new("Close", PlotPoints::new(dated_points(&series.dates, &series.closes)))
                    .color(PLOT_CONFIG.close_color)
                    .width(PLOT_CONFIG.close_line_width),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(n: usize) -> Vec<NaiveDate> {
        (0..n)
            .map(|i| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64))
            .collect()
    }

    #[test]
    fn dated_points_skips_undefined_head() {
        let dates = dates(4);
        let values = [f64::NAN, f64::NAN, 10.0, 11.0];

        let points = dated_points(&dates, &values);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0][0], date_to_plot_x(dates[2]));
        assert_eq!(points[0][1], 10.0);
    }

    #[test]
    fn fully_undefined_series_yields_no_points() {
        let dates = dates(3);
        let values = [f64::NAN; 3];
        assert!(dated_points(&dates, &values).is_empty());
    }

    #[test]
    fn x_coordinates_ascend_with_dates() {
        let dates = dates(5);
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let points = dated_points(&dates, &values);
        assert!(points.windows(2).all(|w| w[0][0] < w[1][0]));
    }
}
