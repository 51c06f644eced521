//! Date helpers shared between the data layer and the plot axis.
//!
//! Plot x-coordinates are whole days since the Common Era (chrono's
//! `num_days_from_ce`), which keeps the axis formatter a pure function of the
//! coordinate with no captured state.

use chrono::{Datelike, NaiveDate};

/// Convert a calendar date to its plot x-coordinate.
pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Convert a plot x-coordinate back to a calendar date.
/// Returns `None` for coordinates outside chrono's representable range.
pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Axis label for a plot x-coordinate, e.g. `2024-03-18`.
pub fn plot_x_label(x: f64) -> String {
    plot_x_to_date(x)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_roundtrips_through_plot_coordinate() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 18).unwrap();
        let x = date_to_plot_x(date);
        assert_eq!(plot_x_to_date(x), Some(date));
    }

    #[test]
    fn label_formats_as_iso_date() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(plot_x_label(date_to_plot_x(date)), "2023-12-01");
    }

    #[test]
    fn out_of_range_coordinate_yields_empty_label() {
        assert_eq!(plot_x_label(f64::MAX), "");
    }
}
