use chrono::NaiveDate;

use crate::domain::Timeframe;

/// Daily closing prices for one (ticker, timeframe) request.
///
/// Column layout: `dates[i]` and `closes[i]` describe the same trading day,
/// ordered ascending by date. The provider decides the trading calendar, so
/// weekends and holidays are simply absent rather than gaps. A series is
/// immutable once fetched; a new selection produces a new series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub ticker: String,
    pub timeframe: Timeframe,
    pub dates: Vec<NaiveDate>,
    pub closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(ticker: impl Into<String>, timeframe: Timeframe) -> Self {
        Self {
            ticker: ticker.into(),
            timeframe,
            dates: Vec::new(),
            closes: Vec::new(),
        }
    }

    /// Append one trading day. Callers must push in ascending date order.
    pub fn push(&mut self, date: NaiveDate, close: f64) {
        debug_assert!(
            self.dates.last().is_none_or(|last| *last < date),
            "price series must stay ascending by date"
        );
        self.dates.push(date);
        self.closes.push(close);
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn latest_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn push_keeps_columns_parallel() {
        let mut series = PriceSeries::new("AAPL", Timeframe::OneMonth);
        series.push(day(2), 185.5);
        series.push(day(3), 186.2);

        assert_eq!(series.len(), 2);
        assert_eq!(series.dates.len(), series.closes.len());
        assert_eq!(series.latest_close(), Some(186.2));
    }

    #[test]
    fn empty_series_has_no_latest_close() {
        let series = PriceSeries::new("MSFT", Timeframe::OneYear);
        assert!(series.is_empty());
        assert_eq!(series.latest_close(), None);
    }
}
