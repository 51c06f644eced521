//! Historical market-data retrieval.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::DateTime;
use yahoo_finance_api as yahoo;

use crate::config::MARKET;
use crate::domain::{PriceSeries, Timeframe};

/// Source of daily closing prices for one (ticker, timeframe) request.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn signature(&self) -> &'static str;

    async fn daily_closes(&self, ticker: &str, timeframe: Timeframe) -> Result<PriceSeries>;
}

/// Yahoo Finance implementation. A connector is built per request; the
/// dashboard runs one fetch cycle at a time so there is nothing to pool.
pub struct YahooFinance;

#[async_trait]
impl MarketDataProvider for YahooFinance {
    fn signature(&self) -> &'static str {
        "Yahoo Finance"
    }

    async fn daily_closes(&self, ticker: &str, timeframe: Timeframe) -> Result<PriceSeries> {
        let provider =
            yahoo::YahooConnector::new().context("failed to build Yahoo Finance connector")?;

        let response = provider
            .get_quote_range(ticker, MARKET.interval, timeframe.range_param())
            .await
            .with_context(|| {
                format!(
                    "quote request for {ticker} over {} failed",
                    timeframe.range_param()
                )
            })?;

        let mut quotes = response
            .quotes()
            .with_context(|| format!("malformed quote response for {ticker}"))?;
        quotes.sort_by_key(|quote| quote.timestamp);

        let mut series = PriceSeries::new(ticker, timeframe);
        for quote in quotes {
            // Quotes arrive stamped at the session open; the calendar date is
            // all the daily series keeps.
            let Some(stamp) = DateTime::from_timestamp(quote.timestamp as i64, 0) else {
                continue;
            };
            series.push(stamp.date_naive(), quote.close);
        }

        log::info!(
            "{}: {} daily closes for {} over {}",
            self.signature(),
            series.len(),
            ticker,
            timeframe.range_param()
        );
        Ok(series)
    }
}
