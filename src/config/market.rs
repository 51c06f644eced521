//! Market-data configuration.

pub struct MarketConfig {
    /// Fixed selector list: top 20 US equities by market cap.
    pub tickers: [&'static str; 20],
    /// Bar width requested from the provider; the provider's trading
    /// calendar decides which days actually exist.
    pub interval: &'static str,
}

pub const MARKET: MarketConfig = MarketConfig {
    tickers: [
        "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NVDA", "BRK-B", "META", "V", "JNJ", "WMT",
        "JPM", "PG", "UNH", "HD", "DIS", "PYPL", "VZ", "NFLX", "LCID",
    ],
    interval: "1d",
};
