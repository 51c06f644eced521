// External service clients behind provider traits
pub mod market;
pub mod news;

// Re-export commonly used types
pub use market::{MarketDataProvider, YahooFinance};
pub use news::{FinnhubNews, Headline, HeadlineSource};
