pub mod price_series;
pub mod timeframe;

// Re-export commonly used types
pub use price_series::PriceSeries;
pub use timeframe::Timeframe;
