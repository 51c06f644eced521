//! Configuration module for the dashboard.

pub mod market;
pub mod news;
pub mod plot;

// Re-export commonly used items
pub use market::MARKET;
pub use news::NEWS;
pub use plot::PLOT_CONFIG;
