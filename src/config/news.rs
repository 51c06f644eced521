//! News-source configuration.
//!
//! The API key is deliberately NOT configured here: it must arrive via the
//! CLI flag or the environment variable named below.

pub struct NewsConfig {
    pub base_url: &'static str,
    /// Category requested from the headline feed.
    pub category: &'static str,
    /// Environment variable consulted when no CLI flag is given.
    pub api_key_env: &'static str,
}

pub const NEWS: NewsConfig = NewsConfig {
    base_url: "https://finnhub.io/api/v1",
    category: "general",
    api_key_env: "FINNHUB_API_KEY",
};
