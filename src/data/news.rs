//! Headline retrieval from the Finnhub news endpoint.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::NEWS;

/// One news record. The feed returns more fields; only what the dashboard
/// reads is deserialized, and everything but the headline text is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Headline {
    pub headline: String,
    #[serde(default)]
    pub source: String,
    /// Publish time as a UNIX timestamp.
    #[serde(default)]
    pub datetime: i64,
}

/// Source of current market headlines.
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    fn signature(&self) -> &'static str;

    async fn latest_headlines(&self, category: &str) -> Result<Vec<Headline>>;
}

pub struct FinnhubNews {
    client: Client,
    api_key: String,
}

impl FinnhubNews {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl HeadlineSource for FinnhubNews {
    fn signature(&self) -> &'static str {
        "Finnhub"
    }

    async fn latest_headlines(&self, category: &str) -> Result<Vec<Headline>> {
        let url = format!(
            "{}/news?category={}&token={}",
            NEWS.base_url, category, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("news request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("news endpoint returned {status}: {body}");
        }

        let headlines: Vec<Headline> = response
            .json()
            .await
            .context("malformed news response")?;

        log::info!(
            "{}: {} headlines in category '{}'",
            self.signature(),
            headlines.len(),
            category
        );
        Ok(headlines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_feed_records_with_extra_fields() {
        let payload = r#"[
            {
                "category": "general",
                "datetime": 1726000000,
                "headline": "AAPL surges on strong earnings",
                "id": 1,
                "image": "",
                "related": "AAPL",
                "source": "Wire",
                "summary": "…",
                "url": "https://example.com/1"
            },
            {
                "headline": "Markets drift sideways"
            }
        ]"#;

        let headlines: Vec<Headline> = serde_json::from_str(payload).unwrap();
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].headline, "AAPL surges on strong earnings");
        assert_eq!(headlines[0].source, "Wire");
        assert_eq!(headlines[1].source, "");
        assert_eq!(headlines[1].datetime, 0);
    }

    #[test]
    fn record_without_headline_text_is_rejected() {
        let payload = r#"[{ "source": "Wire" }]"#;
        assert!(serde_json::from_str::<Vec<Headline>>(payload).is_err());
    }
}
