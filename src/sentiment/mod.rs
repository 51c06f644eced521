//! Headline sentiment aggregation for a single ticker.
//!
//! The dashboard scores every fetched headline that mentions the selected
//! ticker and reports the arithmetic mean polarity. Scoring itself sits
//! behind [`PolarityScorer`] so the built-in lexicon can be swapped for a
//! different scorer (or a test double) without touching the aggregation.

pub mod lexicon;

pub use lexicon::HeadlineLexicon;

use std::fmt;

/// Scalar polarity estimate for a piece of text, in [-1, 1].
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> f64;
}

/// Categorical reading of an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Pure function of the score: strictly positive is Positive, strictly
    /// negative is Negative, exactly zero is Neutral. The zero case also
    /// covers "no matching headlines", so an empty news day reads the same
    /// as perfectly balanced coverage.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Aggregate sentiment for one ticker, recomputed fresh every cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentScore {
    pub score: f64,
    pub label: SentimentLabel,
    /// How many headlines actually mentioned the ticker. Zero means the
    /// score is the neutral default rather than a measured value.
    pub matched_headlines: usize,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            matched_headlines: 0,
        }
    }
}

/// Mean polarity of the headlines mentioning `ticker`.
///
/// A headline matches when it contains the ticker symbol as a case-sensitive
/// substring ("AAPL" matches, "aapl" does not). Zero matches degrade to the
/// neutral default instead of failing.
pub fn score_ticker_sentiment(
    ticker: &str,
    headlines: &[&str],
    scorer: &dyn PolarityScorer,
) -> SentimentScore {
    let polarities: Vec<f64> = headlines
        .iter()
        .filter(|headline| headline.contains(ticker))
        .map(|headline| scorer.polarity(headline))
        .collect();

    if polarities.is_empty() {
        return SentimentScore::neutral();
    }

    let score = polarities.iter().sum::<f64>() / polarities.len() as f64;
    SentimentScore {
        score,
        label: SentimentLabel::from_score(score),
        matched_headlines: polarities.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Scorer returning canned polarities per exact headline.
    struct CannedScorer(HashMap<&'static str, f64>);

    impl PolarityScorer for CannedScorer {
        fn polarity(&self, text: &str) -> f64 {
            self.0.get(text).copied().unwrap_or(0.0)
        }
    }

    #[test]
    fn mean_of_matching_headline_polarities() {
        let scorer = CannedScorer(HashMap::from([
            ("AAPL surges on strong earnings", 0.8),
            ("AAPL faces lawsuit", -0.4),
        ]));
        let headlines = ["AAPL surges on strong earnings", "AAPL faces lawsuit"];

        let result = score_ticker_sentiment("AAPL", &headlines, &scorer);

        assert!((result.score - 0.2).abs() < 1e-12);
        assert_eq!(result.label, SentimentLabel::Positive);
        assert_eq!(result.matched_headlines, 2);
    }

    #[test]
    fn zero_matches_is_exactly_neutral() {
        let scorer = CannedScorer(HashMap::new());
        let headlines = ["Markets rally broadly", "Oil slips on demand fears"];

        let result = score_ticker_sentiment("TSLA", &headlines, &scorer);

        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.matched_headlines, 0);
    }

    #[test]
    fn matching_is_case_sensitive_substring() {
        let scorer = CannedScorer(HashMap::from([("aapl drifts lower", -0.5)]));
        let headlines = ["aapl drifts lower"];

        let result = score_ticker_sentiment("AAPL", &headlines, &scorer);
        assert_eq!(result.matched_headlines, 0);
        assert_eq!(result.label, SentimentLabel::Neutral);
    }

    #[test]
    fn label_boundaries() {
        assert_eq!(SentimentLabel::from_score(0.001), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.001), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn balanced_polarities_collapse_to_neutral() {
        let scorer = CannedScorer(HashMap::from([
            ("NVDA beats estimates", 0.6),
            ("NVDA hit by export probe", -0.6),
        ]));
        let headlines = ["NVDA beats estimates", "NVDA hit by export probe"];

        let result = score_ticker_sentiment("NVDA", &headlines, &scorer);

        // Indistinguishable from "no headlines" by design.
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.matched_headlines, 2);
    }
}
