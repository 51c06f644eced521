//! A small financial-news polarity lexicon.
//!
//! Word-level scores in [-1, 1] with a short negation window: "not" before a
//! scored word flips its contribution with some damping. The headline score
//! is the mean of matched word scores, clamped to [-1, 1]; headlines with no
//! lexicon word score 0.0.

use std::collections::HashMap;

use crate::sentiment::PolarityScorer;

/// Words ahead of a negation that still get flipped.
const NEGATION_WINDOW: usize = 3;

/// Damping applied when a negation flips a word score.
const NEGATION_DAMPING: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct HeadlineLexicon {
    scores: HashMap<&'static str, f64>,
}

impl HeadlineLexicon {
    pub fn new() -> Self {
        let entries: &[(&'static str, f64)] = &[
            // Positive
            ("surge", 0.8),
            ("surges", 0.8),
            ("soars", 0.85),
            ("soar", 0.85),
            ("rally", 0.8),
            ("rallies", 0.8),
            ("jumps", 0.7),
            ("jump", 0.7),
            ("gains", 0.7),
            ("gain", 0.7),
            ("beats", 0.7),
            ("beat", 0.7),
            ("strong", 0.6),
            ("record", 0.6),
            ("growth", 0.6),
            ("profit", 0.7),
            ("profits", 0.7),
            ("upgrade", 0.7),
            ("upgraded", 0.7),
            ("bullish", 0.8),
            ("wins", 0.6),
            ("win", 0.6),
            ("approval", 0.6),
            ("expands", 0.5),
            ("great", 0.7),
            ("amazing", 0.8),
            // Negative
            ("plunge", -0.85),
            ("plunges", -0.85),
            ("crash", -0.9),
            ("crashes", -0.9),
            ("slump", -0.75),
            ("slumps", -0.75),
            ("falls", -0.6),
            ("fall", -0.6),
            ("drops", -0.6),
            ("drop", -0.6),
            ("miss", -0.7),
            ("misses", -0.7),
            ("weak", -0.6),
            ("loss", -0.7),
            ("losses", -0.7),
            ("lawsuit", -0.6),
            ("downgrade", -0.7),
            ("downgraded", -0.7),
            ("bearish", -0.8),
            ("recall", -0.6),
            ("fraud", -0.9),
            ("probe", -0.5),
            ("investigation", -0.6),
            ("layoffs", -0.7),
            ("bankruptcy", -0.95),
            ("warns", -0.5),
            ("warning", -0.5),
            ("fears", -0.6),
            ("cuts", -0.5),
            ("delays", -0.4),
        ];

        Self {
            scores: entries.iter().copied().collect(),
        }
    }
}

impl Default for HeadlineLexicon {
    fn default() -> Self {
        Self::new()
    }
}

const NEGATIONS: &[&str] = &["not", "no", "never", "without"];

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token)
}

impl PolarityScorer for HeadlineLexicon {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        let mut total = 0.0;
        let mut matched = 0usize;
        let mut words_since_negation = usize::MAX;

        for token in tokens {
            if is_negation(&token) {
                words_since_negation = 0;
                continue;
            }

            if let Some(base) = self.scores.get(token.as_str()) {
                let score = if words_since_negation < NEGATION_WINDOW {
                    -base * NEGATION_DAMPING
                } else {
                    *base
                };
                total += score;
                matched += 1;
            }

            words_since_negation = words_since_negation.saturating_add(1);
        }

        if matched == 0 {
            return 0.0;
        }
        (total / matched as f64).clamp(-1.0, 1.0)
    }
}
