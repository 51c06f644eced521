//! The indicator engine.
//!
//! Pure derivations over a close-price series: two moving averages, a
//! mean ± 2·sigma band pair over a 20-day window, and a simplified
//! relative-strength oscillator. Every output series has exactly the input
//! length, with `f64::NAN` marking positions that lack window history, and
//! the value at position `i` depends only on closes at positions `<= i`.

pub mod rolling;

use crate::domain::PriceSeries;
use rolling::{pct_change, rolling_mean, rolling_std};

pub const MA_SHORT_WINDOW: usize = 50;
pub const MA_LONG_WINDOW: usize = 200;
pub const BAND_WINDOW: usize = 20;
pub const BAND_WIDTH_SIGMA: f64 = 2.0;
pub const RSI_WINDOW: usize = 14;

/// Derived series for one price series, all the same length as the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSet {
    pub ma50: Vec<f64>,
    pub ma200: Vec<f64>,
    pub upper_band: Vec<f64>,
    pub lower_band: Vec<f64>,
    pub rsi: Vec<f64>,
}

impl IndicatorSet {
    pub fn compute(series: &PriceSeries) -> Self {
        Self::from_closes(&series.closes)
    }

    pub fn from_closes(closes: &[f64]) -> Self {
        let ma50 = rolling_mean(closes, MA_SHORT_WINDOW);
        let ma200 = rolling_mean(closes, MA_LONG_WINDOW);

        let m20 = rolling_mean(closes, BAND_WINDOW);
        let s20 = rolling_std(closes, BAND_WINDOW);
        let upper_band: Vec<f64> = m20
            .iter()
            .zip(&s20)
            .map(|(m, s)| m + BAND_WIDTH_SIGMA * s)
            .collect();
        let lower_band: Vec<f64> = m20
            .iter()
            .zip(&s20)
            .map(|(m, s)| m - BAND_WIDTH_SIGMA * s)
            .collect();

        // Simplified oscillator over the rolling mean of day-over-day
        // percentage changes. Deliberately NOT the Wilder mean-gain /
        // mean-loss RSI; the mean of signed changes feeds the formula
        // directly. pct_change[0] is NAN, so the first defined output sits at
        // index RSI_WINDOW, and a series shorter than 2 closes stays NAN
        // throughout.
        let mean_pct = rolling_mean(&pct_change(closes), RSI_WINDOW);
        let rsi: Vec<f64> = mean_pct.iter().map(|m| 100.0 - 100.0 / (1.0 + m)).collect();

        Self {
            ma50,
            ma200,
            upper_band,
            lower_band,
            rsi,
        }
    }

    pub fn len(&self) -> usize {
        self.ma50.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ma50.is_empty()
    }

    /// Most recent defined oscillator value, if any window ever filled.
    pub fn latest_rsi(&self) -> Option<f64> {
        self.rsi.iter().rev().copied().find(|v| !v.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// A gently trending series long enough to populate every window.
    fn trending_closes(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + (i as f64) * 0.5).collect()
    }

    #[test]
    fn every_series_matches_input_length() {
        for n in [0, 1, 13, 19, 49, 199, 260] {
            let set = IndicatorSet::from_closes(&trending_closes(n));
            assert_eq!(set.ma50.len(), n);
            assert_eq!(set.ma200.len(), n);
            assert_eq!(set.upper_band.len(), n);
            assert_eq!(set.lower_band.len(), n);
            assert_eq!(set.rsi.len(), n);
        }
    }

    #[test]
    fn ma50_is_undefined_then_exact() {
        let closes = trending_closes(60);
        let set = IndicatorSet::from_closes(&closes);

        for i in 0..49 {
            assert!(set.ma50[i].is_nan(), "ma50[{i}] should be undefined");
        }
        for i in 49..closes.len() {
            let expected: f64 = closes[i - 49..=i].iter().sum::<f64>() / 50.0;
            assert!(
                (set.ma50[i] - expected).abs() < EPS,
                "ma50[{i}] should be the mean of the last 50 closes"
            );
        }
    }

    #[test]
    fn band_spread_is_four_sigmas() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + ((i * 7) % 13) as f64).collect();
        let set = IndicatorSet::from_closes(&closes);
        let s20 = rolling_std(&closes, BAND_WINDOW);

        for i in 19..closes.len() {
            let spread = set.upper_band[i] - set.lower_band[i];
            assert!(
                (spread - 4.0 * s20[i]).abs() < EPS,
                "band spread at {i} should equal 4 * s20"
            );
        }
    }

    #[test]
    fn constant_series_collapses_bands_onto_the_mean() {
        let closes = vec![42.0; 30];
        let set = IndicatorSet::from_closes(&closes);

        for i in 19..closes.len() {
            assert!((set.upper_band[i] - 42.0).abs() < EPS);
            assert!((set.lower_band[i] - 42.0).abs() < EPS);
        }
    }

    #[test]
    fn rsi_reproduces_the_simplified_formula() {
        let closes = trending_closes(20);
        let set = IndicatorSet::from_closes(&closes);

        for i in 0..RSI_WINDOW {
            assert!(set.rsi[i].is_nan(), "rsi[{i}] should be undefined");
        }
        // Hand-computed check at the first defined index.
        let i = RSI_WINDOW;
        let mean_pct: f64 = (i - 13..=i)
            .map(|j| (closes[j] - closes[j - 1]) / closes[j - 1])
            .sum::<f64>()
            / 14.0;
        let expected = 100.0 - 100.0 / (1.0 + mean_pct);
        assert!((set.rsi[i] - expected).abs() < EPS);
    }

    #[test]
    fn fewer_than_two_closes_leaves_rsi_fully_undefined() {
        for closes in [vec![], vec![101.0]] {
            let set = IndicatorSet::from_closes(&closes);
            assert!(set.rsi.iter().all(|v| v.is_nan()));
            assert_eq!(set.latest_rsi(), None);
        }
    }

    #[test]
    fn latest_rsi_returns_last_defined_value() {
        let set = IndicatorSet::from_closes(&trending_closes(16));
        let latest = set.latest_rsi().expect("one defined rsi value");
        assert!((latest - set.rsi[15]).abs() < EPS);
    }
}
