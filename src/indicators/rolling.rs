//! Trailing-window statistics over price slices.
//!
//! All functions return a vector exactly as long as the input, with
//! `f64::NAN` wherever the window is not yet fully populated. A NAN inside a
//! window propagates to the output, so a series with an undefined head keeps
//! that head undefined in every derived series.

use statrs::statistics::Statistics;

/// Arithmetic mean of the trailing `window` values; `out[i]` covers
/// `values[i + 1 - window ..= i]`.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }
    for i in (window - 1)..values.len() {
        out[i] = values[i + 1 - window..=i].mean();
    }
    out
}

/// Sample standard deviation (ddof = 1) of the trailing `window` values.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    if window < 2 || values.len() < window {
        return out;
    }
    for i in (window - 1)..values.len() {
        out[i] = values[i + 1 - window..=i].std_dev();
    }
    out
}

/// Day-over-day fractional change; `out[0]` is NAN because the first entry
/// has no prior close.
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    let mut out = vec![f64::NAN; values.len()];
    for i in 1..values.len() {
        out[i] = (values[i] - values[i - 1]) / values[i - 1];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn rolling_mean_defines_exactly_from_window_minus_one() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let means = rolling_mean(&values, 3);

        assert_eq!(means.len(), values.len());
        assert!(means[0].is_nan());
        assert!(means[1].is_nan());
        assert!((means[2] - 2.0).abs() < EPS);
        assert!((means[3] - 3.0).abs() < EPS);
        assert!((means[4] - 4.0).abs() < EPS);
    }

    #[test]
    fn window_larger_than_input_is_entirely_undefined() {
        let values = [10.0, 11.0];
        assert!(rolling_mean(&values, 5).iter().all(|v| v.is_nan()));
        assert!(rolling_std(&values, 5).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn rolling_std_is_sample_std() {
        // Sample std of [2, 4, 6] is sqrt(((2-4)^2 + 0 + (6-4)^2) / 2) = 2.
        let values = [2.0, 4.0, 6.0];
        let stds = rolling_std(&values, 3);
        assert!((stds[2] - 2.0).abs() < EPS);
    }

    #[test]
    fn rolling_std_of_constant_window_is_zero() {
        let values = [7.0; 6];
        let stds = rolling_std(&values, 4);
        for std in &stds[3..] {
            assert!(std.abs() < EPS);
        }
    }

    #[test]
    fn pct_change_starts_undefined() {
        let values = [100.0, 110.0, 99.0];
        let changes = pct_change(&values);

        assert!(changes[0].is_nan());
        assert!((changes[1] - 0.10).abs() < EPS);
        assert!((changes[2] - (-0.1)).abs() < EPS);
    }

    #[test]
    fn nan_inside_window_propagates() {
        let values = [f64::NAN, 2.0, 3.0, 4.0];
        let means = rolling_mean(&values, 2);

        assert!(means[1].is_nan(), "window touching the NAN head stays NAN");
        assert!((means[2] - 2.5).abs() < EPS);
    }
}
