use strum_macros::{Display, EnumIter};

/// The lookback window the user can select for a chart.
///
/// Variants map one-to-one onto the range strings the market-data provider
/// understands, so the selection can be forwarded without translation tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Timeframe {
    #[strum(serialize = "1 Month")]
    OneMonth,
    #[default]
    #[strum(serialize = "6 Months")]
    SixMonths,
    #[strum(serialize = "1 Year")]
    OneYear,
    #[strum(serialize = "5 Years")]
    FiveYears,
}

impl Timeframe {
    /// The provider-side range parameter for this timeframe.
    pub fn range_param(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "1mo",
            Timeframe::SixMonths => "6mo",
            Timeframe::OneYear => "1y",
            Timeframe::FiveYears => "5y",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn range_params_are_provider_range_strings() {
        let params: Vec<&str> = Timeframe::iter().map(|tf| tf.range_param()).collect();
        assert_eq!(params, vec!["1mo", "6mo", "1y", "5y"]);
    }

    #[test]
    fn default_timeframe_is_six_months() {
        assert_eq!(Timeframe::default(), Timeframe::SixMonths);
    }

    #[test]
    fn display_labels_are_human_readable() {
        assert_eq!(Timeframe::OneMonth.to_string(), "1 Month");
        assert_eq!(Timeframe::FiveYears.to_string(), "5 Years");
    }
}
