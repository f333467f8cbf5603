//! Performance summary models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Headline performance figures for one portfolio, as of a given date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    /// Simple return on invested cost, percent
    pub roi: Decimal,
    /// Compound annual growth since inception, percent
    pub annualized_return: Decimal,
    /// Buy and sell transactions per year
    pub turnover_rate: Decimal,
    pub total_fees: Decimal,
    pub total_dividends: Decimal,
    /// Annualized dividends over current value, percent
    pub dividend_yield: Decimal,
}

impl PerformanceSummary {
    /// Rounds every figure to display precision.
    pub fn rounded(mut self) -> Self {
        self.roi = self.roi.round_dp(DISPLAY_DECIMAL_PRECISION);
        self.annualized_return = self.annualized_return.round_dp(DISPLAY_DECIMAL_PRECISION);
        self.turnover_rate = self.turnover_rate.round_dp(DISPLAY_DECIMAL_PRECISION);
        self.total_fees = self.total_fees.round_dp(DISPLAY_DECIMAL_PRECISION);
        self.total_dividends = self.total_dividends.round_dp(DISPLAY_DECIMAL_PRECISION);
        self.dividend_yield = self.dividend_yield.round_dp(DISPLAY_DECIMAL_PRECISION);
        self
    }
}
