//! Risk profile domain models.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Owner risk tolerance tier, most to least cautious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Balanced,
    Growth,
    Aggressive,
}

impl RiskTolerance {
    pub const fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "CONSERVATIVE",
            RiskTolerance::Moderate => "MODERATE",
            RiskTolerance::Balanced => "BALANCED",
            RiskTolerance::Growth => "GROWTH",
            RiskTolerance::Aggressive => "AGGRESSIVE",
        }
    }

    fn score_adjustment(&self) -> i32 {
        match self {
            RiskTolerance::Conservative => -2,
            RiskTolerance::Moderate => -1,
            RiskTolerance::Balanced => 0,
            RiskTolerance::Growth => 1,
            RiskTolerance::Aggressive => 2,
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One owner's investment risk profile.
///
/// The 1-10 risk score is derived from tolerance, age, and horizon on every
/// read, so a profile mutation can never leave a stale score behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    tolerance: RiskTolerance,
    age: u32,
    horizon_years: u32,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    annual_income: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    liquidity_needs: Option<Decimal>,
}

impl RiskProfile {
    pub fn new(tolerance: RiskTolerance, age: u32, horizon_years: u32) -> Self {
        Self {
            tolerance,
            age,
            horizon_years,
            annual_income: None,
            liquidity_needs: None,
        }
    }

    pub fn with_finances(
        tolerance: RiskTolerance,
        age: u32,
        horizon_years: u32,
        annual_income: Decimal,
        liquidity_needs: Decimal,
    ) -> Self {
        Self {
            tolerance,
            age,
            horizon_years,
            annual_income: Some(annual_income),
            liquidity_needs: Some(liquidity_needs),
        }
    }

    pub fn tolerance(&self) -> RiskTolerance {
        self.tolerance
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn horizon_years(&self) -> u32 {
        self.horizon_years
    }

    pub fn annual_income(&self) -> Option<Decimal> {
        self.annual_income
    }

    pub fn liquidity_needs(&self) -> Option<Decimal> {
        self.liquidity_needs
    }

    pub fn set_tolerance(&mut self, tolerance: RiskTolerance) {
        self.tolerance = tolerance;
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn set_horizon_years(&mut self, years: u32) {
        self.horizon_years = years;
    }

    pub fn set_annual_income(&mut self, income: Decimal) {
        self.annual_income = Some(income);
    }

    pub fn set_liquidity_needs(&mut self, needs: Decimal) {
        self.liquidity_needs = Some(needs);
    }

    /// Target risk on a 1-10 scale.
    ///
    /// Base 5, adjusted by tolerance tier, age band, and investment horizon.
    pub fn risk_score(&self) -> i32 {
        let mut score = 5;

        score += self.tolerance.score_adjustment();

        // Younger owners carry more risk capacity
        if self.age < 30 {
            score += 1;
        } else if self.age > 60 {
            score -= 2;
        } else if self.age > 50 {
            score -= 1;
        }

        if self.horizon_years > 15 {
            score += 1;
        } else if self.horizon_years < 5 {
            score -= 1;
        }

        score.clamp(1, 10)
    }

    /// Recommended equity share (0-1) as a pure function of tolerance.
    pub fn recommended_stock_allocation(&self) -> Decimal {
        match self.tolerance {
            RiskTolerance::Conservative => dec!(0.20),
            RiskTolerance::Moderate => dec!(0.40),
            RiskTolerance::Balanced => dec!(0.60),
            RiskTolerance::Growth => dec!(0.75),
            RiskTolerance::Aggressive => dec!(0.90),
        }
    }

    /// Recommended bond share (0-1), the complement of the equity share.
    pub fn recommended_bond_allocation(&self) -> Decimal {
        Decimal::ONE - self.recommended_stock_allocation()
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Risk Profile: {} (Score: {}/10) | Age: {} | Horizon: {} years | \
             Recommended Allocation: {:.0}% Stocks, {:.0}% Bonds",
            self.tolerance,
            self.risk_score(),
            self.age,
            self.horizon_years,
            self.recommended_stock_allocation() * dec!(100),
            self.recommended_bond_allocation() * dec!(100)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_score_combines_tolerance_age_and_horizon() {
        // Base 5 +2 aggressive +1 young +1 long horizon
        let profile = RiskProfile::new(RiskTolerance::Aggressive, 25, 20);
        assert_eq!(profile.risk_score(), 9);

        // Base 5 -2 conservative -2 over sixty -1 short horizon, clamped up to 1
        let profile = RiskProfile::new(RiskTolerance::Conservative, 70, 2);
        assert_eq!(profile.risk_score(), 1);

        // Ages 51-60 shave a single point
        let profile = RiskProfile::new(RiskTolerance::Balanced, 55, 10);
        assert_eq!(profile.risk_score(), 4);
    }

    #[test]
    fn risk_score_tracks_every_mutation() {
        let mut profile = RiskProfile::new(RiskTolerance::Balanced, 40, 10);
        assert_eq!(profile.risk_score(), 5);

        profile.set_tolerance(RiskTolerance::Aggressive);
        assert_eq!(profile.risk_score(), 7);

        profile.set_age(65);
        assert_eq!(profile.risk_score(), 5);

        profile.set_horizon_years(3);
        assert_eq!(profile.risk_score(), 4);
    }

    #[test]
    fn risk_score_stays_within_bounds() {
        let profile = RiskProfile::new(RiskTolerance::Aggressive, 20, 30);
        assert_eq!(profile.risk_score(), 9);

        let profile = RiskProfile::new(RiskTolerance::Conservative, 80, 1);
        assert_eq!(profile.risk_score(), 1);
    }

    #[test]
    fn recommended_split_is_a_pure_function_of_tolerance() {
        let cases = [
            (RiskTolerance::Conservative, dec!(0.20)),
            (RiskTolerance::Moderate, dec!(0.40)),
            (RiskTolerance::Balanced, dec!(0.60)),
            (RiskTolerance::Growth, dec!(0.75)),
            (RiskTolerance::Aggressive, dec!(0.90)),
        ];
        for (tolerance, stocks) in cases {
            let profile = RiskProfile::new(tolerance, 40, 10);
            assert_eq!(profile.recommended_stock_allocation(), stocks);
            assert_eq!(
                profile.recommended_bond_allocation(),
                Decimal::ONE - stocks
            );
        }
    }
}
