//! Risk assessment models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the portfolio's risk compares with the owner's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskAlignment {
    WellAligned,
    ModerateAlignment,
    TooRisky,
    TooConservative,
}

impl fmt::Display for RiskAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RiskAlignment::WellAligned => {
                "WELL ALIGNED - Portfolio risk matches your risk profile"
            }
            RiskAlignment::ModerateAlignment => {
                "MODERATE ALIGNMENT - Portfolio risk is close to your target"
            }
            RiskAlignment::TooRisky => {
                "TOO RISKY - Portfolio has more risk than recommended for your profile"
            }
            RiskAlignment::TooConservative => {
                "TOO CONSERVATIVE - Portfolio is less risky than your profile allows"
            }
        };
        f.write_str(msg)
    }
}

/// The full set of risk figures for one portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    /// Allocation-weighted heuristic beta
    pub beta: Decimal,
    /// 0-10, derived from beta
    pub volatility_score: i32,
    /// 0-10, higher is better spread
    pub diversification_score: i32,
    /// 0-10, volatility dampened by diversification
    pub overall_risk_score: i32,
}
