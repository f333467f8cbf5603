//! Rebalancing recommendation models.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetKind;

/// Direction of a rebalancing trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RebalanceAction {
    Buy,
    Sell,
}

impl fmt::Display for RebalanceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RebalanceAction::Buy => "BUY",
            RebalanceAction::Sell => "SELL",
        })
    }
}

/// One bucket's drift past the threshold, and what to do about it.
///
/// The dollar amount keeps the sign of the drift (positive when overweight);
/// displays use its magnitude.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRecommendation {
    pub asset_kind: AssetKind,
    pub action: RebalanceAction,
    /// Current share of total value, percent
    pub current_allocation: Decimal,
    /// Target share of total value, percent
    pub target_allocation: Decimal,
    /// Signed drift in dollars
    pub dollar_amount: Decimal,
    pub reason: String,
}

impl RebalanceRecommendation {
    /// Percentage points between current and target, absolute.
    pub fn drift(&self) -> Decimal {
        (self.current_allocation - self.target_allocation).abs()
    }
}

impl fmt::Display for RebalanceRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} ${:.2} (Current: {:.1}% -> Target: {:.1}%) - {}",
            self.action,
            self.asset_kind,
            match self.action {
                RebalanceAction::Buy => "+",
                RebalanceAction::Sell => "-",
            },
            self.dollar_amount.abs(),
            self.current_allocation,
            self.target_allocation,
            self.reason
        )
    }
}

/// Urgency of acting on the recommendation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RebalancePriority {
    /// No recommendations at all
    WellBalanced,
    Low,
    Medium,
    High,
}

impl fmt::Display for RebalancePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RebalancePriority::WellBalanced => "LOW - Portfolio is well balanced",
            RebalancePriority::Low => "LOW - Minor rebalancing recommended",
            RebalancePriority::Medium => "MEDIUM - Multiple allocations need adjustment",
            RebalancePriority::High => "HIGH - Significant allocation drift detected",
        };
        f.write_str(msg)
    }
}
