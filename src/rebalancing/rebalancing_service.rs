//! Rebalancing recommendations against a profile-derived target.
//!
//! The engine only reports. Nothing here places trades or mutates the
//! portfolio; acting on a recommendation is the caller's business.

use std::collections::HashMap;
use std::fmt::Write as _;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, AssetKind};
use crate::portfolio::allocation::asset_allocation;
use crate::portfolio::Portfolio;
use crate::profiles::RiskProfile;

use super::{RebalanceAction, RebalancePriority, RebalanceRecommendation};

/// Drift below this many percentage points is left alone.
const DRIFT_THRESHOLD: Decimal = dec!(5);

/// Drift past this many points makes the whole rebalance high priority.
const HIGH_PRIORITY_DRIFT: Decimal = dec!(15);

/// Fixed cash buffer target, percent.
const CASH_TARGET: Decimal = dec!(5);

/// Loss percentage below which a position becomes a harvesting candidate.
const HARVEST_LOSS_THRESHOLD: Decimal = dec!(-5);

/// Minimum holding period before a losing position is worth harvesting.
const HARVEST_MIN_HOLDING_DAYS: i64 = 30;

/// The equity target is split across stocks, ETFs, and mutual funds
/// in fixed proportions; bonds take the whole bond target, and cash
/// keeps a fixed buffer. Evaluation stays in this order so reports
/// are deterministic.
fn target_buckets(profile: &RiskProfile) -> [(AssetKind, Decimal); 5] {
    let stock_target = profile.recommended_stock_allocation() * dec!(100);
    let bond_target = profile.recommended_bond_allocation() * dec!(100);
    [
        (AssetKind::Stock, stock_target * dec!(0.6)),
        (AssetKind::Etf, stock_target * dec!(0.3)),
        (AssetKind::MutualFund, stock_target * dec!(0.1)),
        (AssetKind::Bond, bond_target),
        (AssetKind::Cash, CASH_TARGET),
    ]
}

/// Target share per asset kind, percent, derived from the risk profile.
pub fn target_allocation(profile: &RiskProfile) -> HashMap<AssetKind, Decimal> {
    target_buckets(profile).into_iter().collect()
}

/// Buckets drifted more than the threshold from target, largest dollar
/// drift first.
pub fn rebalance_recommendations(
    portfolio: &Portfolio,
    profile: &RiskProfile,
) -> Vec<RebalanceRecommendation> {
    debug!(
        "Computing rebalance recommendations for portfolio {}",
        portfolio.id()
    );

    let current = asset_allocation(portfolio);
    let total_value = portfolio.total_value();

    let mut recommendations: Vec<RebalanceRecommendation> = target_buckets(profile)
        .into_iter()
        .filter_map(|(kind, target)| {
            let current_pct = current.get(&kind).copied().unwrap_or(Decimal::ZERO);
            let difference = current_pct - target;
            if difference.abs() <= DRIFT_THRESHOLD {
                return None;
            }

            let overweight = difference > Decimal::ZERO;
            Some(RebalanceRecommendation {
                asset_kind: kind,
                action: if overweight {
                    RebalanceAction::Sell
                } else {
                    RebalanceAction::Buy
                },
                current_allocation: current_pct,
                target_allocation: target,
                dollar_amount: difference / dec!(100) * total_value,
                reason: if overweight {
                    "Overweight - reduce exposure".to_string()
                } else {
                    "Underweight - increase exposure".to_string()
                },
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.dollar_amount.abs().cmp(&a.dollar_amount.abs()));
    recommendations
}

/// Whether any bucket drifted past the threshold.
pub fn needs_rebalancing(portfolio: &Portfolio, profile: &RiskProfile) -> bool {
    !rebalance_recommendations(portfolio, profile).is_empty()
}

/// Urgency of the current recommendation list.
pub fn rebalancing_priority(portfolio: &Portfolio, profile: &RiskProfile) -> RebalancePriority {
    let recommendations = rebalance_recommendations(portfolio, profile);

    if recommendations.is_empty() {
        RebalancePriority::WellBalanced
    } else if recommendations
        .iter()
        .any(|r| r.drift() > HIGH_PRIORITY_DRIFT)
    {
        RebalancePriority::High
    } else if recommendations.len() >= 3 {
        RebalancePriority::Medium
    } else {
        RebalancePriority::Low
    }
}

/// Losing positions worth selling for the deductible loss: down more than
/// 5% and held longer than 30 days. Largest loss first.
pub fn tax_loss_harvesting_opportunities(
    portfolio: &Portfolio,
    as_of: NaiveDate,
) -> Vec<&Asset> {
    let mut opportunities: Vec<&Asset> = portfolio
        .assets()
        .values()
        .filter(|asset| {
            asset.gain_loss_percentage() < HARVEST_LOSS_THRESHOLD
                && asset.holding_period_days(as_of) > HARVEST_MIN_HOLDING_DAYS
        })
        .collect();

    opportunities.sort_by(|a, b| a.gain_loss().cmp(&b.gain_loss()));
    opportunities
}

/// Multi-section textual rebalancing report.
pub fn rebalancing_report(
    portfolio: &Portfolio,
    profile: &RiskProfile,
    as_of: NaiveDate,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Portfolio Rebalancing Report ===");
    let _ = writeln!(out, "Portfolio: {}", portfolio.name());
    let _ = writeln!(out, "Risk Profile: {}\n", profile.tolerance());

    let priority = rebalancing_priority(portfolio, profile);
    let _ = writeln!(out, "Rebalancing Priority: {}\n", priority);

    let recommendations = rebalance_recommendations(portfolio, profile);
    if recommendations.is_empty() {
        let _ = writeln!(out, "Portfolio is well balanced. No rebalancing needed.");
    } else {
        let _ = writeln!(out, "Recommendations:");
        for (i, recommendation) in recommendations.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", i + 1, recommendation);
        }
    }

    let opportunities = tax_loss_harvesting_opportunities(portfolio, as_of);
    if !opportunities.is_empty() {
        let _ = writeln!(out, "\n=== Tax-Loss Harvesting Opportunities ===");
        for (i, asset) in opportunities.iter().take(5).enumerate() {
            let _ = writeln!(
                out,
                "{}. {}: Loss of ${:.2} ({:.2}%)",
                i + 1,
                asset.symbol,
                asset.gain_loss(),
                asset.gain_loss_percentage()
            );
        }
    }

    out
}
