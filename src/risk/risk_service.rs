//! Portfolio risk scoring.
//!
//! Betas here are per-kind heuristics weighted by allocation, not
//! regression-derived figures; the scores are coarse 0-10 gauges meant for
//! profile alignment, not risk management.

use std::fmt::Write as _;

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::portfolio::allocation::{asset_allocation, sector_allocation};
use crate::portfolio::Portfolio;
use crate::profiles::RiskProfile;

use super::{RiskAlignment, RiskBreakdown};

/// Allocation-weighted heuristic beta.
pub fn portfolio_beta(portfolio: &Portfolio) -> Decimal {
    asset_allocation(portfolio)
        .into_iter()
        .map(|(kind, pct)| pct / dec!(100) * kind.beta())
        .sum()
}

/// Beta mapped onto a 0-10 scale: 0.0 scores 0, 1.5 and above score 10.
pub fn volatility_score(portfolio: &Portfolio) -> i32 {
    let beta = portfolio_beta(portfolio);
    let scaled = (beta / dec!(1.5) * dec!(10))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    scaled.to_i32().unwrap_or(0).clamp(0, 10)
}

/// Spread of the portfolio across kinds and sectors, 0-10.
///
/// Starts neutral at 5 and moves with kind diversity, sector diversity, and
/// concentration of the largest kind bucket.
pub fn diversification_score(portfolio: &Portfolio) -> i32 {
    let allocation = asset_allocation(portfolio);
    let sectors = sector_allocation(portfolio);

    let mut score = 5;

    let kinds = allocation.len();
    if kinds >= 4 {
        score += 2;
    } else if kinds == 3 {
        score += 1;
    } else if kinds <= 1 {
        score -= 2;
    }

    let sector_count = sectors.len();
    if sector_count >= 5 {
        score += 2;
    } else if sector_count >= 3 {
        score += 1;
    } else if sector_count <= 1 {
        score -= 2;
    }

    let largest = allocation
        .values()
        .copied()
        .max()
        .unwrap_or(Decimal::ZERO);
    if largest > dec!(70) {
        score -= 2;
    } else if largest < dec!(40) {
        score += 1;
    }

    score.clamp(0, 10)
}

/// Overall risk, 0-10: volatility dampened by a third of diversification.
pub fn overall_risk_score(portfolio: &Portfolio) -> i32 {
    let score = volatility_score(portfolio) - diversification_score(portfolio) / 3;
    score.clamp(0, 10)
}

/// Compares the portfolio's overall risk with the profile's target score.
pub fn assess_risk_alignment(portfolio: &Portfolio, profile: &RiskProfile) -> RiskAlignment {
    let portfolio_risk = overall_risk_score(portfolio);
    let target_risk = profile.risk_score();
    let difference = (portfolio_risk - target_risk).abs();

    if difference <= 1 {
        RiskAlignment::WellAligned
    } else if difference <= 2 {
        RiskAlignment::ModerateAlignment
    } else if portfolio_risk > target_risk {
        RiskAlignment::TooRisky
    } else {
        RiskAlignment::TooConservative
    }
}

/// Sharpe ratio approximation against a 2% risk-free rate, with volatility
/// proxied as beta x 0.15. Zero when the proxy is zero.
pub fn sharpe_ratio(portfolio_return: Decimal, beta: Decimal) -> Decimal {
    let risk_free_rate = dec!(0.02);
    let volatility = beta * dec!(0.15);
    if volatility.is_zero() {
        return Decimal::ZERO;
    }
    (portfolio_return - risk_free_rate) / volatility
}

/// Every risk figure in one pass.
pub fn risk_breakdown(portfolio: &Portfolio) -> RiskBreakdown {
    debug!("Scoring risk for portfolio {}", portfolio.id());
    RiskBreakdown {
        beta: portfolio_beta(portfolio),
        volatility_score: volatility_score(portfolio),
        diversification_score: diversification_score(portfolio),
        overall_risk_score: overall_risk_score(portfolio),
    }
}

/// Multi-section textual risk report.
pub fn risk_report(portfolio: &Portfolio, profile: &RiskProfile) -> String {
    let breakdown = risk_breakdown(portfolio);

    let mut out = String::new();
    let _ = writeln!(out, "=== Risk Analysis Report ===");
    let _ = writeln!(out, "Portfolio: {}\n", portfolio.name());

    let _ = writeln!(out, "Beta: {:.2}", breakdown.beta);
    let _ = writeln!(out, "Volatility Score: {}/10", breakdown.volatility_score);
    let _ = writeln!(
        out,
        "Diversification Score: {}/10",
        breakdown.diversification_score
    );
    let _ = writeln!(
        out,
        "Overall Risk Score: {}/10\n",
        breakdown.overall_risk_score
    );

    let alignment = assess_risk_alignment(portfolio, profile);
    let _ = writeln!(out, "Risk Alignment: {}", alignment);
    let _ = writeln!(
        out,
        "Target Risk (from profile): {}/10",
        profile.risk_score()
    );

    out
}
