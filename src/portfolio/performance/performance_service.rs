//! Portfolio performance metrics.
//!
//! Every function is a pure read over the portfolio; the ones that depend on
//! elapsed time take an explicit `as_of` date so results are reproducible.

use std::fmt::Write as _;

use chrono::NaiveDate;
use log::debug;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::DAYS_PER_YEAR;
use crate::portfolio::allocation::{bottom_performers, top_performers};
use crate::portfolio::Portfolio;
use crate::transactions::TransactionType;

use super::PerformanceSummary;

/// Decimal twin of [`DAYS_PER_YEAR`] for exact annualization arithmetic.
const DAYS_PER_YEAR_DEC: Decimal = dec!(365.25);

/// Simple return on investment: current value against cost basis, percent.
/// Zero when the cost basis is zero.
///
/// Unlike [`Portfolio::total_gain_loss_percentage`], ROI ignores cash the
/// owner deposited or withdrew.
pub fn roi(portfolio: &Portfolio) -> Decimal {
    let cost_basis = portfolio.total_cost_basis();
    if cost_basis.is_zero() {
        return Decimal::ZERO;
    }
    (portfolio.total_value() - cost_basis) / cost_basis * dec!(100)
}

/// Compound annual growth rate since inception, percent.
///
/// Under one day of history returns zero; under ~3.65 days the total return
/// is passed through unannualized, which keeps near-zero horizons from
/// exploding the exponent.
pub fn annualized_return(portfolio: &Portfolio, as_of: NaiveDate) -> Decimal {
    let days = (as_of - portfolio.inception_date()).num_days();
    if days < 1 {
        return Decimal::ZERO;
    }

    let total_return = portfolio.total_gain_loss_percentage() / dec!(100);
    let years = days as f64 / DAYS_PER_YEAR;
    if years < 0.01 {
        return total_return * dec!(100);
    }

    let growth = 1.0 + total_return.to_f64().unwrap_or(0.0);
    let annualized = growth.powf(1.0 / years) - 1.0;
    Decimal::from_f64(annualized * 100.0).unwrap_or(Decimal::ZERO)
}

/// Buy and sell transactions per year of portfolio history.
/// Zero under one day of history.
pub fn turnover_rate(portfolio: &Portfolio, as_of: NaiveDate) -> Decimal {
    let days = (as_of - portfolio.inception_date()).num_days();
    if days < 1 {
        return Decimal::ZERO;
    }

    let trades = portfolio
        .transactions()
        .iter()
        .filter(|t| t.kind().is_trade())
        .count();

    Decimal::from(trades as u64) * DAYS_PER_YEAR_DEC / Decimal::from(days)
}

/// Sum of all FEE transaction amounts.
pub fn total_fees(portfolio: &Portfolio) -> Decimal {
    sum_of_kind(portfolio, TransactionType::Fee)
}

/// Sum of all DIVIDEND transaction amounts.
pub fn total_dividends(portfolio: &Portfolio) -> Decimal {
    sum_of_kind(portfolio, TransactionType::Dividend)
}

fn sum_of_kind(portfolio: &Portfolio, kind: TransactionType) -> Decimal {
    portfolio
        .transactions()
        .iter()
        .filter(|t| t.kind() == kind)
        .map(|t| t.total_amount())
        .sum()
}

/// Dividends received over current value, percent, annualized when the
/// portfolio is under a year old. Zero when the value is zero or the
/// portfolio has less than one day of history.
pub fn dividend_yield(portfolio: &Portfolio, as_of: NaiveDate) -> Decimal {
    let total_value = portfolio.total_value();
    if total_value.is_zero() {
        return Decimal::ZERO;
    }

    let days = (as_of - portfolio.inception_date()).num_days();
    if days < 1 {
        return Decimal::ZERO;
    }

    let mut annual_dividends = total_dividends(portfolio);
    if days < 365 {
        annual_dividends = annual_dividends * DAYS_PER_YEAR_DEC / Decimal::from(days);
    }

    annual_dividends / total_value * dec!(100)
}

/// All headline figures in one pass, rounded to display precision.
pub fn summarize(portfolio: &Portfolio, as_of: NaiveDate) -> PerformanceSummary {
    debug!("Summarizing performance for portfolio {}", portfolio.id());
    PerformanceSummary {
        roi: roi(portfolio),
        annualized_return: annualized_return(portfolio, as_of),
        turnover_rate: turnover_rate(portfolio, as_of),
        total_fees: total_fees(portfolio),
        total_dividends: total_dividends(portfolio),
        dividend_yield: dividend_yield(portfolio, as_of),
    }
    .rounded()
}

/// Multi-section textual performance report.
pub fn performance_report(portfolio: &Portfolio, as_of: NaiveDate) -> String {
    let days = (as_of - portfolio.inception_date()).num_days();

    let mut out = String::new();
    let _ = writeln!(out, "=== Performance Analysis Report ===");
    let _ = writeln!(out, "Portfolio: {}", portfolio.name());
    let _ = write!(out, "Created: {} (", portfolio.inception_date());
    if days < 30 {
        let _ = writeln!(out, "{} days ago)\n", days);
    } else if days < 365 {
        let _ = writeln!(out, "{:.1} months ago)\n", days as f64 / 30.0);
    } else {
        let _ = writeln!(out, "{:.1} years ago)\n", days as f64 / DAYS_PER_YEAR);
    }

    let _ = writeln!(out, "== Value Metrics ==");
    let _ = writeln!(out, "Current Value: ${:.2}", portfolio.total_value());
    let _ = writeln!(out, "Cost Basis: ${:.2}", portfolio.total_cost_basis());
    let _ = writeln!(out, "Cash Balance: ${:.2}", portfolio.cash_balance());
    let _ = writeln!(
        out,
        "Total Gain/Loss: ${:.2} ({:.2}%)\n",
        portfolio.total_gain_loss(),
        portfolio.total_gain_loss_percentage()
    );

    let _ = writeln!(out, "== Return Metrics ==");
    let _ = writeln!(out, "ROI: {:.2}%", roi(portfolio));
    let _ = writeln!(
        out,
        "Annualized Return: {:.2}%",
        annualized_return(portfolio, as_of)
    );
    let _ = writeln!(out, "Yield: {:.2}%\n", dividend_yield(portfolio, as_of));

    let dividends = total_dividends(portfolio);
    let fees = total_fees(portfolio);
    let _ = writeln!(out, "== Income & Expenses ==");
    let _ = writeln!(out, "Total Dividends: ${:.2}", dividends);
    let _ = writeln!(out, "Total Fees: ${:.2}", fees);
    let _ = writeln!(out, "Net Income: ${:.2}\n", dividends - fees);

    let _ = writeln!(out, "== Activity ==");
    let _ = writeln!(
        out,
        "Total Transactions: {}",
        portfolio.transactions().len()
    );
    let _ = writeln!(
        out,
        "Turnover Rate: {:.2} trades/year",
        turnover_rate(portfolio, as_of)
    );

    out
}

/// Ranked top/bottom performer comparison.
pub fn performance_comparison(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Asset Performance Comparison ===\n");

    let _ = writeln!(out, "Top 5 Performers:");
    for (i, asset) in top_performers(portfolio, 5).iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {}: {:.2}%",
            i + 1,
            asset.symbol,
            asset.gain_loss_percentage()
        );
    }

    let _ = writeln!(out, "\nBottom 5 Performers:");
    for (i, asset) in bottom_performers(portfolio, 5).iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {}: {:.2}%",
            i + 1,
            asset.symbol,
            asset.gain_loss_percentage()
        );
    }

    out
}
