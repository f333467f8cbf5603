//! Percentage breakdowns of a portfolio by asset kind and sector, and
//! gain/loss performer rankings.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, AssetKind};
use crate::portfolio::Portfolio;

/// Current value share per asset kind, as percentages of total value.
///
/// Cash joins the breakdown under its own bucket when the balance is
/// positive. Returns an empty map when the total value is zero; percentages
/// are never taken against a zero denominator.
pub fn asset_allocation(portfolio: &Portfolio) -> HashMap<AssetKind, Decimal> {
    let total_value = portfolio.total_value();
    if total_value.is_zero() {
        return HashMap::new();
    }

    let mut buckets: HashMap<AssetKind, Decimal> = HashMap::new();
    for asset in portfolio.assets().values() {
        *buckets.entry(asset.kind).or_insert(Decimal::ZERO) += asset.current_value();
    }
    if portfolio.cash_balance() > Decimal::ZERO {
        *buckets.entry(AssetKind::Cash).or_insert(Decimal::ZERO) += portfolio.cash_balance();
    }

    buckets
        .into_iter()
        .map(|(kind, value)| (kind, value / total_value * dec!(100)))
        .collect()
}

/// Current value share per sector label, as percentages of total value.
///
/// Cash has no sector and is left out of the grouping, though it still sits
/// in the denominator.
pub fn sector_allocation(portfolio: &Portfolio) -> HashMap<String, Decimal> {
    let total_value = portfolio.total_value();
    if total_value.is_zero() {
        return HashMap::new();
    }

    let mut buckets: HashMap<String, Decimal> = HashMap::new();
    for asset in portfolio.assets().values() {
        *buckets.entry(asset.sector.clone()).or_insert(Decimal::ZERO) += asset.current_value();
    }

    buckets
        .into_iter()
        .map(|(sector, value)| (sector, value / total_value * dec!(100)))
        .collect()
}

/// Up to `count` holdings with the highest gain/loss percentage.
/// Ties keep the order the assets were added in.
pub fn top_performers(portfolio: &Portfolio, count: usize) -> Vec<&Asset> {
    let mut sorted: Vec<&Asset> = portfolio.assets().values().collect();
    sorted.sort_by(|a, b| b.gain_loss_percentage().cmp(&a.gain_loss_percentage()));
    sorted.truncate(count);
    sorted
}

/// Up to `count` holdings with the lowest gain/loss percentage.
/// Ties keep the order the assets were added in.
pub fn bottom_performers(portfolio: &Portfolio, count: usize) -> Vec<&Asset> {
    let mut sorted: Vec<&Asset> = portfolio.assets().values().collect();
    sorted.sort_by(|a, b| a.gain_loss_percentage().cmp(&b.gain_loss_percentage()));
    sorted.truncate(count);
    sorted
}
