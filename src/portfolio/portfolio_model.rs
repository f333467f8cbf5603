//! Portfolio aggregate root.

use std::fmt;
use std::fmt::Write as _;

use chrono::{NaiveDate, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assets::Asset;
use crate::portfolio::allocation;
use crate::transactions::{Transaction, TransactionType};

/// An investment portfolio: holdings, cash, and the transaction ledger.
///
/// The symbol map preserves insertion order, which is the tie-break order for
/// every ranking the engine produces. The cash balance is a running total:
/// outside of initial seeding it changes only through
/// [`Portfolio::record_transaction`], so it always equals the signed sum of
/// the ledger plus the seed.
///
/// Holdings and ledger are deliberately independent: recording a BUY does not
/// create an asset, and adding an asset writes nothing to the ledger. Callers
/// make both calls when both sides apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    id: String,
    name: String,
    owner_id: String,
    inception_date: NaiveDate,
    assets: IndexMap<String, Asset>,
    transactions: Vec<Transaction>,
    cash_balance: Decimal,
}

impl Portfolio {
    /// Creates an empty portfolio with inception fixed at today.
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self::opened_on(id, name, owner_id, Utc::now().date_naive())
    }

    /// Creates an empty portfolio with an explicit inception date
    /// (reconstruction path).
    pub fn opened_on(
        id: impl Into<String>,
        name: impl Into<String>,
        owner_id: impl Into<String>,
        inception_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner_id: owner_id.into(),
            inception_date,
            assets: IndexMap::new(),
            transactions: Vec::new(),
            cash_balance: Decimal::ZERO,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn inception_date(&self) -> NaiveDate {
        self.inception_date
    }

    pub fn assets(&self) -> &IndexMap<String, Asset> {
        &self.assets
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn cash_balance(&self) -> Decimal {
        self.cash_balance
    }

    /// Seeds the cash balance outside the ledger (initial funding only).
    pub fn set_cash_balance(&mut self, balance: Decimal) {
        self.cash_balance = balance;
    }

    // === Asset operations ===

    /// Inserts or replaces the holding for the asset's symbol.
    pub fn add_asset(&mut self, asset: Asset) {
        self.assets.insert(asset.symbol.clone(), asset);
    }

    /// Removes a holding on disposal; the ledger keeps its history.
    pub fn remove_asset(&mut self, symbol: &str) -> Option<Asset> {
        self.assets.shift_remove(symbol)
    }

    pub fn asset(&self, symbol: &str) -> Option<&Asset> {
        self.assets.get(symbol)
    }

    pub fn asset_mut(&mut self, symbol: &str) -> Option<&mut Asset> {
        self.assets.get_mut(symbol)
    }

    pub fn has_asset(&self, symbol: &str) -> bool {
        self.assets.contains_key(symbol)
    }

    // === Transaction operations ===

    /// Appends to the ledger and applies the signed cash effect in one step.
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.cash_balance += transaction.cash_delta();
        self.transactions.push(transaction);
    }

    // === Valuation ===

    /// Cash plus the current value of every holding.
    pub fn total_value(&self) -> Decimal {
        self.cash_balance
            + self
                .assets
                .values()
                .map(Asset::current_value)
                .sum::<Decimal>()
    }

    pub fn total_cost_basis(&self) -> Decimal {
        self.assets.values().map(Asset::cost_basis).sum()
    }

    /// Owner-contributed cash: deposits less withdrawals over the ledger.
    pub fn net_deposits(&self) -> Decimal {
        self.transactions
            .iter()
            .filter_map(|t| match t.kind() {
                TransactionType::Deposit => Some(t.total_amount()),
                TransactionType::Withdrawal => Some(-t.total_amount()),
                _ => None,
            })
            .sum()
    }

    /// Total gain/loss against cost basis plus net deposits.
    ///
    /// Note the invested base counts deposit-funded purchases twice: a BUY
    /// debits cash without reducing net deposits, yet its cost lands in the
    /// basis. Downstream consumers expect this figure as-is; see the pinned
    /// test before changing it.
    pub fn total_gain_loss(&self) -> Decimal {
        self.total_value() - (self.total_cost_basis() + self.net_deposits())
    }

    /// Total gain/loss as a percentage of the invested base; zero when the
    /// base is zero.
    pub fn total_gain_loss_percentage(&self) -> Decimal {
        let invested = self.total_cost_basis() + self.net_deposits();
        if invested.is_zero() {
            return Decimal::ZERO;
        }
        self.total_gain_loss() / invested * dec!(100)
    }

    /// Multi-line textual summary with two-decimal money and percentages.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Portfolio Summary: {} ===", self.name);
        let _ = writeln!(
            out,
            "Total Assets: {} | Cash: ${:.2}",
            self.assets.len(),
            self.cash_balance
        );
        let _ = writeln!(
            out,
            "Total Value: ${:.2} | Cost Basis: ${:.2}",
            self.total_value(),
            self.total_cost_basis()
        );
        let _ = writeln!(
            out,
            "Gain/Loss: ${:.2} ({:.2}%)",
            self.total_gain_loss(),
            self.total_gain_loss_percentage()
        );
        let _ = writeln!(out, "\nAsset Allocation:");
        let mut buckets: Vec<_> = allocation::asset_allocation(self).into_iter().collect();
        buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.as_str().cmp(b.0.as_str())));
        for (kind, pct) in buckets {
            let _ = writeln!(out, "  {}: {:.2}%", kind, pct);
        }
        out
    }
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Portfolio: {} | Assets: {} | Total Value: ${:.2} | Gain/Loss: {:.2}%",
            self.name,
            self.assets.len(),
            self.total_value(),
            self.total_gain_loss_percentage()
        )
    }
}
