//! Transaction domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::CASH_SYMBOL;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Ledger entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
    Deposit,
    Withdrawal,
    Fee,
}

impl TransactionType {
    /// Returns the interchange string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "BUY",
            TransactionType::Sell => "SELL",
            TransactionType::Dividend => "DIVIDEND",
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::Fee => "FEE",
        }
    }

    /// Signed cash effect of a transaction of this type for the given amount.
    ///
    /// Buys, withdrawals, and fees debit the cash balance; sells, dividends,
    /// and deposits credit it. This is the only place the sign convention
    /// lives.
    pub fn cash_delta(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionType::Buy | TransactionType::Withdrawal | TransactionType::Fee => -amount,
            TransactionType::Sell | TransactionType::Dividend | TransactionType::Deposit => amount,
        }
    }

    /// Whether this type represents a trade (buy or sell).
    pub fn is_trade(&self) -> bool {
        matches!(self, TransactionType::Buy | TransactionType::Sell)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BUY" => Ok(TransactionType::Buy),
            "SELL" => Ok(TransactionType::Sell),
            "DIVIDEND" => Ok(TransactionType::Dividend),
            "DEPOSIT" => Ok(TransactionType::Deposit),
            "WITHDRAWAL" => Ok(TransactionType::Withdrawal),
            "FEE" => Ok(TransactionType::Fee),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown transaction type '{}'",
                other
            )))),
        }
    }
}

/// An immutable ledger entry.
///
/// The total amount is fixed at construction (quantity x unit price) and is
/// never recomputed, so later price or quantity conventions cannot rewrite
/// history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: String,
    kind: TransactionType,
    symbol: String,
    quantity: Decimal,
    unit_price: Decimal,
    total_amount: Decimal,
    timestamp: DateTime<Utc>,
    notes: Option<String>,
}

impl Transaction {
    /// Records a transaction stamped now, with a generated id.
    pub fn new(
        kind: TransactionType,
        symbol: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        notes: Option<String>,
    ) -> Self {
        Self::new_at(kind, symbol, quantity, unit_price, Utc::now(), notes)
    }

    /// Records a transaction with an explicit timestamp.
    pub fn new_at(
        kind: TransactionType,
        symbol: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        timestamp: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            symbol: symbol.into(),
            quantity,
            unit_price,
            total_amount: quantity * unit_price,
            timestamp,
            notes,
        }
    }

    /// Records a pure cash movement (deposit, withdrawal, fee) stamped now.
    pub fn cash(kind: TransactionType, amount: Decimal, notes: Option<String>) -> Self {
        Self::new(kind, CASH_SYMBOL, amount, Decimal::ONE, notes)
    }

    /// Records a pure cash movement with an explicit timestamp.
    pub fn cash_at(
        kind: TransactionType,
        amount: Decimal,
        timestamp: DateTime<Utc>,
        notes: Option<String>,
    ) -> Self {
        Self::new_at(kind, CASH_SYMBOL, amount, Decimal::ONE, timestamp, notes)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Signed effect of this transaction on the cash balance.
    pub fn cash_delta(&self) -> Decimal {
        self.kind.cash_delta(self.total_amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} {:.2} units @ ${:.2} = ${:.2} | {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.symbol,
            self.quantity,
            self.unit_price,
            self.total_amount,
            self.notes.as_deref().unwrap_or("")
        )
    }
}
