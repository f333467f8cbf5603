//! Asset domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_SECTOR;
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Kind of holding.
///
/// Every asset in a portfolio belongs to exactly one kind; the kind drives
/// allocation bucketing, the heuristic beta, and rebalancing targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetKind {
    Stock,
    Bond,
    MutualFund,
    Etf,
    Cash,
    RealEstate,
    Commodity,
}

impl AssetKind {
    /// Returns the interchange string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Stock => "STOCK",
            AssetKind::Bond => "BOND",
            AssetKind::MutualFund => "MUTUAL_FUND",
            AssetKind::Etf => "ETF",
            AssetKind::Cash => "CASH",
            AssetKind::RealEstate => "REAL_ESTATE",
            AssetKind::Commodity => "COMMODITY",
        }
    }

    /// Heuristic market-sensitivity constant used as a volatility proxy.
    pub fn beta(&self) -> Decimal {
        match self {
            AssetKind::Stock => dec!(1.0),
            AssetKind::Etf => dec!(0.9),
            AssetKind::MutualFund => dec!(0.85),
            AssetKind::Bond => dec!(0.3),
            AssetKind::RealEstate => dec!(0.7),
            AssetKind::Commodity => dec!(1.2),
            AssetKind::Cash => dec!(0.0),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "STOCK" => Ok(AssetKind::Stock),
            "BOND" => Ok(AssetKind::Bond),
            "MUTUAL_FUND" => Ok(AssetKind::MutualFund),
            "ETF" => Ok(AssetKind::Etf),
            "CASH" => Ok(AssetKind::Cash),
            "REAL_ESTATE" => Ok(AssetKind::RealEstate),
            "COMMODITY" => Ok(AssetKind::Commodity),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown asset kind '{}'",
                other
            )))),
        }
    }
}

/// A single holding in a portfolio.
///
/// Cost basis, current value, and gain figures are derived on read and never
/// stored. The current price is mutated only through [`Asset::update_price`],
/// which stamps the update time so a valuation can be tied to its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub symbol: String,
    pub name: String,
    pub kind: AssetKind,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    pub purchase_date: NaiveDate,
    pub sector: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    price_updated_at: Option<DateTime<Utc>>,
}

impl Asset {
    /// Creates a holding as of its purchase: the current price starts at the
    /// purchase price and the sector defaults to "General".
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        kind: AssetKind,
        quantity: Decimal,
        purchase_price: Decimal,
        purchase_date: NaiveDate,
    ) -> Result<Self> {
        if quantity <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Quantity must be greater than zero".to_string(),
            )));
        }
        if purchase_price < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Purchase price cannot be negative".to_string(),
            )));
        }
        Ok(Self {
            symbol: symbol.into(),
            name: name.into(),
            kind,
            quantity,
            purchase_price,
            current_price: purchase_price,
            purchase_date,
            sector: DEFAULT_SECTOR.to_string(),
            price_updated_at: None,
        })
    }

    /// Sets the sector label (reconstruction/import path).
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    /// Sets the current price without a feed stamp (reconstruction/import path).
    pub fn with_current_price(mut self, price: Decimal) -> Self {
        self.current_price = price;
        self
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn purchase_price(&self) -> Decimal {
        self.purchase_price
    }

    pub fn current_price(&self) -> Decimal {
        self.current_price
    }

    pub fn price_updated_at(&self) -> Option<DateTime<Utc>> {
        self.price_updated_at
    }

    /// Applies a price observation from an external feed.
    pub fn update_price(&mut self, price: Decimal, as_of: DateTime<Utc>) {
        self.current_price = price;
        self.price_updated_at = Some(as_of);
    }

    /// Quantity times original purchase price per unit.
    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.purchase_price
    }

    /// Quantity times latest known price per unit.
    pub fn current_value(&self) -> Decimal {
        self.quantity * self.current_price
    }

    pub fn gain_loss(&self) -> Decimal {
        self.current_value() - self.cost_basis()
    }

    /// Gain/loss as a percentage of cost basis; zero when the basis is zero.
    pub fn gain_loss_percentage(&self) -> Decimal {
        let basis = self.cost_basis();
        if basis.is_zero() {
            return Decimal::ZERO;
        }
        self.gain_loss() / basis * dec!(100)
    }

    /// Whole days held as of the given date.
    pub fn holding_period_days(&self, as_of: NaiveDate) -> i64 {
        (as_of - self.purchase_date).num_days()
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}: {:.2} units @ ${:.2} | Current: ${:.2} | Gain/Loss: ${:.2} ({:.2}%)",
            self.symbol,
            self.name,
            self.kind,
            self.quantity,
            self.purchase_price,
            self.current_price,
            self.gain_loss(),
            self.gain_loss_percentage()
        )
    }
}
