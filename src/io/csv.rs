//! CSV tables for the asset book and the transaction ledger.
//!
//! Decimals are written in full precision so a round trip reconstructs the
//! stored values exactly.

use std::io::{Read, Write};

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim, Writer};
use log::debug;
use rust_decimal::Decimal;

use crate::assets::{Asset, AssetKind};
use crate::constants::DEFAULT_SECTOR;
use crate::errors::{Result, ValidationError};
use crate::portfolio::Portfolio;
use crate::Error;

const ASSET_HEADER: [&str; 8] = [
    "Symbol",
    "Name",
    "Type",
    "Quantity",
    "Purchase Price",
    "Current Price",
    "Purchase Date",
    "Sector",
];

const TRANSACTION_HEADER: [&str; 8] = [
    "ID",
    "Type",
    "Asset Symbol",
    "Quantity",
    "Price Per Unit",
    "Total Amount",
    "Timestamp",
    "Notes",
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the portfolio's asset table.
pub fn write_assets<W: Write>(portfolio: &Portfolio, writer: W) -> Result<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(ASSET_HEADER)?;
    for asset in portfolio.assets().values() {
        let quantity = asset.quantity().to_string();
        let purchase_price = asset.purchase_price().to_string();
        let current_price = asset.current_price().to_string();
        let purchase_date = asset.purchase_date.format(DATE_FORMAT).to_string();
        out.write_record([
            asset.symbol.as_str(),
            asset.name.as_str(),
            asset.kind.as_str(),
            quantity.as_str(),
            purchase_price.as_str(),
            current_price.as_str(),
            purchase_date.as_str(),
            asset.sector.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Reads an asset table written by [`write_assets`].
pub fn read_assets<R: Read>(reader: R) -> Result<Vec<Asset>> {
    let mut input = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut assets = Vec::new();
    for record in input.records() {
        let record = record?;

        let symbol = field(&record, 0, "Symbol")?;
        let name = field(&record, 1, "Name")?;
        let kind: AssetKind = field(&record, 2, "Type")?.parse()?;
        let quantity: Decimal = field(&record, 3, "Quantity")?.parse()?;
        let purchase_price: Decimal = field(&record, 4, "Purchase Price")?.parse()?;
        let current_price: Decimal = field(&record, 5, "Current Price")?.parse()?;
        let purchase_date =
            NaiveDate::parse_from_str(field(&record, 6, "Purchase Date")?, DATE_FORMAT)?;
        // Sector column is optional, as in older exports
        let sector = record.get(7).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SECTOR);

        let asset = Asset::new(symbol, name, kind, quantity, purchase_price, purchase_date)?
            .with_current_price(current_price)
            .with_sector(sector);
        assets.push(asset);
    }

    debug!("Read {} assets from CSV", assets.len());
    Ok(assets)
}

/// Reads an asset table into an existing portfolio, replacing holdings on
/// symbol collision. Returns how many assets were imported.
pub fn import_assets<R: Read>(portfolio: &mut Portfolio, reader: R) -> Result<usize> {
    let assets = read_assets(reader)?;
    let count = assets.len();
    for asset in assets {
        portfolio.add_asset(asset);
    }
    Ok(count)
}

/// Writes the portfolio's transaction ledger.
pub fn write_transactions<W: Write>(portfolio: &Portfolio, writer: W) -> Result<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(TRANSACTION_HEADER)?;
    for transaction in portfolio.transactions() {
        let quantity = transaction.quantity().to_string();
        let unit_price = transaction.unit_price().to_string();
        let total_amount = transaction.total_amount().to_string();
        let timestamp = transaction.timestamp().format(TIMESTAMP_FORMAT).to_string();
        out.write_record([
            transaction.id(),
            transaction.kind().as_str(),
            transaction.symbol(),
            quantity.as_str(),
            unit_price.as_str(),
            total_amount.as_str(),
            timestamp.as_str(),
            transaction.notes().unwrap_or(""),
        ])?;
    }
    out.flush()?;
    Ok(())
}

fn field<'a>(record: &'a csv::StringRecord, index: usize, name: &str) -> Result<&'a str> {
    record
        .get(index)
        .ok_or_else(|| Error::Validation(ValidationError::MissingField(name.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_portfolio() -> Portfolio {
        let mut portfolio = Portfolio::opened_on("p1", "Main", "u1", date(2024, 1, 1));
        portfolio.add_asset(
            Asset::new("AAPL", "Apple Inc.", AssetKind::Stock, dec!(50.25), dec!(150), date(2024, 1, 15))
                .unwrap()
                .with_current_price(dec!(175.5))
                .with_sector("Technology"),
        );
        portfolio.add_asset(
            Asset::new("BND", "Total Bond", AssetKind::Bond, dec!(10), dec!(72.4), date(2023, 11, 2))
                .unwrap()
                .with_current_price(dec!(71.9))
                .with_sector("Fixed Income"),
        );
        portfolio
    }

    #[test]
    fn asset_table_round_trips_every_field() {
        let portfolio = sample_portfolio();

        let mut buffer = Vec::new();
        write_assets(&portfolio, &mut buffer).unwrap();

        let assets = read_assets(buffer.as_slice()).unwrap();
        assert_eq!(assets.len(), 2);

        let original = portfolio.asset("AAPL").unwrap();
        let restored = &assets[0];
        assert_eq!(restored.symbol, original.symbol);
        assert_eq!(restored.name, original.name);
        assert_eq!(restored.kind, original.kind);
        assert_eq!(restored.quantity(), original.quantity());
        assert_eq!(restored.purchase_price(), original.purchase_price());
        assert_eq!(restored.current_price(), original.current_price());
        assert_eq!(restored.purchase_date, original.purchase_date);
        assert_eq!(restored.sector, original.sector);
    }

    #[test]
    fn import_replaces_holdings_by_symbol() {
        let portfolio = sample_portfolio();
        let mut buffer = Vec::new();
        write_assets(&portfolio, &mut buffer).unwrap();

        let mut target = Portfolio::opened_on("p2", "Copy", "u1", date(2024, 2, 1));
        target.add_asset(
            Asset::new("AAPL", "Stale row", AssetKind::Stock, dec!(1), dec!(1), date(2024, 1, 1))
                .unwrap(),
        );

        let imported = import_assets(&mut target, buffer.as_slice()).unwrap();
        assert_eq!(imported, 2);
        assert_eq!(target.assets().len(), 2);
        assert_eq!(target.asset("AAPL").unwrap().name, "Apple Inc.");
    }

    #[test]
    fn missing_sector_column_falls_back_to_the_default() {
        let csv = "Symbol,Name,Type,Quantity,Purchase Price,Current Price,Purchase Date\n\
                   AAPL,Apple Inc.,STOCK,10,150,160,2024-01-15\n";
        let assets = read_assets(csv.as_bytes()).unwrap();
        assert_eq!(assets[0].sector, "General");
    }

    #[test]
    fn bad_rows_are_rejected_not_skipped() {
        let bad_kind = "Symbol,Name,Type,Quantity,Purchase Price,Current Price,Purchase Date,Sector\n\
                        AAPL,Apple Inc.,PEZ_DISPENSER,10,150,160,2024-01-15,Tech\n";
        assert!(read_assets(bad_kind.as_bytes()).is_err());

        let bad_quantity = "Symbol,Name,Type,Quantity,Purchase Price,Current Price,Purchase Date,Sector\n\
                            AAPL,Apple Inc.,STOCK,plenty,150,160,2024-01-15,Tech\n";
        assert!(read_assets(bad_quantity.as_bytes()).is_err());

        let bad_date = "Symbol,Name,Type,Quantity,Purchase Price,Current Price,Purchase Date,Sector\n\
                        AAPL,Apple Inc.,STOCK,10,150,160,someday,Tech\n";
        assert!(read_assets(bad_date.as_bytes()).is_err());
    }

    #[test]
    fn transaction_ledger_writes_one_row_per_entry() {
        use crate::transactions::{Transaction, TransactionType};

        let mut portfolio = sample_portfolio();
        portfolio.record_transaction(Transaction::cash(TransactionType::Deposit, dec!(10000), None));
        portfolio.record_transaction(Transaction::new(
            TransactionType::Buy,
            "AAPL",
            dec!(50.25),
            dec!(150),
            Some("opening".to_string()),
        ));

        let mut buffer = Vec::new();
        write_transactions(&portfolio, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID,Type,Asset Symbol,Quantity,Price Per Unit,Total Amount,Timestamp,Notes"
        );
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("DEPOSIT,CASH,10000,1,10000"));
        assert!(text.contains("BUY,AAPL,50.25,150,7537.50"));
    }
}
