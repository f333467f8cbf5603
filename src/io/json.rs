//! JSON portfolio snapshots.
//!
//! A snapshot carries the full aggregate (holdings, ledger, cash) and round
//! trips through serde; numeric fields travel as floats, so restored values
//! match to floating precision.

use std::io::{Read, Write};

use crate::errors::Result;
use crate::portfolio::Portfolio;

/// Writes a pretty-printed snapshot of the whole portfolio.
pub fn write_portfolio<W: Write>(portfolio: &Portfolio, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, portfolio)?;
    Ok(())
}

/// Reads a snapshot written by [`write_portfolio`].
pub fn read_portfolio<R: Read>(reader: R) -> Result<Portfolio> {
    Ok(serde_json::from_reader(reader)?)
}
