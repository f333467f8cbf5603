//! Transactions module - the append-only cash and trade ledger.

mod transactions_model;

pub use transactions_model::{Transaction, TransactionType};
