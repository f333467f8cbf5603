//! Interchange module - CSV and JSON serialization over caller-provided
//! readers and writers.
//!
//! Nothing here touches the filesystem; the import/export collaborator owns
//! the actual files and hands in `Read`/`Write` implementations.

pub mod csv;
pub mod json;
