//! # CSV Interchange
//!
//! Encodes and decodes the order ledger as the 14-column CSV schema that is
//! the system's one wire-level artifact. Column order and header text are a
//! stable contract; quoting follows the standard quoted-field grammar, so
//! free-text fields containing commas, quotes or newlines survive intact.

pub mod csv_codec;
pub mod error;

pub use csv_codec::{HEADERS, export_orders, import_orders, read_orders_file, write_orders_file};
pub use error::InterchangeError;
