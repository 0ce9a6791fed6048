//! # Ledgers and the Desk Facade
//!
//! Ordered, id-keyed collections for orders, seller payouts and the
//! append-only category set, plus the `Desk`: the single store object the
//! UI talks to. Every mutating command recomputes the in-memory snapshot
//! and then explicitly saves the affected collection to the persistence
//! collaborator, so the externally stored state can never lag a mutation.

pub mod categories;
pub mod desk;
pub mod edit;
pub mod error;
pub mod orders;
pub mod payouts;

// Re-export the core types to provide a clean public API.
pub use categories::CategorySet;
pub use desk::Desk;
pub use edit::EditState;
pub use error::LedgerError;
pub use orders::OrderLedger;
pub use payouts::PayoutLedger;
