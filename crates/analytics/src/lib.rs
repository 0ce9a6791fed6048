//! # Order Analytics Engine
//!
//! This crate reduces the order ledger to the summary numbers shown on the
//! reporting screens. It acts as the unbiased accountant of the system.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` is a stateless
//!   calculator. It takes order and payout data as input and produces report
//!   structs as output. This makes it highly reliable and easy to test.
//! - **Total functions:** every reduction here is defined for every input;
//!   a zero denominator yields zero, never an error or a NaN.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The struct that contains the reduction logic.
//! - `ReportFilter` and its parts: the period/source/status predicates.
//! - `SalesReport` / `PayoutReport`: the standardized output structs.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod filter;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use filter::{PayoutFilter, Period, ReportFilter, SourceFilter, StatusFilter};
pub use report::{CategoryShare, PayoutReport, SalesReport, SearchSummary};
