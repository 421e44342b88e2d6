//! Balance sheet totals for the Section H ledger.
//!
//! This module provides pure logic for the inspection's balance sheet:
//! - The typed ledger of operator-entered amounts
//! - Derived subtotals, totals and net worth
//!
//! Totals are never edited directly. They are recomputed from the ledger
//! after every change and replace the previous totals wholesale.

pub mod service;
pub mod types;


pub use service::FinancialTotalsCalculator;
pub use types::{DerivedTotals, Ledger, LedgerField, LedgerGroup};
