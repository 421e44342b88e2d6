//! Core inspection logic for Inspecta.
//!
//! This crate contains the logic of an on-site inspection session with ZERO
//! web dependencies. The REST client lives in `inspecta-client`.
//!
//! # Modules
//!
//! - `location` - Periodic GPS trail recording
//! - `balance_sheet` - Derived totals over the Section H ledger
//! - `working_capital` - Section I working capital assessment
//! - `inspection` - Typed form sections, the form session and the submission payload

pub mod balance_sheet;
pub mod inspection;
pub mod location;
pub mod working_capital;
