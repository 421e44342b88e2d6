//! Section I: working capital assessment.
//!
//! Each row values a class of inventory: `amount = unit × rate` and
//! `amount_dxe = amount × tied_up_days`. Inputs are free text parsed the
//! same lenient way as the balance sheet ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use inspecta_shared::types::{format_amount, parse_amount};

/// Row names the form starts with.
pub const DEFAULT_ITEM_NAMES: [&str; 4] = [
    "Raw Materials (imported)",
    "Raw Materials (Local)",
    "Work in Process",
    "Finished goods",
];

/// Which input of a row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkingCapitalInput {
    /// Quantity held.
    Unit,
    /// Price per unit.
    Rate,
    /// Days the stock stays tied up.
    TiedUpDays,
}

/// One working capital row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkingCapitalItem {
    /// Row label.
    pub name: String,
    /// Quantity held, as typed.
    pub unit: String,
    /// Price per unit, as typed.
    pub rate: String,
    /// `unit × rate`, two decimals.
    pub amount: String,
    /// Days tied up, as typed.
    pub tied_up_days: String,
    /// `amount × tied_up_days`, two decimals.
    pub amount_dxe: String,
}

impl WorkingCapitalItem {
    /// Creates an empty row.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The four rows a new form starts with.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        DEFAULT_ITEM_NAMES.iter().map(|n| Self::named(*n)).collect()
    }

    /// Updates one input and recalculates the derived columns.
    pub fn set(&mut self, input: WorkingCapitalInput, text: impl Into<String>) {
        let slot = match input {
            WorkingCapitalInput::Unit => &mut self.unit,
            WorkingCapitalInput::Rate => &mut self.rate,
            WorkingCapitalInput::TiedUpDays => &mut self.tied_up_days,
        };
        *slot = text.into();
        self.recalculate();
    }

    /// Recomputes `amount` and `amount_dxe` from the inputs.
    pub fn recalculate(&mut self) {
        let (amount, amount_dxe) = self.values();
        self.amount = format_amount(amount);
        self.amount_dxe = format_amount(amount_dxe);
    }

    /// Returns the unrounded `(amount, amount_dxe)` pair.
    #[must_use]
    pub fn values(&self) -> (Decimal, Decimal) {
        let amount = parse_amount(&self.unit).saturating_mul(parse_amount(&self.rate));
        let amount_dxe = amount.saturating_mul(parse_amount(&self.tied_up_days));
        (amount, amount_dxe)
    }
}

/// Sums the unrounded `amount` column over all rows.
#[must_use]
pub fn total_amount(items: &[WorkingCapitalItem]) -> Decimal {
    items
        .iter()
        .map(|item| item.values().0)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
