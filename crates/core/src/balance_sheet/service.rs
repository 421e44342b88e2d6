//! Totals recomputation.

use rust_decimal::Decimal;

use super::types::{DerivedTotals, Ledger, LedgerField, LedgerGroup};

/// Recomputes [`DerivedTotals`] from a [`Ledger`].
pub struct FinancialTotalsCalculator;

impl FinancialTotalsCalculator {
    /// Computes every derived total from scratch.
    ///
    /// Total and deterministic: malformed text counts as zero, negative
    /// amounts flow through unchanged and nothing is rounded. Sums saturate
    /// at the `Decimal` range instead of overflowing.
    #[must_use]
    pub fn recompute(ledger: &Ledger) -> DerivedTotals {
        let current_assets_subtotal = Self::group_total(ledger, LedgerGroup::CurrentAssets);
        let fixed_assets_subtotal = Self::group_total(ledger, LedgerGroup::FixedAssets);
        let total_assets = current_assets_subtotal.saturating_add(fixed_assets_subtotal);

        let current_liabilities_subtotal =
            Self::group_total(ledger, LedgerGroup::CurrentLiabilities);
        let total_liabilities = current_liabilities_subtotal
            .saturating_add(Self::group_total(ledger, LedgerGroup::LongTermLiabilities))
            .saturating_add(Self::group_total(
                ledger,
                LedgerGroup::OtherNonCurrentLiabilities,
            ));

        let total_equity = Self::group_total(ledger, LedgerGroup::Equity);
        let grand_total = total_liabilities.saturating_add(total_equity);
        let net_worth = total_assets.saturating_sub(total_liabilities);

        DerivedTotals {
            current_assets_subtotal,
            fixed_assets_subtotal,
            total_assets,
            current_liabilities_subtotal,
            total_liabilities,
            total_equity,
            grand_total,
            net_worth,
        }
    }

    /// Sums the parsed amounts of every field in `group`.
    #[must_use]
    pub fn group_total(ledger: &Ledger, group: LedgerGroup) -> Decimal {
        LedgerField::ALL
            .iter()
            .filter(|field| field.group() == group)
            .map(|&field| ledger.amount(field))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}
