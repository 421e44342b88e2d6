//! Ledger and derived totals types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use inspecta_shared::types::parse_amount;

/// Balance sheet grouping of a ledger field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerGroup {
    /// Cash, stock, receivables and other short-lived assets.
    CurrentAssets,
    /// Land, buildings, machinery and other long-lived assets.
    FixedAssets,
    /// Bank investments, borrowings and payables due within a year.
    CurrentLiabilities,
    /// Long-term liabilities.
    LongTermLiabilities,
    /// Other non-current liabilities.
    OtherNonCurrentLiabilities,
    /// Paid-up capital, retained earnings and other resources.
    Equity,
}

macro_rules! ledger_fields {
    ($( $variant:ident => $field:ident, $group:ident, $doc:expr; )+) => {
        /// One named amount of the ledger.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LedgerField {
            $(
                #[doc = $doc]
                $variant,
            )+
        }

        impl LedgerField {
            /// Every ledger field, in form order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the backend field name.
            #[must_use]
            pub const fn wire_name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($field),)+
                }
            }

            /// Returns the balance sheet group the field rolls up into.
            #[must_use]
            pub const fn group(self) -> LedgerGroup {
                match self {
                    $(Self::$variant => LedgerGroup::$group,)+
                }
            }
        }

        impl std::str::FromStr for LedgerField {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $(stringify!($field) => Ok(Self::$variant),)+
                    _ => Err(format!("Unknown ledger field: {s}")),
                }
            }
        }

        /// Section H: operator-entered balance sheet amounts.
        ///
        /// Every field is free text exactly as typed. Blank or malformed
        /// text counts as zero when totals are computed.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Ledger {
            $(
                #[doc = $doc]
                pub $field: String,
            )+
        }

        impl Ledger {
            /// Returns the raw text of a field.
            #[must_use]
            pub fn get(&self, field: LedgerField) -> &str {
                match field {
                    $(LedgerField::$variant => &self.$field,)+
                }
            }

            /// Replaces the raw text of a field.
            pub fn set(&mut self, field: LedgerField, text: impl Into<String>) {
                let slot = match field {
                    $(LedgerField::$variant => &mut self.$field,)+
                };
                *slot = text.into();
            }
        }
    };
}

ledger_fields! {
    CashBalance => cash_balance, CurrentAssets, "Cash balance.";
    StockTradeFinished => stock_trade_finished, CurrentAssets, "Stock in trade (finished goods).";
    StockTradeFinancial => stock_trade_financial, CurrentAssets, "Stock in trade financed by the bank.";
    AccountsReceivable => accounts_receivable, CurrentAssets, "Accounts receivable.";
    AdvanceDeposit => advance_deposit, CurrentAssets, "Advances and deposits.";
    OtherCurrentAssets => other_current_assets, CurrentAssets, "Other current assets.";
    LandBuilding => land_building, FixedAssets, "Land and building.";
    PlantMachinery => plant_machinery, FixedAssets, "Plant and machinery.";
    OtherAssets => other_assets, FixedAssets, "Other fixed assets.";
    IbblInvestment => ibbl_investment, CurrentLiabilities, "Investment outstanding with IBBL.";
    OtherBanksInvestment => other_banks_investment, CurrentLiabilities, "Investment outstanding with other banks.";
    BorrowingSources => borrowing_sources, CurrentLiabilities, "Borrowings from other sources.";
    AccountsPayable => accounts_payable, CurrentLiabilities, "Accounts payable.";
    OtherCurrentLiabilities => other_current_liabilities, CurrentLiabilities, "Other current liabilities.";
    LongTermLiabilities => long_term_liabilities, LongTermLiabilities, "Long-term liabilities.";
    OtherNonCurrentLiabilities => other_non_current_liabilities, OtherNonCurrentLiabilities, "Other non-current liabilities.";
    PaidUpCapital => paid_up_capital, Equity, "Paid-up capital.";
    RetainedEarning => retained_earning, Equity, "Retained earnings.";
    Resources => resources, Equity, "Other resources.";
}

impl Ledger {
    /// Returns the parsed amount of a field (zero if blank or malformed).
    #[must_use]
    pub fn amount(&self, field: LedgerField) -> Decimal {
        parse_amount(self.get(field))
    }
}

impl std::fmt::Display for LedgerField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Totals derived from a [`Ledger`].
///
/// Serialized as JSON numbers next to the raw ledger fields when an
/// inspection is submitted. Never authoritative: always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedTotals {
    /// Sum of the current asset fields.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_assets_subtotal: Decimal,
    /// Sum of the fixed asset fields.
    #[serde(with = "rust_decimal::serde::float")]
    pub fixed_assets_subtotal: Decimal,
    /// Current plus fixed assets.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_assets: Decimal,
    /// Sum of the current liability fields.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_liabilities_subtotal: Decimal,
    /// Current, long-term and other non-current liabilities.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_liabilities: Decimal,
    /// Sum of the equity fields.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_equity: Decimal,
    /// Total liabilities plus total equity.
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total: Decimal,
    /// Total assets minus total liabilities. May be negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_worth: Decimal,
}
