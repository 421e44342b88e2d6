//! Section K: verification checklist.

use std::collections::HashMap;
use std::fmt;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

macro_rules! checklist_items {
    ($( $variant:ident => $label:literal; )+) => {
        /// One checklist question.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum ChecklistItem {
            $($variant,)+
        }

        impl ChecklistItem {
            /// Every question, in form order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The question as shown to the operator and stored by the backend.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            /// Looks a question up by its label.
            #[must_use]
            pub fn from_label(label: &str) -> Option<Self> {
                match label {
                    $($label => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

checklist_items! {
    EstablishmentVerified => "Business establishment physically verified";
    HonestyAscertained => "Honesty and integrity ascertained";
    ConfidentialReport => "Confidential Report obtained";
    CibReport => "CIB report obtained";
    ShariahPermissible => "Items permissible by Islamic Shariah";
    NotRestrictedByBangladeshBank => "Items not restricted by Bangladesh Bank";
    InvestmentPolicyPermissible => "Items permissible by Investment Policy";
    MarketPriceVerified => "Market Price verified";
    ConstantMarketDemand => "Constant market demand";
    FormF167A => "F-167 A duly filled";
    FormF167B => "F-167 B property filled";
    ApplicationVerified => "Application particulars verified";
    IrcErcVatCopies => "IRC, ERC, VAT copies enclosed";
    TinCertificate => "TIN Certificate enclosed";
    RentalAgreement => "Rental Agreement enclosed";
    TradeLicense => "Trade License enclosed";
    PartnershipDeed => "Partnership Deed enclosed";
    MemorandumArticles => "Memorandum & Articles enclosed";
    BoardResolution => "Board resolution enclosed";
    DirectorsParticulars => "Directors particulars enclosed";
    CurrentAccountStatement => "Current Account Statement enclosed";
    CreditorsDebtorsList => "Creditors/Debtors list enclosed";
    IrcFormDocuments => "IRC form with documents enclosed";
    AuditedBalanceSheet => "Audited Balance sheet enclosed";
}

impl fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers to every checklist question: yes, no or not answered yet.
///
/// On the wire this is a JSON object keyed by question label, in form
/// order. Unknown labels are ignored when reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    answers: Vec<Option<bool>>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self {
            answers: vec![None; ChecklistItem::ALL.len()],
        }
    }
}

impl Checklist {
    /// The answer to one question.
    #[must_use]
    pub fn get(&self, item: ChecklistItem) -> Option<bool> {
        self.answers.get(item as usize).copied().flatten()
    }

    /// Records (or clears, with `None`) the answer to one question.
    pub fn set(&mut self, item: ChecklistItem, answer: Option<bool>) {
        if let Some(slot) = self.answers.get_mut(item as usize) {
            *slot = answer;
        }
    }

    /// Iterates over every question with its answer.
    pub fn iter(&self) -> impl Iterator<Item = (ChecklistItem, Option<bool>)> + '_ {
        ChecklistItem::ALL.iter().map(|item| (*item, self.get(*item)))
    }

    /// Number of questions answered either way.
    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }
}

impl Serialize for Checklist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ChecklistItem::ALL.len()))?;
        for (item, answer) in self.iter() {
            map.serialize_entry(item.label(), &answer)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Checklist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<HashMap<String, Option<bool>>>::deserialize(deserializer)?;
        let mut checklist = Self::default();
        for (label, answer) in raw.unwrap_or_default() {
            if let Some(item) = ChecklistItem::from_label(&label) {
                checklist.set(item, answer);
            }
        }
        Ok(checklist)
    }
}
