//! The inspection form: every section an inspector fills in on site.

use serde::{Deserialize, Serialize};

use super::checklist::Checklist;
use super::media::SiteMedia;
use super::sections::{
    BusinessAnalysis, ClientInfo, Competitor, GodownParticulars, KeyEmployee, OwnerInfo, Partner,
    PresentOutstanding, ProposedFacility, Purpose,
};
use super::types::{InspectionRecord, InspectionStatus, NewInspection};
use crate::balance_sheet::Ledger;
use crate::working_capital::WorkingCapitalItem;

/// Blank competitor rows a new form starts with.
pub const DEFAULT_COMPETITOR_ROWS: usize = 5;

/// All sections of an inspection, A to M, plus its status.
///
/// Serializes flat: scalar sections contribute their fields directly to
/// the enclosing JSON object, list sections are nested under their own key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectionForm {
    /// Section A.
    #[serde(flatten)]
    pub client: ClientInfo,
    /// Section B.
    #[serde(flatten)]
    pub owner: OwnerInfo,
    /// Section C.
    pub partners_directors: Vec<Partner>,
    /// Section D.
    #[serde(flatten)]
    pub purpose: Purpose,
    /// Section E.
    #[serde(flatten)]
    pub facility: ProposedFacility,
    /// Section F.
    #[serde(flatten)]
    pub outstanding: PresentOutstanding,
    /// Section G.
    #[serde(flatten)]
    pub business: BusinessAnalysis,
    /// Section G competitors.
    pub competitors: Vec<Competitor>,
    /// Section G key employees.
    pub key_employees: Vec<KeyEmployee>,
    /// Section H.
    #[serde(flatten)]
    pub ledger: Ledger,
    /// Section I.
    pub working_capital_items: Vec<WorkingCapitalItem>,
    /// Section J.
    #[serde(flatten)]
    pub godown: GodownParticulars,
    /// Section K.
    pub checklist_items: Checklist,
    /// Sections L and M.
    #[serde(flatten)]
    pub media: SiteMedia,
    /// Review status.
    pub status: InspectionStatus,
}

impl Default for InspectionForm {
    fn default() -> Self {
        Self {
            client: ClientInfo::default(),
            owner: OwnerInfo::default(),
            partners_directors: vec![Partner::default()],
            purpose: Purpose::default(),
            facility: ProposedFacility::default(),
            outstanding: PresentOutstanding::default(),
            business: BusinessAnalysis::default(),
            competitors: vec![Competitor::default(); DEFAULT_COMPETITOR_ROWS],
            key_employees: vec![KeyEmployee::default()],
            ledger: Ledger::default(),
            working_capital_items: WorkingCapitalItem::defaults(),
            godown: GodownParticulars::default(),
            checklist_items: Checklist::default(),
            media: SiteMedia::default(),
            status: InspectionStatus::default(),
        }
    }
}

impl InspectionForm {
    /// Starts a form for an assigned visit, prefilled with the client's
    /// name, industry and phone number.
    #[must_use]
    pub fn from_assignment(assignment: &NewInspection) -> Self {
        let mut form = Self::default();
        form.client.client_name.clone_from(&assignment.client_name);
        form.client.industry_name.clone_from(&assignment.industry_name);
        form.client.phone_number.clone_from(&assignment.phone_number);
        form
    }

    /// Reopens a submitted inspection for editing.
    #[must_use]
    pub fn from_record(record: &InspectionRecord) -> Self {
        record.form.clone()
    }
}
