//! Typed form sections.
//!
//! Scalar sections are flattened into the submission payload, so their
//! field names are the backend column names. Row types inside lists keep
//! the camelCase names the backend stores verbatim.

use serde::{Deserialize, Serialize};

/// Section A: client information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ClientInfo {
    pub client_name: String,
    pub group_name: String,
    pub industry_name: String,
    pub nature_of_business: String,
    pub legal_status: String,
    pub date_of_establishment: String,
    pub office_address: String,
    pub showroom_address: String,
    pub factory_address: String,
    pub phone_number: String,
    pub account_number: String,
    pub account_id: String,
    pub tin_number: String,
    pub date_of_opening: String,
    pub vat_reg_number: String,
    pub first_investment_date: String,
    pub sector_code: String,
    pub trade_license: String,
    pub economic_purpose_code: String,
    pub investment_category: String,
}

/// Section B: owner information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct OwnerInfo {
    pub owner_name: String,
    pub owner_age: String,
    pub father_name: String,
    pub mother_name: String,
    pub spouse_name: String,
    pub academic_qualification: String,
    pub children_info: String,
    pub business_successor: String,
    pub residential_address: String,
    pub permanent_address: String,
}

/// Section C row: a partner or director.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Partner {
    pub name: String,
    pub age: String,
    pub qualification: String,
    pub share: String,
    pub status: String,
    pub relationship: String,
}

/// Section D: purpose of the investment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Purpose {
    pub purpose_investment: String,
    pub purpose_bank_guarantee: String,
    pub period_investment: String,
}

/// Section E: proposed facilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ProposedFacility {
    pub facility_type: String,
    pub existing_limit: String,
    pub applied_limit: String,
    pub recommended_limit: String,
    pub bank_percentage: String,
    pub client_percentage: String,
}

/// Section F: present outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct PresentOutstanding {
    pub outstanding_type: String,
    pub limit_amount: String,
    pub net_outstanding: String,
    pub gross_outstanding: String,
}

/// Section G: business analysis and manpower.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct BusinessAnalysis {
    pub market_situation: String,
    pub client_position: String,
    pub business_reputation: String,
    pub production_type: String,
    pub product_name: String,
    pub production_capacity: String,
    pub actual_production: String,
    pub profitability_observation: String,
    pub male_officer: String,
    pub female_officer: String,
    pub skilled_officer: String,
    pub unskilled_officer: String,
    pub male_worker: String,
    pub female_worker: String,
    pub skilled_worker: String,
    pub unskilled_worker: String,
}

/// Section G row: a competitor of the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct Competitor {
    pub name: String,
    pub address: String,
    pub market_share: String,
}

/// Section G row: a key employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct KeyEmployee {
    pub name: String,
    pub designation: String,
    pub age: String,
    pub qualification: String,
    pub experience: String,
}

/// Section J: godown (warehouse) particulars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GodownParticulars {
    /// Where the godown is.
    pub godown_location: String,
    /// Storage capacity.
    pub godown_capacity: String,
    /// Floor space.
    pub godown_space: String,
    /// Construction type.
    pub godown_nature: String,
    /// Owner of the premises.
    pub godown_owner: String,
    /// Distance from the bank branch.
    pub distance_from_branch: String,
    /// Goods to be stored.
    pub items_to_store: String,
    /// Warehouse license available.
    pub warehouse_license: bool,
    /// Guard posted.
    pub godown_guard: bool,
    /// Damp proof.
    pub damp_proof: bool,
    /// Easy access for trucks.
    pub easy_access: bool,
    /// Letter of disclaimer obtained.
    pub letter_disclaimer: bool,
    /// Insurance policy in force.
    pub insurance_policy: bool,
    /// Godown is hired.
    pub godown_hired: bool,
}
