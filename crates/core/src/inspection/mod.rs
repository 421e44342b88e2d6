//! Investment inspection forms.
//!
//! This module implements the inspection an inspector fills in on site:
//! - Typed sections A to M with the backend's field names
//! - Records, statuses and assignments exchanged with the backend
//! - The in-progress session that ties the form to its location trail and
//!   balance sheet totals, and builds the submission payload

mod checklist;
mod error;
mod form;
mod media;
mod sections;
mod session;
mod types;


pub use checklist::{Checklist, ChecklistItem};
pub use error::InspectionError;
pub use form::{DEFAULT_COMPETITOR_ROWS, InspectionForm};
pub use media::{MAX_SITE_PHOTOS, MediaFile, SiteMedia};
pub use sections::{
    BusinessAnalysis, ClientInfo, Competitor, GodownParticulars, KeyEmployee, OwnerInfo, Partner,
    PresentOutstanding, ProposedFacility, Purpose,
};
pub use session::{InspectionSession, InspectionSubmission};
pub use types::{
    AssignmentStatus, InspectionRecord, InspectionStatus, NewInspection, NewInspectionRequest,
};
