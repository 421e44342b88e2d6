//! An inspection being filled in on site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use inspecta_shared::AuthContext;
use inspecta_shared::types::{DraftId, InspectionId};

use super::error::InspectionError;
use super::form::InspectionForm;
use super::media::{MAX_SITE_PHOTOS, MediaFile};
use super::types::{InspectionRecord, InspectionStatus, NewInspection};
use crate::balance_sheet::{DerivedTotals, FinancialTotalsCalculator, Ledger, LedgerField};
use crate::location::{
    LocationTrail, LocationTrailRecorder, PositionProvider, RecorderSettings, TrailPayload,
};
use crate::working_capital::WorkingCapitalInput;

/// The JSON body sent when an inspection is created or updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionSubmission {
    /// Branch the inspection is filed under.
    pub branch_name: String,
    /// Location trail fields.
    #[serde(flatten)]
    pub trail: TrailPayload,
    /// Form sections and status.
    #[serde(flatten)]
    pub form: InspectionForm,
    /// Balance sheet totals, recomputed at submission.
    #[serde(flatten)]
    pub totals: DerivedTotals,
    /// When the submission was built.
    pub submitted_at: DateTime<Utc>,
}

/// Owns the form, its location trail and its derived totals.
///
/// Totals are recomputed after every ledger change, so [`Self::totals`]
/// always matches the ledger.
#[derive(Debug)]
pub struct InspectionSession<P> {
    draft_id: DraftId,
    record_id: Option<InspectionId>,
    form: InspectionForm,
    totals: DerivedTotals,
    recorder: LocationTrailRecorder<P>,
}

impl<P: PositionProvider + 'static> InspectionSession<P> {
    /// Starts a blank inspection.
    pub fn new(provider: P, settings: RecorderSettings) -> Self {
        Self::with_form(InspectionForm::default(), provider, settings)
    }

    /// Starts an inspection for an assigned visit.
    pub fn from_assignment(
        assignment: &NewInspection,
        provider: P,
        settings: RecorderSettings,
    ) -> Self {
        Self::with_form(InspectionForm::from_assignment(assignment), provider, settings)
    }

    /// Reopens a submitted inspection. The stored trail is kept, frozen,
    /// until tracking is started again.
    pub fn from_record(record: &InspectionRecord, provider: P, settings: RecorderSettings) -> Self {
        let form = InspectionForm::from_record(record);
        let trail = LocationTrail::from(record.trail.clone());
        let recorder = LocationTrailRecorder::with_trail(provider, settings, trail);
        let totals = FinancialTotalsCalculator::recompute(&form.ledger);
        Self {
            draft_id: DraftId::new(),
            record_id: Some(record.id),
            form,
            totals,
            recorder,
        }
    }

    fn with_form(form: InspectionForm, provider: P, settings: RecorderSettings) -> Self {
        let totals = FinancialTotalsCalculator::recompute(&form.ledger);
        Self {
            draft_id: DraftId::new(),
            record_id: None,
            form,
            totals,
            recorder: LocationTrailRecorder::new(provider, settings),
        }
    }

    /// Local identifier of this draft.
    pub fn draft_id(&self) -> DraftId {
        self.draft_id
    }

    /// Backend ID when editing a submitted inspection.
    pub fn record_id(&self) -> Option<InspectionId> {
        self.record_id
    }

    /// The form as currently filled in.
    pub fn form(&self) -> &InspectionForm {
        &self.form
    }

    /// Edits the form. Totals are recomputed afterwards.
    pub fn edit_form<R>(&mut self, edit: impl FnOnce(&mut InspectionForm) -> R) -> R {
        let result = edit(&mut self.form);
        self.recompute();
        result
    }

    /// Replaces one ledger field and returns the new totals.
    pub fn set_ledger_field(&mut self, field: LedgerField, text: impl Into<String>) -> DerivedTotals {
        self.form.ledger.set(field, text);
        self.recompute()
    }

    /// Edits the ledger and returns the new totals.
    pub fn edit_ledger(&mut self, edit: impl FnOnce(&mut Ledger)) -> DerivedTotals {
        edit(&mut self.form.ledger);
        self.recompute()
    }

    /// Current balance sheet totals.
    pub fn totals(&self) -> DerivedTotals {
        self.totals
    }

    fn recompute(&mut self) -> DerivedTotals {
        self.totals = FinancialTotalsCalculator::recompute(&self.form.ledger);
        self.totals
    }

    /// Updates one input of a working capital row.
    pub fn set_working_capital(
        &mut self,
        index: usize,
        input: WorkingCapitalInput,
        text: impl Into<String>,
    ) -> Result<(), InspectionError> {
        let len = self.form.working_capital_items.len();
        let item = self
            .form
            .working_capital_items
            .get_mut(index)
            .ok_or(InspectionError::RowOutOfRange { index, len })?;
        item.set(input, text);
        Ok(())
    }

    /// Attaches a site photo and returns the photo count.
    pub fn add_photo(&mut self, photo: MediaFile) -> Result<usize, InspectionError> {
        let photos = &mut self.form.media.site_photos;
        if photos.len() >= MAX_SITE_PHOTOS {
            return Err(InspectionError::TooManyPhotos {
                max: MAX_SITE_PHOTOS,
            });
        }
        photos.push(photo);
        Ok(photos.len())
    }

    /// Sets the review status.
    pub fn set_status(&mut self, status: InspectionStatus) {
        self.form.status = status;
    }

    /// Starts recording the location trail.
    pub fn start_tracking(&self) -> Result<LocationTrail, InspectionError> {
        Ok(self.recorder.start()?)
    }

    /// Stops recording and returns the number of points.
    pub fn stop_tracking(&self) -> Option<usize> {
        self.recorder.stop()
    }

    /// A copy of the location trail.
    pub fn trail(&self) -> LocationTrail {
        self.recorder.snapshot()
    }

    /// The trail recorder, e.g. to subscribe to its events.
    pub fn recorder(&self) -> &LocationTrailRecorder<P> {
        &self.recorder
    }

    /// Builds the submission body.
    ///
    /// Stops an active trail first, so the payload carries the frozen trail
    /// with its end time.
    ///
    /// # Errors
    ///
    /// Returns [`InspectionError::NotSignedIn`] without a session and
    /// [`InspectionError::MissingBranch`] if the session has no branch.
    pub fn submit(&self, auth: &AuthContext) -> Result<InspectionSubmission, InspectionError> {
        if !auth.is_signed_in() {
            return Err(InspectionError::NotSignedIn);
        }
        let branch_name = auth.branch_name().ok_or(InspectionError::MissingBranch)?;

        if let Some(points) = self.recorder.stop() {
            debug!(points, "Stopped location tracking for submission");
        }

        let trail = TrailPayload::from(self.recorder.snapshot());
        let totals = FinancialTotalsCalculator::recompute(&self.form.ledger);

        info!(
            draft_id = %self.draft_id,
            record_id = ?self.record_id.map(InspectionId::into_inner),
            branch = %branch_name,
            points = trail.total_location_points,
            status = %self.form.status,
            "Inspection ready for submission"
        );

        Ok(InspectionSubmission {
            branch_name,
            trail,
            form: self.form.clone(),
            totals,
            submitted_at: Utc::now(),
        })
    }
}
