//! DraftSession - the shared handle to one user's wizard.
//!
//! One session exists per in-progress creation form. The wizard itself
//! is synchronous and single-writer; the session wraps it in a mutex so
//! the submit handler can release the lock across its await on the
//! persistence port while the in-flight guard stays visible to every
//! caller. The lock is never held across an await point.

use std::sync::Mutex;

use crate::domain::campaign::{
    CampaignError, CampaignSubmission, CampaignWizard, DetailsReport, DraftCampaign, DraftEdit,
    SubmissionStatus, WizardStep,
};
use crate::domain::foundation::UserId;

/// Shared handle to one user's campaign creation wizard.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned, which only happens
/// after a panic inside another wizard operation.
pub struct DraftSession {
    user_id: UserId,
    wizard: Mutex<CampaignWizard>,
}

impl DraftSession {
    /// Opens a session with an empty draft and the given credit balance.
    pub fn new(user_id: UserId, available_credits: u32) -> Self {
        Self {
            user_id,
            wizard: Mutex::new(CampaignWizard::new(available_credits)),
        }
    }

    /// Returns the owning user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read surface
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns a snapshot of the current draft.
    pub fn draft(&self) -> DraftCampaign {
        self.lock().draft().clone()
    }

    /// Returns the current wizard step.
    pub fn step(&self) -> WizardStep {
        self.lock().step()
    }

    /// Returns the session's credit balance.
    pub fn available_credits(&self) -> u32 {
        self.lock().available_credits()
    }

    /// Returns the submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.lock().status()
    }

    /// Returns true while a persistence call is outstanding.
    pub fn is_submission_in_flight(&self) -> bool {
        self.lock().is_submission_in_flight()
    }

    /// Reports which required Details fields are still missing.
    pub fn details_report(&self) -> DetailsReport {
        self.lock().details_report()
    }

    /// True iff the named step validates against the current draft.
    pub fn step_is_valid(&self, step: WizardStep) -> bool {
        self.lock().step_is_valid(step)
    }

    /// True iff the draft passes both step checks.
    pub fn can_submit(&self) -> bool {
        self.lock().can_submit()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a field-level edit to the draft.
    pub fn apply(&self, edit: DraftEdit) {
        self.lock().apply(edit);
    }

    /// Requests a step change; returns the step after the request.
    pub fn go_to(&self, target: WizardStep) -> WizardStep {
        self.lock().go_to(target)
    }

    /// Discards the draft and returns to an empty Details step.
    pub fn reset(&self) {
        self.lock().reset();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission lifecycle (driven by SubmitCampaignHandler)
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates the draft and marks the submission in flight.
    pub fn begin_submission(&self) -> Result<CampaignSubmission, CampaignError> {
        self.lock().begin_submission(self.user_id.clone())
    }

    /// Records persistence success and resets the wizard.
    pub fn complete_submission(&self) -> Result<(), CampaignError> {
        self.lock().complete_submission()
    }

    /// Records persistence failure; the draft is retained for retry.
    pub fn abort_submission(&self) -> Result<(), CampaignError> {
        self.lock().abort_submission()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CampaignWizard> {
        self.wizard.lock().expect("DraftSession: wizard lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> DraftSession {
        DraftSession::new(UserId::new("user-123").unwrap(), 500)
    }

    #[test]
    fn new_session_starts_on_details() {
        let session = test_session();
        assert_eq!(session.step(), WizardStep::Details);
        assert_eq!(session.available_credits(), 500);
        assert!(!session.is_submission_in_flight());
    }

    #[test]
    fn edits_are_visible_through_the_snapshot() {
        let session = test_session();
        session.apply(DraftEdit::JobTitle("Engineer".into()));
        assert_eq!(session.draft().job_title(), "Engineer");
    }

    #[test]
    fn navigation_is_gated_like_the_wizard() {
        let session = test_session();
        assert_eq!(session.go_to(WizardStep::Template), WizardStep::Details);
        assert!(!session.step_is_valid(WizardStep::Template));
    }

    #[test]
    fn session_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<DraftSession>();
    }
}
