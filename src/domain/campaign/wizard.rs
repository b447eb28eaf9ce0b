//! CampaignWizard - the stateful controller for draft composition.
//!
//! One wizard instance exists per in-progress creation session. It owns
//! the draft, the current step, and the submission status, and is the
//! only mutable piece of the campaign core. All mutations are
//! synchronous; the asynchronous persistence call happens in the
//! application layer between [`CampaignWizard::begin_submission`] and
//! one of [`CampaignWizard::complete_submission`] /
//! [`CampaignWizard::abort_submission`].

use crate::domain::foundation::{StateMachine, UserId};
use serde::{Deserialize, Serialize};

use super::{
    details_report, step_is_reachable, validation, CampaignError, CampaignSubmission,
    DetailsReport, DraftCampaign, DraftEdit, SubmissionStatus, WizardStep,
};

/// The campaign creation wizard.
///
/// # Invariants
///
/// - `draft.credits() <= available_credits` after every mutation
/// - `step == Template` only if the Details step validates at the time
///   the transition was taken
/// - at most one submission attempt outstanding (`status == InFlight`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignWizard {
    draft: DraftCampaign,
    step: WizardStep,
    /// Balance seeded once per form session from the credit balance
    /// provider; authoritative for the session duration.
    available_credits: u32,
    status: SubmissionStatus,
}

impl CampaignWizard {
    /// Opens a new wizard session with an empty draft.
    pub fn new(available_credits: u32) -> Self {
        Self {
            draft: DraftCampaign::empty(),
            step: WizardStep::Details,
            available_credits,
            status: SubmissionStatus::Composing,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Read surface (consumed by the presentation layer on every render)
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the current draft.
    pub fn draft(&self) -> &DraftCampaign {
        &self.draft
    }

    /// Returns the current wizard step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns the session's credit balance.
    pub fn available_credits(&self) -> u32 {
        self.available_credits
    }

    /// Returns the submission status.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns true while a persistence call is outstanding.
    pub fn is_submission_in_flight(&self) -> bool {
        self.status.is_in_flight()
    }

    /// Reports which required Details fields are still missing.
    pub fn details_report(&self) -> DetailsReport {
        details_report(&self.draft)
    }

    /// True iff the named step validates against the current draft.
    pub fn step_is_valid(&self, step: WizardStep) -> bool {
        step_is_reachable(&self.draft, step)
    }

    /// True iff the draft passes both step checks.
    pub fn can_submit(&self) -> bool {
        validation::can_submit(&self.draft)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a field-level edit to the draft. Always succeeds;
    /// validation happens at transition and submission time only.
    pub fn apply(&mut self, edit: DraftEdit) {
        self.draft.apply(edit, self.available_credits);
    }

    /// Requests a step change.
    ///
    /// Backward navigation to `Details` always succeeds. Forward
    /// navigation to `Template` succeeds only when the Details step
    /// validates; otherwise the request is a no-op and the wizard stays
    /// where it is. Callers surface the reason for a refused transition
    /// via [`CampaignWizard::details_report`].
    ///
    /// Returns the step the wizard is on after the request.
    pub fn go_to(&mut self, target: WizardStep) -> WizardStep {
        if step_is_reachable(&self.draft, target) {
            self.step = target;
        }
        self.step
    }

    /// Replaces the draft with an empty one and returns to the Details
    /// step. The session's credit balance is kept.
    pub fn reset(&mut self) {
        self.draft = DraftCampaign::empty();
        self.step = WizardStep::Details;
        self.status = SubmissionStatus::Composing;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submission lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Validates the complete draft and marks the submission in flight.
    ///
    /// # Errors
    ///
    /// - `SubmissionInProgress` if a submission is already outstanding
    /// - `DraftIncomplete` if either step check fails; draft and step
    ///   are left unchanged
    pub fn begin_submission(&mut self, user_id: UserId) -> Result<CampaignSubmission, CampaignError> {
        if self.status.is_in_flight() {
            return Err(CampaignError::SubmissionInProgress);
        }

        let submission = CampaignSubmission::from_draft(user_id, &self.draft)?;

        self.status = self
            .status
            .transition_to(SubmissionStatus::InFlight)
            .map_err(|e| CampaignError::invalid_state(e.to_string()))?;

        Ok(submission)
    }

    /// Records persistence success: the draft's lifetime ends and the
    /// wizard resets to a fresh empty draft on the Details step.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if no submission is in flight
    pub fn complete_submission(&mut self) -> Result<(), CampaignError> {
        self.status = self
            .status
            .transition_to(SubmissionStatus::Submitted)
            .map_err(|e| CampaignError::invalid_state(e.to_string()))?;
        self.reset();
        Ok(())
    }

    /// Records persistence failure: the draft is retained unchanged so
    /// the user can retry without re-entering data.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if no submission is in flight
    pub fn abort_submission(&mut self) -> Result<(), CampaignError> {
        self.status = self
            .status
            .transition_to(SubmissionStatus::Composing)
            .map_err(|e| CampaignError::invalid_state(e.to_string()))?;
        Ok(())
    }
}
