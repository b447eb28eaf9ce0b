//! SubmitCampaignHandler - the submission gate.
//!
//! Re-validates the complete draft, marks the submission in flight, and
//! hands the immutable record to the campaign store. Success resets the
//! wizard; failure keeps the draft so the user can retry without
//! re-entering data. The wizard lock is released while the store call
//! is outstanding, so a second submit during that window is rejected by
//! the in-flight guard rather than queued.

use std::sync::Arc;

use crate::application::session::DraftSession;
use crate::domain::campaign::{CampaignError, CampaignRecord};
use crate::ports::CampaignStore;

/// Handler for campaign submission.
pub struct SubmitCampaignHandler {
    store: Arc<dyn CampaignStore>,
}

impl SubmitCampaignHandler {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    /// Submits the session's draft.
    ///
    /// # Errors
    ///
    /// - `SubmissionInProgress` if a submission is already outstanding
    /// - `DraftIncomplete` if either step check fails
    /// - `StoreRejected` with the collaborator's reason on persistence
    ///   failure; the draft is retained unchanged
    pub async fn handle(&self, session: &DraftSession) -> Result<CampaignRecord, CampaignError> {
        let submission = session.begin_submission()?;

        match self.store.create(submission.clone()).await {
            Ok(id) => {
                session.complete_submission()?;
                tracing::info!(campaign_id = %id, user_id = %submission.user_id(), "campaign submitted");
                Ok(CampaignRecord { id, submission })
            }
            Err(err) => {
                session.abort_submission()?;
                tracing::warn!(user_id = %submission.user_id(), error = %err, "campaign submission failed");
                Err(err.into())
            }
        }
    }
}
