//! Campaign store port (persistence of submitted campaigns).

use crate::domain::campaign::{CampaignRecord, CampaignSubmission};
use crate::domain::foundation::{CampaignId, DomainError, UserId};
use async_trait::async_trait;

/// Persistence for campaign submissions.
///
/// A failed `create` carries a human-readable reason which the core
/// passes through to the caller unmodified.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Persists a submission and returns the assigned campaign id.
    ///
    /// # Errors
    ///
    /// - `StoreError` if persistence fails; the message is the
    ///   user-visible reason
    async fn create(&self, submission: CampaignSubmission) -> Result<CampaignId, DomainError>;

    /// Finds a persisted campaign by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CampaignId) -> Result<Option<CampaignRecord>, DomainError>;

    /// Lists all campaigns submitted by a user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<CampaignRecord>, DomainError>;
}
