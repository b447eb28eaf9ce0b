//! In-memory campaign store for testing and local runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::campaign::{CampaignRecord, CampaignSubmission};
use crate::domain::foundation::{CampaignId, DomainError, ErrorCode, UserId};
use crate::ports::CampaignStore;

/// Campaign store backed by a vector, with optional failure injection.
pub struct InMemoryCampaignStore {
    records: RwLock<Vec<CampaignRecord>>,
    fail_reason: Option<String>,
}

impl InMemoryCampaignStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            fail_reason: None,
        }
    }

    /// Creates a store whose `create` calls fail with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            fail_reason: Some(reason.into()),
        }
    }

    /// Returns the number of persisted campaigns (for test assertions).
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for InMemoryCampaignStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CampaignStore for InMemoryCampaignStore {
    async fn create(&self, submission: CampaignSubmission) -> Result<CampaignId, DomainError> {
        if let Some(reason) = &self.fail_reason {
            return Err(DomainError::new(ErrorCode::StoreError, reason.clone()));
        }

        let id = CampaignId::new();
        self.records.write().await.push(CampaignRecord {
            id,
            submission,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: &CampaignId) -> Result<Option<CampaignRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| &r.id == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<CampaignRecord>, DomainError> {
        // Insertion order is creation order, so newest-first is a
        // reverse scan.
        Ok(self
            .records
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| r.submission.user_id() == user_id)
            .cloned()
            .collect())
    }
}
