//! GetCampaignHandler - lookup of a submitted campaign by id.

use std::sync::Arc;

use crate::domain::campaign::{CampaignError, CampaignRecord};
use crate::domain::foundation::CampaignId;
use crate::ports::CampaignStore;

/// Handler backing the campaign detail view.
pub struct GetCampaignHandler {
    store: Arc<dyn CampaignStore>,
}

impl GetCampaignHandler {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    /// Fetches a submitted campaign.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no campaign with the given id exists
    pub async fn handle(&self, id: &CampaignId) -> Result<CampaignRecord, CampaignError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CampaignError::not_found(*id))
    }
}
