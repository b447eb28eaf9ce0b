//! StartDraftHandler - opens a new campaign creation session.

use std::sync::Arc;

use crate::application::session::DraftSession;
use crate::domain::campaign::CampaignError;
use crate::domain::foundation::UserId;
use crate::ports::CreditBalanceProvider;

/// Command to open a campaign creation session.
#[derive(Debug, Clone)]
pub struct StartDraftCommand {
    pub user_id: UserId,
}

/// Handler that seeds a new wizard session with the user's credit
/// balance. The balance is queried once here and held for the session
/// duration.
pub struct StartDraftHandler {
    balance: Arc<dyn CreditBalanceProvider>,
}

impl StartDraftHandler {
    pub fn new(balance: Arc<dyn CreditBalanceProvider>) -> Self {
        Self { balance }
    }

    pub async fn handle(&self, cmd: StartDraftCommand) -> Result<DraftSession, CampaignError> {
        let available = self.balance.available_credits(&cmd.user_id).await?;

        tracing::debug!(
            user_id = %cmd.user_id,
            available_credits = available,
            "opened campaign draft session"
        );

        Ok(DraftSession::new(cmd.user_id, available))
    }
}
