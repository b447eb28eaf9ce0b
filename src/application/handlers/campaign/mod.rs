//! Campaign command handlers.

mod get_campaign;
mod search_companies;
mod start_draft;
mod submit_campaign;

pub use get_campaign::GetCampaignHandler;
pub use search_companies::SearchCompaniesHandler;
pub use start_draft::{StartDraftCommand, StartDraftHandler};
pub use submit_campaign::SubmitCampaignHandler;
