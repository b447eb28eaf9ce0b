//! Ports - async trait contracts for the external collaborators.
//!
//! The campaign core consumes three collaborators: the company
//! directory (search), the credit balance provider (per-session budget
//! seed), and the campaign store (persistence of submissions).

mod campaign_store;
mod company_directory;
mod credit_balance;

pub use campaign_store::CampaignStore;
pub use company_directory::CompanyDirectory;
pub use credit_balance::CreditBalanceProvider;
