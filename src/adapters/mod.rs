//! Adapters - concrete implementations of the collaborator ports.

pub mod balance;
pub mod directory;
pub mod store;

pub use balance::FixedCreditBalance;
pub use directory::{HttpCompanyDirectory, InMemoryCompanyDirectory};
pub use store::InMemoryCampaignStore;
