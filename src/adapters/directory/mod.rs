//! Company directory adapters.

mod http_client;
mod in_memory;

pub use http_client::HttpCompanyDirectory;
pub use in_memory::InMemoryCompanyDirectory;
