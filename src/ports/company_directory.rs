//! Company directory port.

use crate::domain::campaign::Company;
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Search access to the external company directory.
///
/// The core does not retry: callers map a failed or empty search to an
/// empty result list at the application boundary.
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// Searches companies matching the query.
    ///
    /// # Errors
    ///
    /// - `DirectoryError` if the directory is unreachable or rejects
    ///   the request
    async fn search(&self, query: &str) -> Result<Vec<Company>, DomainError>;
}
