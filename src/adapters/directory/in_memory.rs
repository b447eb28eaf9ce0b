//! In-memory company directory for testing and local runs.

use async_trait::async_trait;

use crate::domain::campaign::Company;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::CompanyDirectory;

/// Company directory backed by a fixed list, matched by
/// case-insensitive substring.
pub struct InMemoryCompanyDirectory {
    companies: Vec<Company>,
    fail: bool,
}

impl InMemoryCompanyDirectory {
    /// Creates a directory over the given companies.
    pub fn new(companies: Vec<Company>) -> Self {
        Self {
            companies,
            fail: false,
        }
    }

    /// Creates a directory whose searches always fail (for tests).
    pub fn failing() -> Self {
        Self {
            companies: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CompanyDirectory for InMemoryCompanyDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Company>, DomainError> {
        if self.fail {
            return Err(DomainError::new(
                ErrorCode::DirectoryError,
                "Simulated directory failure",
            ));
        }

        let needle = query.to_lowercase();
        Ok(self
            .companies
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CompanyId;

    fn company(id: &str, name: &str) -> Company {
        Company::new(CompanyId::new(id).unwrap(), name).unwrap()
    }

    fn sample_directory() -> InMemoryCompanyDirectory {
        InMemoryCompanyDirectory::new(vec![
            company("co-1", "Acme Corp"),
            company("co-2", "Acme Labs"),
            company("co-3", "Globex"),
        ])
    }

    #[tokio::test]
    async fn search_matches_substring_case_insensitively() {
        let directory = sample_directory();
        let results = directory.search("acme").await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn search_without_match_returns_empty() {
        let directory = sample_directory();
        let results = directory.search("initech").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn failing_directory_returns_error() {
        let directory = InMemoryCompanyDirectory::failing();
        let result = directory.search("acme").await;
        assert!(result.is_err());
    }
}
