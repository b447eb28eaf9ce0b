//! SearchCompaniesHandler - company directory search for the blacklist
//! picker.

use std::sync::Arc;

use crate::domain::campaign::Company;
use crate::ports::CompanyDirectory;

/// Handler for blacklist company search.
///
/// Directory failures are not surfaced: a failed or empty response
/// yields an empty result list, and no retry is performed.
pub struct SearchCompaniesHandler {
    directory: Arc<dyn CompanyDirectory>,
}

impl SearchCompaniesHandler {
    pub fn new(directory: Arc<dyn CompanyDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, query: &str) -> Vec<Company> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.directory.search(query).await {
            Ok(companies) => {
                tracing::debug!(query, results = companies.len(), "company search");
                companies
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "company search failed, returning empty list");
                Vec::new()
            }
        }
    }
}
