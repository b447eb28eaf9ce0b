//! HTTP company directory adapter.
//!
//! Implements the `CompanyDirectory` port against a JSON search
//! endpoint: `GET {base_url}/companies?q={query}` returning
//! `[{"id": "...", "name": "..."}, ...]`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::DirectoryConfig;
use crate::domain::campaign::Company;
use crate::domain::foundation::{CompanyId, DomainError, ErrorCode};
use crate::ports::CompanyDirectory;

/// Wire representation of a directory entry.
#[derive(Debug, Deserialize)]
struct CompanyDto {
    id: String,
    name: String,
}

/// Company directory backed by an HTTP search endpoint.
pub struct HttpCompanyDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCompanyDirectory {
    /// Creates the adapter from directory configuration.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the HTTP client cannot be constructed
    pub fn new(config: &DirectoryConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to build directory HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/companies", self.base_url)
    }
}

#[async_trait]
impl CompanyDirectory for HttpCompanyDirectory {
    async fn search(&self, query: &str) -> Result<Vec<Company>, DomainError> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DirectoryError,
                    format!("Directory request failed: {}", e),
                )
            })?;

        if !response.status().is_success() {
            return Err(DomainError::new(
                ErrorCode::DirectoryError,
                "Directory rejected the search request",
            )
            .with_detail("status", response.status().to_string()));
        }

        let entries: Vec<CompanyDto> = response.json().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DirectoryError,
                format!("Invalid directory response: {}", e),
            )
        })?;

        // Entries with empty ids or names are dropped rather than
        // failing the whole search.
        let companies = entries
            .into_iter()
            .filter_map(|dto| {
                let id = CompanyId::new(dto.id).ok()?;
                match Company::new(id, dto.name) {
                    Ok(company) => Some(company),
                    Err(err) => {
                        tracing::warn!(error = %err, "skipping malformed directory entry");
                        None
                    }
                }
            })
            .collect();

        Ok(companies)
    }
}
