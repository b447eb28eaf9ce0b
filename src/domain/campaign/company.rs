//! Company value object, as returned by the company directory.

use crate::domain::foundation::{CompanyId, ValidationError};
use serde::{Deserialize, Serialize};

/// A company known to the directory, identified by its directory id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
}

impl Company {
    /// Creates a company, rejecting empty names.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is empty after trimming
    pub fn new(id: CompanyId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        Ok(Self { id, name })
    }

    /// Returns the directory identifier.
    pub fn id(&self) -> &CompanyId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
