//! Campaign-specific error types.

use crate::domain::foundation::{CampaignId, DomainError, ErrorCode};

use super::{details_report, validate_template, DraftCampaign};

/// Campaign-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignError {
    /// Campaign was not found in the store.
    NotFound(CampaignId),
    /// The draft fails one or both step checks.
    DraftIncomplete {
        /// Required Details fields that are empty after trimming.
        missing_fields: Vec<&'static str>,
        /// True when no template has been selected.
        template_missing: bool,
    },
    /// A submission attempt is already outstanding for this draft.
    SubmissionInProgress,
    /// Invalid state for operation.
    InvalidState(String),
    /// The persistence collaborator rejected the submission; the reason
    /// is passed through unmodified.
    StoreRejected(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl CampaignError {
    pub fn not_found(id: CampaignId) -> Self {
        CampaignError::NotFound(id)
    }

    /// Builds a `DraftIncomplete` error describing which of the two
    /// step checks failed for the given draft.
    pub fn incomplete(draft: &DraftCampaign) -> Self {
        CampaignError::DraftIncomplete {
            missing_fields: details_report(draft).missing_fields().to_vec(),
            template_missing: !validate_template(draft),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        CampaignError::InvalidState(message.into())
    }

    pub fn store_rejected(reason: impl Into<String>) -> Self {
        CampaignError::StoreRejected(reason.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CampaignError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CampaignError::NotFound(_) => ErrorCode::CampaignNotFound,
            CampaignError::DraftIncomplete { .. } => ErrorCode::ValidationFailed,
            CampaignError::SubmissionInProgress => ErrorCode::SubmissionInProgress,
            CampaignError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            CampaignError::StoreRejected(_) => ErrorCode::StoreError,
            CampaignError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CampaignError::NotFound(id) => format!("Campaign not found: {}", id),
            CampaignError::DraftIncomplete {
                missing_fields,
                template_missing,
            } => {
                let mut parts = Vec::new();
                if !missing_fields.is_empty() {
                    parts.push(format!("missing fields: {}", missing_fields.join(", ")));
                }
                if *template_missing {
                    parts.push("no template selected".to_string());
                }
                format!("Draft is incomplete: {}", parts.join("; "))
            }
            CampaignError::SubmissionInProgress => {
                "A submission is already in progress for this draft".to_string()
            }
            CampaignError::InvalidState(msg) => format!("Invalid state: {}", msg),
            CampaignError::StoreRejected(reason) => reason.clone(),
            CampaignError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CampaignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CampaignError {}

impl From<DomainError> for CampaignError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::SubmissionInProgress => CampaignError::SubmissionInProgress,
            ErrorCode::InvalidStateTransition => CampaignError::InvalidState(err.to_string()),
            ErrorCode::StoreError => CampaignError::StoreRejected(err.message),
            _ => CampaignError::Infrastructure(err.to_string()),
        }
    }
}
