//! Campaign submission record and submission lifecycle status.

use crate::domain::foundation::{CampaignId, StateMachine, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{can_submit, CampaignError, Company, DraftCampaign};

/// Lifecycle of a draft's submission attempt.
///
/// `Submitted` is terminal for the draft's lifetime; a wizard reset
/// replaces the status with a fresh `Composing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Composing,
    InFlight,
    Submitted,
}

impl SubmissionStatus {
    /// Returns true while a persistence call is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionStatus::InFlight)
    }
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!(
            (self, target),
            (Composing, InFlight) | (InFlight, Submitted) | (InFlight, Composing)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Composing => vec![InFlight],
            InFlight => vec![Submitted, Composing],
            Submitted => vec![],
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionStatus::Composing => "Composing",
            SubmissionStatus::InFlight => "InFlight",
            SubmissionStatus::Submitted => "Submitted",
        };
        write!(f, "{}", s)
    }
}

/// Immutable record produced from a fully valid draft, handed to the
/// persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSubmission {
    user_id: UserId,
    job_title: String,
    industry: String,
    job_type: String,
    location: String,
    description: String,
    blacklisted_companies: Vec<Company>,
    credits: u32,
    selected_template: String,
    submitted_at: Timestamp,
}

impl CampaignSubmission {
    /// Builds a submission from a draft that passes both step checks.
    ///
    /// # Errors
    ///
    /// - `DraftIncomplete` if either step check fails
    pub fn from_draft(user_id: UserId, draft: &DraftCampaign) -> Result<Self, CampaignError> {
        if !can_submit(draft) {
            return Err(CampaignError::incomplete(draft));
        }

        Ok(Self {
            user_id,
            job_title: draft.job_title().to_string(),
            industry: draft.industry().to_string(),
            job_type: draft.job_type().to_string(),
            location: draft.location().to_string(),
            description: draft.description().to_string(),
            blacklisted_companies: draft.blacklisted_companies().as_slice().to_vec(),
            credits: draft.credits().amount(),
            selected_template: draft.selected_template().to_string(),
            submitted_at: Timestamp::now(),
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn job_type(&self) -> &str {
        &self.job_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn blacklisted_companies(&self) -> &[Company] {
        &self.blacklisted_companies
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn selected_template(&self) -> &str {
        &self.selected_template
    }

    pub fn submitted_at(&self) -> &Timestamp {
        &self.submitted_at
    }
}

/// A persisted campaign: the store-assigned id plus the submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub id: CampaignId,
    pub submission: CampaignSubmission,
}
