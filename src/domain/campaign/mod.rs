//! Campaign module - the draft composition core.
//!
//! A campaign is assembled through a two-step wizard (`Details` then
//! `Template`). The wizard owns the mutable draft; validation is pure;
//! submission produces an immutable record handed to the persistence
//! port by the application layer.

mod blacklist;
mod company;
mod credits;
mod draft;
mod errors;
mod step;
mod submission;
mod validation;
mod wizard;

pub use blacklist::CompanyBlacklist;
pub use company::Company;
pub use credits::CreditBudget;
pub use draft::{DraftCampaign, DraftEdit, INDUSTRIES, JOB_TYPES};
pub use errors::CampaignError;
pub use step::WizardStep;
pub use submission::{CampaignRecord, CampaignSubmission, SubmissionStatus};
pub use validation::{
    can_submit, details_report, step_is_reachable, validate_details, validate_template,
    DetailsReport, REQUIRED_DETAILS_FIELDS,
};
pub use wizard::CampaignWizard;
