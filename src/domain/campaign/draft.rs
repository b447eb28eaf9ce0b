//! DraftCampaign - the in-progress campaign configuration.

use crate::domain::foundation::CompanyId;
use serde::{Deserialize, Serialize};

use super::{Company, CompanyBlacklist, CreditBudget};

/// Industry options offered by the creation form.
///
/// The draft stores whichever string the caller supplies; the list is
/// exported for the presentation layer, not enforced here.
pub const INDUSTRIES: [&str; 5] = ["technology", "healthcare", "finance", "education", "other"];

/// Job type options offered by the creation form.
pub const JOB_TYPES: [&str; 5] = [
    "full-time",
    "part-time",
    "contract",
    "apprenticeship",
    "internship",
];

/// A single field-level edit to a draft.
///
/// Edits always succeed: validation happens at step-transition and
/// submission time, never at edit time.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    JobTitle(String),
    Industry(String),
    JobType(String),
    Location(String),
    Description(String),
    AddCompany(Company),
    RemoveCompany(CompanyId),
    /// Requested credit amount; clamped into the session's balance.
    Credits(i64),
    SelectTemplate(String),
}

/// The in-progress, not-yet-submitted campaign configuration.
///
/// Created empty when the user opens the creation form, mutated
/// field-by-field, and discarded on successful submission or explicit
/// reset. Nothing here persists across those boundaries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftCampaign {
    job_title: String,
    industry: String,
    job_type: String,
    location: String,
    description: String,
    blacklisted_companies: CompanyBlacklist,
    credits: CreditBudget,
    selected_template: String,
}

impl DraftCampaign {
    /// Creates an empty draft.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Applies a field-level edit.
    ///
    /// Scalar fields are replaced, blacklist edits go through the
    /// deduplicated [`CompanyBlacklist`], and credit edits are clamped
    /// into `[0, available_credits]`.
    pub fn apply(&mut self, edit: DraftEdit, available_credits: u32) {
        match edit {
            DraftEdit::JobTitle(value) => self.job_title = value,
            DraftEdit::Industry(value) => self.industry = value,
            DraftEdit::JobType(value) => self.job_type = value,
            DraftEdit::Location(value) => self.location = value,
            DraftEdit::Description(value) => self.description = value,
            DraftEdit::AddCompany(company) => {
                self.blacklisted_companies.add(company);
            }
            DraftEdit::RemoveCompany(id) => {
                self.blacklisted_companies.remove(&id);
            }
            DraftEdit::Credits(requested) => {
                self.credits = CreditBudget::allocate(requested, available_credits);
            }
            DraftEdit::SelectTemplate(content) => self.selected_template = content,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

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

    /// Returns the company exclusion list.
    pub fn blacklisted_companies(&self) -> &CompanyBlacklist {
        &self.blacklisted_companies
    }

    /// Returns the allocated credit budget.
    pub fn credits(&self) -> CreditBudget {
        self.credits
    }

    /// Returns the selected outreach template, empty until chosen.
    pub fn selected_template(&self) -> &str {
        &self.selected_template
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CompanyId;

    fn company(id: &str, name: &str) -> Company {
        Company::new(CompanyId::new(id).unwrap(), name).unwrap()
    }

    #[test]
    fn empty_draft_has_no_content() {
        let draft = DraftCampaign::empty();
        assert_eq!(draft.job_title(), "");
        assert_eq!(draft.selected_template(), "");
        assert!(draft.blacklisted_companies().is_empty());
        assert_eq!(draft.credits().amount(), 0);
    }

    #[test]
    fn scalar_edit_replaces_field() {
        let mut draft = DraftCampaign::empty();
        draft.apply(DraftEdit::JobTitle("Software Engineer".into()), 500);
        draft.apply(DraftEdit::JobTitle("Backend Engineer".into()), 500);
        assert_eq!(draft.job_title(), "Backend Engineer");
    }

    #[test]
    fn add_company_edit_deduplicates() {
        let mut draft = DraftCampaign::empty();
        draft.apply(DraftEdit::AddCompany(company("co-1", "Acme")), 500);
        draft.apply(DraftEdit::AddCompany(company("co-1", "Acme")), 500);
        assert_eq!(draft.blacklisted_companies().len(), 1);
    }

    #[test]
    fn remove_company_edit_removes_entry() {
        let mut draft = DraftCampaign::empty();
        draft.apply(DraftEdit::AddCompany(company("co-1", "Acme")), 500);
        draft.apply(DraftEdit::RemoveCompany(CompanyId::new("co-1").unwrap()), 500);
        assert!(draft.blacklisted_companies().is_empty());
    }

    #[test]
    fn credits_edit_clamps_to_available() {
        let mut draft = DraftCampaign::empty();
        draft.apply(DraftEdit::Credits(600), 500);
        assert_eq!(draft.credits().amount(), 500);

        draft.apply(DraftEdit::Credits(-5), 500);
        assert_eq!(draft.credits().amount(), 0);
    }

    #[test]
    fn template_edit_stores_content_verbatim() {
        let mut draft = DraftCampaign::empty();
        draft.apply(DraftEdit::SelectTemplate("Hi {{name}}, ...".into()), 500);
        assert_eq!(draft.selected_template(), "Hi {{name}}, ...");
    }

    #[test]
    fn option_lists_match_the_form() {
        assert!(INDUSTRIES.contains(&"technology"));
        assert!(JOB_TYPES.contains(&"full-time"));
        assert_eq!(INDUSTRIES.len(), 5);
        assert_eq!(JOB_TYPES.len(), 5);
    }
}
