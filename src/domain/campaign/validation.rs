//! Pure step validation predicates.
//!
//! Validation is deliberately separated from the wizard: these
//! functions answer "can I proceed" without touching any state, so the
//! presentation layer can ask the same question the wizard asks when it
//! gates a transition.

use super::{DraftCampaign, WizardStep};

/// The fields the Details step requires to be non-empty after trimming.
pub const REQUIRED_DETAILS_FIELDS: [&str; 5] =
    ["job_title", "industry", "job_type", "location", "description"];

/// Which required Details fields are still missing.
///
/// All five fields are checked independently; any single empty field
/// invalidates the step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsReport {
    missing_fields: Vec<&'static str>,
}

impl DetailsReport {
    /// Returns true when no required field is missing.
    pub fn is_valid(&self) -> bool {
        self.missing_fields.is_empty()
    }

    /// Returns the names of the missing fields, in form order.
    pub fn missing_fields(&self) -> &[&'static str] {
        &self.missing_fields
    }
}

/// Builds a report of missing Details fields for the given draft.
pub fn details_report(draft: &DraftCampaign) -> DetailsReport {
    let checks: [(&'static str, &str); 5] = [
        ("job_title", draft.job_title()),
        ("industry", draft.industry()),
        ("job_type", draft.job_type()),
        ("location", draft.location()),
        ("description", draft.description()),
    ];

    let missing_fields = checks
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    DetailsReport { missing_fields }
}

/// True iff every required Details field is non-empty after trimming.
pub fn validate_details(draft: &DraftCampaign) -> bool {
    details_report(draft).is_valid()
}

/// True iff a template has been selected (non-empty after trimming).
pub fn validate_template(draft: &DraftCampaign) -> bool {
    !draft.selected_template().trim().is_empty()
}

/// True iff the draft passes both step checks and may be submitted.
pub fn can_submit(draft: &DraftCampaign) -> bool {
    validate_details(draft) && validate_template(draft)
}

/// Validates the named step against the draft.
///
/// The Details step is always considered valid as a navigation target;
/// the Template step requires the details to be complete.
pub fn step_is_reachable(draft: &DraftCampaign, step: WizardStep) -> bool {
    match step {
        WizardStep::Details => true,
        WizardStep::Template => validate_details(draft),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::campaign::DraftEdit;

    fn complete_details_draft() -> DraftCampaign {
        let mut draft = DraftCampaign::empty();
        draft.apply(DraftEdit::JobTitle("Software Engineer".into()), 500);
        draft.apply(DraftEdit::Industry("technology".into()), 500);
        draft.apply(DraftEdit::JobType("full-time".into()), 500);
        draft.apply(DraftEdit::Location("Remote".into()), 500);
        draft.apply(DraftEdit::Description("Looking for backend roles".into()), 500);
        draft
    }

    #[test]
    fn empty_draft_fails_details_validation() {
        let draft = DraftCampaign::empty();
        assert!(!validate_details(&draft));
    }

    #[test]
    fn empty_draft_reports_all_fields_missing() {
        let report = details_report(&DraftCampaign::empty());
        assert_eq!(report.missing_fields(), &REQUIRED_DETAILS_FIELDS);
    }

    #[test]
    fn complete_details_pass_validation() {
        assert!(validate_details(&complete_details_draft()));
    }

    #[test]
    fn whitespace_only_field_counts_as_missing() {
        let mut draft = complete_details_draft();
        draft.apply(DraftEdit::Location("   ".into()), 500);

        let report = details_report(&draft);
        assert!(!report.is_valid());
        assert_eq!(report.missing_fields(), &["location"]);
    }

    #[test]
    fn any_single_empty_field_invalidates_the_step() {
        for field in REQUIRED_DETAILS_FIELDS {
            let mut draft = complete_details_draft();
            let edit = match field {
                "job_title" => DraftEdit::JobTitle("".into()),
                "industry" => DraftEdit::Industry("".into()),
                "job_type" => DraftEdit::JobType("".into()),
                "location" => DraftEdit::Location("".into()),
                "description" => DraftEdit::Description("".into()),
                _ => unreachable!(),
            };
            draft.apply(edit, 500);
            assert!(!validate_details(&draft), "expected invalid with empty {}", field);
        }
    }

    #[test]
    fn template_validation_requires_non_empty_content() {
        let mut draft = DraftCampaign::empty();
        assert!(!validate_template(&draft));

        draft.apply(DraftEdit::SelectTemplate("  ".into()), 500);
        assert!(!validate_template(&draft));

        draft.apply(DraftEdit::SelectTemplate("Hi {{name}}".into()), 500);
        assert!(validate_template(&draft));
    }

    #[test]
    fn can_submit_is_false_without_template() {
        let draft = complete_details_draft();
        assert!(validate_details(&draft));
        assert!(!can_submit(&draft));
    }

    #[test]
    fn can_submit_is_true_when_both_steps_pass() {
        let mut draft = complete_details_draft();
        draft.apply(DraftEdit::SelectTemplate("Hi {{name}}".into()), 500);
        assert!(can_submit(&draft));
    }

    #[test]
    fn details_step_is_always_reachable() {
        assert!(step_is_reachable(&DraftCampaign::empty(), WizardStep::Details));
    }

    #[test]
    fn template_step_requires_complete_details() {
        assert!(!step_is_reachable(&DraftCampaign::empty(), WizardStep::Template));
        assert!(step_is_reachable(&complete_details_draft(), WizardStep::Template));
    }
}
