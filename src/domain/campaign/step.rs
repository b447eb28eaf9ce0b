//! WizardStep enum for the two-stage campaign creation flow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in the campaign creation wizard.
///
/// Backward navigation to `Details` is always allowed; forward
/// navigation to `Template` is gated on details validity. The gate
/// itself lives in [`super::CampaignWizard`] because it depends on the
/// draft, not on the step alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Details,
    Template,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStep::Details => "Details",
            WizardStep::Template => "Template",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_details() {
        assert_eq!(WizardStep::default(), WizardStep::Details);
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(format!("{}", WizardStep::Details), "Details");
        assert_eq!(format!("{}", WizardStep::Template), "Template");
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&WizardStep::Details).unwrap(),
            "\"details\""
        );
        assert_eq!(
            serde_json::to_string(&WizardStep::Template).unwrap(),
            "\"template\""
        );
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let step: WizardStep = serde_json::from_str("\"template\"").unwrap();
        assert_eq!(step, WizardStep::Template);
    }
}
