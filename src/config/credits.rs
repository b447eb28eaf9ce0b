//! Credit balance configuration

use serde::Deserialize;

/// Credit balance configuration
///
/// Used by the fixed balance adapter when no real balance backend is
/// wired in.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditsConfig {
    /// Default available credits per user
    #[serde(default = "default_available")]
    pub default_available: u32,
}

impl Default for CreditsConfig {
    fn default() -> Self {
        Self {
            default_available: default_available(),
        }
    }
}

fn default_available() -> u32 {
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_standard_allowance() {
        assert_eq!(CreditsConfig::default().default_available, 500);
    }
}
