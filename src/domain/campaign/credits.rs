//! Credit budget allocation for a campaign.

use serde::{Deserialize, Serialize};

/// Credits allocated to a campaign, bounded by the user's available
/// balance.
///
/// Out-of-range requests are clamped, never rejected: the form treats
/// the slider bounds as policy, so a request of -5 stores 0 and a
/// request above the balance stores the balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreditBudget(u32);

impl CreditBudget {
    /// Clamps the requested amount into `[0, available]` and stores it.
    ///
    /// The request arrives as `i64` so that negative input clamps to
    /// zero instead of failing at the type boundary.
    pub fn allocate(requested: i64, available: u32) -> Self {
        let clamped = requested.clamp(0, i64::from(available));
        Self(clamped as u32)
    }

    /// Returns the allocated amount.
    pub fn amount(&self) -> u32 {
        self.0
    }
}
