//! Fixed credit balance adapter.
//!
//! Serves a static balance per user with a configurable default,
//! mirroring the account-less local setup where every user starts with
//! the same allowance.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::CreditBalanceProvider;

/// Credit balance provider backed by a fixed per-user map.
pub struct FixedCreditBalance {
    default_credits: u32,
    overrides: HashMap<UserId, u32>,
}

impl FixedCreditBalance {
    /// Creates a provider that returns `default_credits` for everyone.
    pub fn new(default_credits: u32) -> Self {
        Self {
            default_credits,
            overrides: HashMap::new(),
        }
    }

    /// Sets a per-user balance override.
    pub fn with_balance(mut self, user_id: UserId, credits: u32) -> Self {
        self.overrides.insert(user_id, credits);
        self
    }
}

#[async_trait]
impl CreditBalanceProvider for FixedCreditBalance {
    async fn available_credits(&self, user_id: &UserId) -> Result<u32, DomainError> {
        Ok(self
            .overrides
            .get(user_id)
            .copied()
            .unwrap_or(self.default_credits))
    }
}
