//! Credit balance provider port.

use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Lookup of a user's available credit balance.
///
/// Queried once per form session to seed the wizard's budget cap; the
/// returned value is treated as authoritative for the session duration
/// and never cached beyond it.
#[async_trait]
pub trait CreditBalanceProvider: Send + Sync {
    /// Returns the user's available credits.
    ///
    /// # Errors
    ///
    /// - `BalanceError` if the balance source is unreachable
    async fn available_credits(&self, user_id: &UserId) -> Result<u32, DomainError>;
}
