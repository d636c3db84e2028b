//! Read-only port over accounts owned by the authentication subsystem.

use async_trait::async_trait;

use crate::domain::{EmailAddress, User};

use super::EntityStoreError;

/// Lookups the service needs from the user store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the account holding `email`, if any.
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, EntityStoreError>;

    /// Whether any account holds `email`.
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, EntityStoreError>;
}
