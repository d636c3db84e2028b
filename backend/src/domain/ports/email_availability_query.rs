//! Driving port answering "could a new record use this email?".

use async_trait::async_trait;

use crate::domain::{EmailAddress, EntityServiceError};

/// Read-only email availability check across every record kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailAvailabilityQuery: Send + Sync {
    /// `true` when no user, speaker or participant holds `email`.
    async fn is_email_available(&self, email: &EmailAddress) -> Result<bool, EntityServiceError>;
}
