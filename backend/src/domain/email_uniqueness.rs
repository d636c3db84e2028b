//! Cross-kind email uniqueness rules.
//!
//! An email (compared trimmed and lowercased) may be held by at most one
//! record across users, speakers and participants combined. The stores only
//! index their own table, so this validator is the sole place the
//! cross-table rule is decided. It only reads.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::ports::{
    EmailAvailabilityQuery, EntityStoreError, ParticipantRepository, SpeakerRepository,
    UserRepository,
};
use super::{EmailAddress, EntityId, EntityKind, EntityServiceError};

/// Failures raised by [`EmailUniquenessValidator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailUniquenessError {
    /// Some other record already holds the email.
    #[error("email {email} is already registered")]
    AlreadyExists {
        /// Normalised email.
        email: String,
    },
    /// A store lookup failed.
    #[error(transparent)]
    Store(#[from] EntityStoreError),
}

/// Decides whether an email is free to use, consulting every store.
#[derive(Clone)]
pub struct EmailUniquenessValidator {
    users: Arc<dyn UserRepository>,
    speakers: Arc<dyn SpeakerRepository>,
    participants: Arc<dyn ParticipantRepository>,
}

impl EmailUniquenessValidator {
    /// Build a validator over the three stores.
    pub fn new(
        users: Arc<dyn UserRepository>,
        speakers: Arc<dyn SpeakerRepository>,
        participants: Arc<dyn ParticipantRepository>,
    ) -> Self {
        Self {
            users,
            speakers,
            participants,
        }
    }

    /// Whether any record of any kind holds `email`.
    ///
    /// Absent or blank input is never held.
    pub async fn email_exists(&self, email: Option<&str>) -> Result<bool, EntityStoreError> {
        let Some(email) = email.and_then(EmailAddress::normalize) else {
            return Ok(false);
        };
        for kind in EntityKind::ALL {
            if self.exists_in(kind, &email).await? {
                debug!(%email, %kind, "email already held");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Negation of [`Self::email_exists`].
    pub async fn is_email_available(&self, email: Option<&str>) -> Result<bool, EntityStoreError> {
        self.email_exists(email).await.map(|exists| !exists)
    }

    /// Fail when `email` is held by any record. Used before creating one.
    pub async fn validate_email_unique(
        &self,
        email: Option<&str>,
    ) -> Result<(), EmailUniquenessError> {
        if self.email_exists(email).await? {
            return Err(already_exists(email));
        }
        Ok(())
    }

    /// Fail when `email` is held by any record other than `current_id` of
    /// `entity_kind`.
    ///
    /// Absent or blank input means no change was requested and always
    /// succeeds.
    pub async fn validate_email_unique_for_update(
        &self,
        email: Option<&str>,
        current_id: EntityId,
        entity_kind: EntityKind,
    ) -> Result<(), EmailUniquenessError> {
        let Some(email) = email.and_then(EmailAddress::normalize) else {
            return Ok(());
        };
        for kind in EntityKind::ALL {
            let clash = if kind == entity_kind {
                self.holder_in(kind, &email)
                    .await?
                    .is_some_and(|holder| holder != current_id)
            } else {
                self.exists_in(kind, &email).await?
            };
            if clash {
                debug!(%email, %kind, %entity_kind, id = %current_id, "email held by another record");
                return Err(EmailUniquenessError::AlreadyExists {
                    email: email.into(),
                });
            }
        }
        Ok(())
    }

    async fn exists_in(
        &self,
        kind: EntityKind,
        email: &EmailAddress,
    ) -> Result<bool, EntityStoreError> {
        match kind {
            EntityKind::User => self.users.exists_by_email(email).await,
            EntityKind::Speaker => self.speakers.exists_by_email(email).await,
            EntityKind::Participant => self.participants.exists_by_email(email).await,
        }
    }

    async fn holder_in(
        &self,
        kind: EntityKind,
        email: &EmailAddress,
    ) -> Result<Option<EntityId>, EntityStoreError> {
        Ok(match kind {
            EntityKind::User => self.users.find_by_email(email).await?.map(|u| u.id),
            EntityKind::Speaker => self.speakers.find_by_email(email).await?.map(|s| s.id),
            EntityKind::Participant => self.participants.find_by_email(email).await?.map(|p| p.id),
        })
    }
}

fn already_exists(email: Option<&str>) -> EmailUniquenessError {
    let email = email
        .and_then(EmailAddress::normalize)
        .map(String::from)
        .unwrap_or_default();
    EmailUniquenessError::AlreadyExists { email }
}

#[async_trait]
impl EmailAvailabilityQuery for EmailUniquenessValidator {
    async fn is_email_available(&self, email: &EmailAddress) -> Result<bool, EntityServiceError> {
        Ok(EmailUniquenessValidator::is_email_available(self, Some(email.as_ref())).await?)
    }
}

#[cfg(test)]
mod tests;
