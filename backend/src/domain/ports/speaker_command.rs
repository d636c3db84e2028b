//! Driving port for speaker mutations.

use async_trait::async_trait;

use crate::domain::{EntityId, EntityServiceError, OwnerEmail, Speaker, SpeakerDraft};

/// Owner-scoped speaker writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeakerCommand: Send + Sync {
    /// Register a speaker owned by `owner`. The draft must carry an email.
    async fn create(
        &self,
        owner: &OwnerEmail,
        draft: SpeakerDraft,
    ) -> Result<Speaker, EntityServiceError>;

    /// Replace the profile of speaker `id`.
    async fn update(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
        draft: SpeakerDraft,
    ) -> Result<Speaker, EntityServiceError>;

    /// Remove speaker `id`.
    async fn delete(&self, owner: &OwnerEmail, id: EntityId) -> Result<(), EntityServiceError>;
}
