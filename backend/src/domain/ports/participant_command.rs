//! Driving port for participant mutations.

use async_trait::async_trait;

use crate::domain::{EntityId, EntityServiceError, OwnerEmail, Participant, ParticipantDraft};

/// Owner-scoped participant writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantCommand: Send + Sync {
    /// Register a participant owned by `owner`. The draft must carry an email.
    async fn create(
        &self,
        owner: &OwnerEmail,
        draft: ParticipantDraft,
    ) -> Result<Participant, EntityServiceError>;

    /// Replace the profile of participant `id`.
    async fn update(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
        draft: ParticipantDraft,
    ) -> Result<Participant, EntityServiceError>;

    /// Remove participant `id`.
    async fn delete(&self, owner: &OwnerEmail, id: EntityId) -> Result<(), EntityServiceError>;
}
