//! Driven port for participant persistence.

use async_trait::async_trait;

use crate::domain::{EmailAddress, EntityId, NewParticipant, OwnerEmail, Participant};

use super::EntityStoreError;

/// Participant store. Same contract as
/// [`SpeakerRepository`](super::SpeakerRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Fetch the participant holding `email`, regardless of owner.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Participant>, EntityStoreError>;

    /// Whether any participant holds `email`.
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, EntityStoreError>;

    /// Fetch participant `id` if `owner` registered it.
    async fn find_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<Option<Participant>, EntityStoreError>;

    /// Whether participant `id` exists and belongs to `owner`.
    async fn exists_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<bool, EntityStoreError>;

    /// Every participant registered by `owner`, in id order.
    async fn find_all_by_owner(
        &self,
        owner: &OwnerEmail,
    ) -> Result<Vec<Participant>, EntityStoreError>;

    /// Persist a new participant and return it with its assigned id.
    async fn insert(&self, participant: &NewParticipant) -> Result<Participant, EntityStoreError>;

    /// Overwrite the stored profile of `participant.id`.
    async fn update(&self, participant: &Participant) -> Result<Participant, EntityStoreError>;

    /// Remove participant `id`.
    async fn delete_by_id(&self, id: EntityId) -> Result<(), EntityStoreError>;
}
