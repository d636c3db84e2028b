//! Driven port for speaker persistence.
//!
//! Emails passed in are already normalised. Every lookup except the email
//! ones is scoped by owner; adapters never widen that scope.

use async_trait::async_trait;

use crate::domain::{EmailAddress, EntityId, NewSpeaker, OwnerEmail, Speaker};

use super::EntityStoreError;

/// Speaker store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeakerRepository: Send + Sync {
    /// Fetch the speaker holding `email`, regardless of owner.
    async fn find_by_email(&self, email: &EmailAddress)
    -> Result<Option<Speaker>, EntityStoreError>;

    /// Whether any speaker holds `email`.
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, EntityStoreError>;

    /// Fetch speaker `id` if `owner` created it.
    async fn find_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<Option<Speaker>, EntityStoreError>;

    /// Whether speaker `id` exists and belongs to `owner`.
    async fn exists_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<bool, EntityStoreError>;

    /// Every speaker created by `owner`, in id order.
    async fn find_all_by_owner(&self, owner: &OwnerEmail) -> Result<Vec<Speaker>, EntityStoreError>;

    /// Persist a new speaker and return it with its assigned id.
    async fn insert(&self, speaker: &NewSpeaker) -> Result<Speaker, EntityStoreError>;

    /// Overwrite the stored profile of `speaker.id`.
    async fn update(&self, speaker: &Speaker) -> Result<Speaker, EntityStoreError>;

    /// Remove speaker `id`. Missing rows are not an error.
    async fn delete_by_id(&self, id: EntityId) -> Result<(), EntityStoreError>;
}
