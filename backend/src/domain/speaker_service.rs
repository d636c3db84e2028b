//! Speaker use-cases.
//!
//! Every operation is scoped to the caller's [`OwnerEmail`]. Creates and
//! email-bearing updates pass through the [`EmailUniquenessValidator`] before
//! anything is written.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{SpeakerCommand, SpeakerQuery, SpeakerRepository};
use super::{
    EmailUniquenessValidator, EntityId, EntityKind, EntityServiceError, NewSpeaker, OwnerEmail,
    Speaker, SpeakerDraft,
};

const KIND: EntityKind = EntityKind::Speaker;

/// Speaker service implementing [`SpeakerCommand`] and [`SpeakerQuery`].
#[derive(Clone)]
pub struct SpeakerService {
    repo: Arc<dyn SpeakerRepository>,
    emails: EmailUniquenessValidator,
}

impl SpeakerService {
    /// Create a service over `repo`, validating emails with `emails`.
    pub fn new(repo: Arc<dyn SpeakerRepository>, emails: EmailUniquenessValidator) -> Self {
        Self { repo, emails }
    }

    async fn owned(&self, owner: &OwnerEmail, id: EntityId) -> Result<Speaker, EntityServiceError> {
        self.repo
            .find_by_id_and_owner(id, owner)
            .await?
            .ok_or(EntityServiceError::NotFoundOrForbidden { kind: KIND, id })
    }
}

#[async_trait]
impl SpeakerCommand for SpeakerService {
    async fn create(
        &self,
        owner: &OwnerEmail,
        draft: SpeakerDraft,
    ) -> Result<Speaker, EntityServiceError> {
        let email = draft
            .email
            .clone()
            .ok_or(EntityServiceError::EmailRequired { kind: KIND })?;
        self.emails
            .validate_email_unique(Some(email.as_ref()))
            .await?;

        let speaker = NewSpeaker {
            owner_email: owner.clone(),
            details: draft.into_details(email),
        };
        let stored = self.repo.insert(&speaker).await?;
        info!(id = %stored.id, %owner, "speaker created");
        Ok(stored)
    }

    async fn update(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
        draft: SpeakerDraft,
    ) -> Result<Speaker, EntityServiceError> {
        let existing = self.owned(owner, id).await?;
        let requested = draft.email.as_ref().map(AsRef::as_ref);
        self.emails
            .validate_email_unique_for_update(requested, id, KIND)
            .await?;

        let email = draft
            .email
            .clone()
            .unwrap_or_else(|| existing.details.email.clone());
        let replacement = Speaker {
            id,
            owner_email: existing.owner_email,
            details: draft.into_details(email),
        };
        let stored = self.repo.update(&replacement).await?;
        info!(%id, %owner, "speaker updated");
        Ok(stored)
    }

    async fn delete(&self, owner: &OwnerEmail, id: EntityId) -> Result<(), EntityServiceError> {
        if !self.repo.exists_by_id_and_owner(id, owner).await? {
            return Err(EntityServiceError::NotFoundOrForbidden { kind: KIND, id });
        }
        self.repo.delete_by_id(id).await?;
        info!(%id, %owner, "speaker deleted");
        Ok(())
    }
}

#[async_trait]
impl SpeakerQuery for SpeakerService {
    async fn find_by_id(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
    ) -> Result<Speaker, EntityServiceError> {
        self.owned(owner, id).await
    }

    async fn find_all(&self, owner: &OwnerEmail) -> Result<Vec<Speaker>, EntityServiceError> {
        let speakers = self.repo.find_all_by_owner(owner).await?;
        debug!(%owner, count = speakers.len(), "listed speakers");
        Ok(speakers)
    }
}
