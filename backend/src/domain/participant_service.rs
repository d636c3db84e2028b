//! Participant use-cases, scoped by owner like speakers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{ParticipantCommand, ParticipantQuery, ParticipantRepository};
use super::{
    EmailUniquenessValidator, EntityId, EntityKind, EntityServiceError, NewParticipant,
    OwnerEmail, Participant, ParticipantDraft,
};

const KIND: EntityKind = EntityKind::Participant;

/// Participant service implementing [`ParticipantCommand`] and
/// [`ParticipantQuery`].
#[derive(Clone)]
pub struct ParticipantService {
    repo: Arc<dyn ParticipantRepository>,
    emails: EmailUniquenessValidator,
}

impl ParticipantService {
    /// Create a service over `repo`, validating emails with `emails`.
    pub fn new(repo: Arc<dyn ParticipantRepository>, emails: EmailUniquenessValidator) -> Self {
        Self { repo, emails }
    }

    async fn owned(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
    ) -> Result<Participant, EntityServiceError> {
        self.repo
            .find_by_id_and_owner(id, owner)
            .await?
            .ok_or(EntityServiceError::NotFoundOrForbidden { kind: KIND, id })
    }
}

#[async_trait]
impl ParticipantCommand for ParticipantService {
    async fn create(
        &self,
        owner: &OwnerEmail,
        draft: ParticipantDraft,
    ) -> Result<Participant, EntityServiceError> {
        let email = draft
            .email
            .clone()
            .ok_or(EntityServiceError::EmailRequired { kind: KIND })?;
        self.emails
            .validate_email_unique(Some(email.as_ref()))
            .await?;

        let participant = NewParticipant {
            owner_email: owner.clone(),
            details: draft.into_details(email),
        };
        let stored = self.repo.insert(&participant).await?;
        info!(id = %stored.id, %owner, "participant created");
        Ok(stored)
    }

    async fn update(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
        draft: ParticipantDraft,
    ) -> Result<Participant, EntityServiceError> {
        let existing = self.owned(owner, id).await?;
        self.emails
            .validate_email_unique_for_update(draft.email.as_ref().map(AsRef::as_ref), id, KIND)
            .await?;

        let email = match &draft.email {
            Some(email) => email.clone(),
            None => existing.details.email,
        };
        let replacement = Participant {
            id,
            owner_email: existing.owner_email,
            details: draft.into_details(email),
        };
        let stored = self.repo.update(&replacement).await?;
        info!(%id, %owner, "participant updated");
        Ok(stored)
    }

    async fn delete(&self, owner: &OwnerEmail, id: EntityId) -> Result<(), EntityServiceError> {
        if !self.repo.exists_by_id_and_owner(id, owner).await? {
            return Err(EntityServiceError::NotFoundOrForbidden { kind: KIND, id });
        }
        self.repo.delete_by_id(id).await?;
        info!(%id, %owner, "participant deleted");
        Ok(())
    }
}

#[async_trait]
impl ParticipantQuery for ParticipantService {
    async fn find_by_id(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
    ) -> Result<Participant, EntityServiceError> {
        self.owned(owner, id).await
    }

    async fn find_all(
        &self,
        owner: &OwnerEmail,
    ) -> Result<Vec<Participant>, EntityServiceError> {
        let participants = self.repo.find_all_by_owner(owner).await?;
        debug!(%owner, count = participants.len(), "listed participants");
        Ok(participants)
    }
}
