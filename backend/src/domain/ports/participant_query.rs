//! Driving port for participant reads.

use async_trait::async_trait;

use crate::domain::{EntityId, EntityServiceError, OwnerEmail, Participant};

/// Owner-scoped participant reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantQuery: Send + Sync {
    /// Fetch participant `id`; other owners' participants are reported as
    /// missing.
    async fn find_by_id(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
    ) -> Result<Participant, EntityServiceError>;

    /// Every participant owned by `owner`, in id order.
    async fn find_all(&self, owner: &OwnerEmail)
    -> Result<Vec<Participant>, EntityServiceError>;
}
