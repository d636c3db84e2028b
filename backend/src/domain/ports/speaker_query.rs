//! Driving port for speaker reads.

use async_trait::async_trait;

use crate::domain::{EntityId, EntityServiceError, OwnerEmail, Speaker};

/// Owner-scoped speaker reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeakerQuery: Send + Sync {
    /// Fetch speaker `id`; other owners' speakers are reported as missing.
    async fn find_by_id(
        &self,
        owner: &OwnerEmail,
        id: EntityId,
    ) -> Result<Speaker, EntityServiceError>;

    /// Every speaker owned by `owner`, in id order.
    async fn find_all(&self, owner: &OwnerEmail) -> Result<Vec<Speaker>, EntityServiceError>;
}
