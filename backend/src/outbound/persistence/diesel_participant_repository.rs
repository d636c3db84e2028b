//! PostgreSQL-backed [`ParticipantRepository`].
//!
//! The table's unique email index only covers participants; cross-kind uniqueness
//! is decided by the domain before writes reach this adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EntityStoreError, ParticipantRepository};
use crate::domain::{EmailAddress, EntityId, NewParticipant, OwnerEmail, Participant};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ParticipantRow, ParticipantWrite};
use super::pool::DbPool;
use super::schema::participants;

/// Diesel adapter over the `participants` table.
#[derive(Clone)]
pub struct DieselParticipantRepository {
    pool: DbPool,
}

impl DieselParticipantRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for DieselParticipantRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Participant>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        participants::table
            .filter(participants::email.eq(email.as_ref()))
            .select(ParticipantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?
            .map(Participant::try_from)
            .transpose()
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            participants::table.filter(participants::email.eq(email.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, None))
    }

    async fn find_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<Option<Participant>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        participants::table
            .find(id.get())
            .filter(participants::owner_email.eq(owner.as_ref()))
            .select(ParticipantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?
            .map(Participant::try_from)
            .transpose()
    }

    async fn exists_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<bool, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            participants::table
                .find(id.get())
                .filter(participants::owner_email.eq(owner.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, None))
    }

    async fn find_all_by_owner(
        &self,
        owner: &OwnerEmail,
    ) -> Result<Vec<Participant>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ParticipantRow> = participants::table
            .filter(participants::owner_email.eq(owner.as_ref()))
            .order(participants::id.asc())
            .select(ParticipantRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        debug!(count = rows.len(), "loaded participants");
        rows.into_iter().map(Participant::try_from).collect()
    }

    async fn insert(&self, participant: &NewParticipant) -> Result<Participant, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(participants::table)
            .values(ParticipantWrite::from(participant))
            .returning(ParticipantRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(&participant.details.email)))?;
        Participant::try_from(row)
    }

    async fn update(&self, participant: &Participant) -> Result<Participant, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(participants::table.find(participant.id.get()))
            .set(ParticipantWrite::from(participant))
            .returning(ParticipantRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(&participant.details.email)))?;
        Participant::try_from(row)
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<(), EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(participants::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(())
    }
}
