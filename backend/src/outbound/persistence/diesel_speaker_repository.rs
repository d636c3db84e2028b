//! PostgreSQL-backed [`SpeakerRepository`].
//!
//! The table's unique email index only covers speakers; cross-kind uniqueness
//! is decided by the domain before writes reach this adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{EntityStoreError, SpeakerRepository};
use crate::domain::{EmailAddress, EntityId, NewSpeaker, OwnerEmail, Speaker};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{SpeakerRow, SpeakerWrite};
use super::pool::DbPool;
use super::schema::speakers;

/// Diesel adapter over the `speakers` table.
#[derive(Clone)]
pub struct DieselSpeakerRepository {
    pool: DbPool,
}

impl DieselSpeakerRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpeakerRepository for DieselSpeakerRepository {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Speaker>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        speakers::table
            .filter(speakers::email.eq(email.as_ref()))
            .select(SpeakerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?
            .map(Speaker::try_from)
            .transpose()
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            speakers::table.filter(speakers::email.eq(email.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, None))
    }

    async fn find_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<Option<Speaker>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        speakers::table
            .find(id.get())
            .filter(speakers::owner_email.eq(owner.as_ref()))
            .select(SpeakerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?
            .map(Speaker::try_from)
            .transpose()
    }

    async fn exists_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<bool, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            speakers::table
                .find(id.get())
                .filter(speakers::owner_email.eq(owner.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, None))
    }

    async fn find_all_by_owner(
        &self,
        owner: &OwnerEmail,
    ) -> Result<Vec<Speaker>, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<SpeakerRow> = speakers::table
            .filter(speakers::owner_email.eq(owner.as_ref()))
            .order(speakers::id.asc())
            .select(SpeakerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        debug!(count = rows.len(), "loaded speakers");
        rows.into_iter().map(Speaker::try_from).collect()
    }

    async fn insert(&self, speaker: &NewSpeaker) -> Result<Speaker, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(speakers::table)
            .values(SpeakerWrite::from(speaker))
            .returning(SpeakerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(&speaker.details.email)))?;
        Speaker::try_from(row)
    }

    async fn update(&self, speaker: &Speaker) -> Result<Speaker, EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(speakers::table.find(speaker.id.get()))
            .set(SpeakerWrite::from(speaker))
            .returning(SpeakerRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(&speaker.details.email)))?;
        Speaker::try_from(row)
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<(), EntityStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(speakers::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(())
    }
}
