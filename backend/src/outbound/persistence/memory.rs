//! In-process entity store.
//!
//! Backs the service when no database is configured and gives tests a real
//! adapter to run against. Each table keeps its own id sequence and rejects a
//! second row with the same email, mirroring the unique index on the
//! PostgreSQL tables. Cross-table uniqueness is not enforced here.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    EntityStoreError, ParticipantRepository, SpeakerRepository, UserRepository,
};
use crate::domain::{
    EmailAddress, EntityId, NewParticipant, NewSpeaker, OwnerEmail, Participant, PersonName,
    Speaker, User,
};

trait Row: Clone {
    fn id(&self) -> EntityId;
    fn email(&self) -> &EmailAddress;
    fn owner(&self) -> Option<&OwnerEmail>;
}

impl Row for User {
    fn id(&self) -> EntityId {
        self.id
    }
    fn email(&self) -> &EmailAddress {
        &self.email
    }
    fn owner(&self) -> Option<&OwnerEmail> {
        None
    }
}

impl Row for Speaker {
    fn id(&self) -> EntityId {
        self.id
    }
    fn email(&self) -> &EmailAddress {
        &self.details.email
    }
    fn owner(&self) -> Option<&OwnerEmail> {
        Some(&self.owner_email)
    }
}

impl Row for Participant {
    fn id(&self) -> EntityId {
        self.id
    }
    fn email(&self) -> &EmailAddress {
        &self.details.email
    }
    fn owner(&self) -> Option<&OwnerEmail> {
        Some(&self.owner_email)
    }
}

struct Table<T> {
    rows: BTreeMap<EntityId, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Row> Table<T> {
    fn by_email(&self, email: &EmailAddress) -> Option<&T> {
        self.rows.values().find(|row| row.email() == email)
    }

    fn owned(&self, id: EntityId, owner: &OwnerEmail) -> Option<&T> {
        self.rows.get(&id).filter(|row| row.owner() == Some(owner))
    }

    fn all_owned(&self, owner: &OwnerEmail) -> Vec<T> {
        self.rows
            .values()
            .filter(|row| row.owner() == Some(owner))
            .cloned()
            .collect()
    }

    fn ensure_email_free(&self, email: &EmailAddress, id: Option<EntityId>) -> Result<(), EntityStoreError> {
        match self.by_email(email) {
            Some(holder) if Some(holder.id()) != id => {
                Err(EntityStoreError::email_taken(email.as_ref()))
            }
            _ => Ok(()),
        }
    }

    fn next_id(&mut self) -> Result<EntityId, EntityStoreError> {
        self.last_id += 1;
        EntityId::new(self.last_id).map_err(|err| EntityStoreError::query(err.to_string()))
    }

    fn insert_with(
        &mut self,
        email: &EmailAddress,
        build: impl FnOnce(EntityId) -> T,
    ) -> Result<T, EntityStoreError> {
        self.ensure_email_free(email, None)?;
        let id = self.next_id()?;
        let row = build(id);
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    fn replace(&mut self, row: &T) -> Result<T, EntityStoreError> {
        if !self.rows.contains_key(&row.id()) {
            return Err(EntityStoreError::query(format!("row {} does not exist", row.id())));
        }
        self.ensure_email_free(row.email(), Some(row.id()))?;
        self.rows.insert(row.id(), row.clone());
        Ok(row.clone())
    }
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    speakers: Table<Speaker>,
    participants: Table<Participant>,
}

/// Store implementing the user, speaker and participant ports in memory.
///
/// # Examples
/// ```
/// use emsx_backend::outbound::persistence::MemoryEntityStore;
///
/// let store = MemoryEntityStore::new();
/// let user = store.seed_user("Admin@EMSX.com", "Administrator").unwrap();
/// assert_eq!(user.email.as_ref(), "admin@emsx.com");
/// ```
#[derive(Default)]
pub struct MemoryEntityStore {
    tables: Mutex<Tables>,
}

impl MemoryEntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, EntityStoreError> {
        self.tables
            .lock()
            .map_err(|_| EntityStoreError::query("entity store lock poisoned"))
    }

    /// Register an account as the authentication subsystem would.
    pub fn seed_user(&self, email: &str, full_name: &str) -> Result<User, EntityStoreError> {
        let email = EmailAddress::parse(email)
            .map_err(|err| EntityStoreError::query(format!("invalid seed email: {err}")))?;
        let full_name = PersonName::new(full_name)
            .map_err(|err| EntityStoreError::query(format!("invalid seed name: {err}")))?;
        let mut tables = self.lock()?;
        let user = tables.users.insert_with(&email.clone(), |id| User {
            id,
            email,
            full_name,
        })?;
        debug!(id = %user.id, "seeded user");
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for MemoryEntityStore {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, EntityStoreError> {
        Ok(self.lock()?.users.by_email(email).cloned())
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, EntityStoreError> {
        Ok(self.lock()?.users.by_email(email).is_some())
    }
}

#[async_trait]
impl SpeakerRepository for MemoryEntityStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Speaker>, EntityStoreError> {
        Ok(self.lock()?.speakers.by_email(email).cloned())
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, EntityStoreError> {
        Ok(self.lock()?.speakers.by_email(email).is_some())
    }

    async fn find_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<Option<Speaker>, EntityStoreError> {
        Ok(self.lock()?.speakers.owned(id, owner).cloned())
    }

    async fn exists_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<bool, EntityStoreError> {
        Ok(self.lock()?.speakers.owned(id, owner).is_some())
    }

    async fn find_all_by_owner(&self, owner: &OwnerEmail) -> Result<Vec<Speaker>, EntityStoreError> {
        Ok(self.lock()?.speakers.all_owned(owner))
    }

    async fn insert(&self, speaker: &NewSpeaker) -> Result<Speaker, EntityStoreError> {
        self.lock()?
            .speakers
            .insert_with(&speaker.details.email, |id| Speaker {
                id,
                owner_email: speaker.owner_email.clone(),
                details: speaker.details.clone(),
            })
    }

    async fn update(&self, speaker: &Speaker) -> Result<Speaker, EntityStoreError> {
        self.lock()?.speakers.replace(speaker)
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<(), EntityStoreError> {
        self.lock()?.speakers.rows.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ParticipantRepository for MemoryEntityStore {
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Participant>, EntityStoreError> {
        Ok(self.lock()?.participants.by_email(email).cloned())
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, EntityStoreError> {
        Ok(self.lock()?.participants.by_email(email).is_some())
    }

    async fn find_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<Option<Participant>, EntityStoreError> {
        Ok(self.lock()?.participants.owned(id, owner).cloned())
    }

    async fn exists_by_id_and_owner(
        &self,
        id: EntityId,
        owner: &OwnerEmail,
    ) -> Result<bool, EntityStoreError> {
        Ok(self.lock()?.participants.owned(id, owner).is_some())
    }

    async fn find_all_by_owner(
        &self,
        owner: &OwnerEmail,
    ) -> Result<Vec<Participant>, EntityStoreError> {
        Ok(self.lock()?.participants.all_owned(owner))
    }

    async fn insert(&self, participant: &NewParticipant) -> Result<Participant, EntityStoreError> {
        self.lock()?
            .participants
            .insert_with(&participant.details.email, |id| Participant {
                id,
                owner_email: participant.owner_email.clone(),
                details: participant.details.clone(),
            })
    }

    async fn update(&self, participant: &Participant) -> Result<Participant, EntityStoreError> {
        self.lock()?.participants.replace(participant)
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<(), EntityStoreError> {
        self.lock()?.participants.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::{email, owner, participant, speaker};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> MemoryEntityStore {
        MemoryEntityStore::new()
    }

    fn new_speaker(address: &str, owner_address: &str) -> NewSpeaker {
        let template = speaker(1, address, owner_address);
        NewSpeaker {
            owner_email: template.owner_email,
            details: template.details,
        }
    }

    fn new_participant(address: &str, owner_address: &str) -> NewParticipant {
        let template = participant(1, address, owner_address);
        NewParticipant {
            owner_email: template.owner_email,
            details: template.details,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_sequential_per_table(store: MemoryEntityStore) {
        let s1 = SpeakerRepository::insert(&store, &new_speaker("s1@x.com", "o@x.com"))
            .await
            .expect("insert s1");
        let s2 = SpeakerRepository::insert(&store, &new_speaker("s2@x.com", "o@x.com"))
            .await
            .expect("insert s2");
        let p1 = ParticipantRepository::insert(&store, &new_participant("p1@x.com", "o@x.com"))
            .await
            .expect("insert p1");
        assert_eq!((s1.id.get(), s2.id.get(), p1.id.get()), (1, 2, 1));
    }

    #[rstest]
    #[tokio::test]
    async fn owner_scoping_hides_foreign_rows(store: MemoryEntityStore) {
        let s = SpeakerRepository::insert(&store, &new_speaker("s@x.com", "a@x.com"))
            .await
            .expect("insert");
        let other = owner("b@x.com");

        assert!(SpeakerRepository::find_by_id_and_owner(&store, s.id, &other)
            .await
            .expect("lookup")
            .is_none());
        assert!(!SpeakerRepository::exists_by_id_and_owner(&store, s.id, &other)
            .await
            .expect("lookup"));
        assert!(SpeakerRepository::find_all_by_owner(&store, &other)
            .await
            .expect("list")
            .is_empty());
        assert_eq!(
            SpeakerRepository::find_all_by_owner(&store, &owner("a@x.com"))
                .await
                .expect("list"),
            vec![s]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn same_table_email_clash_is_rejected(store: MemoryEntityStore) {
        ParticipantRepository::insert(&store, &new_participant("p@x.com", "o@x.com"))
            .await
            .expect("first insert");
        let err = ParticipantRepository::insert(&store, &new_participant("p@x.com", "o@x.com"))
            .await
            .expect_err("duplicate email");
        assert_eq!(err, EntityStoreError::email_taken("p@x.com"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_may_keep_own_email_and_frees_old_one(store: MemoryEntityStore) {
        let mut s = SpeakerRepository::insert(&store, &new_speaker("old@x.com", "o@x.com"))
            .await
            .expect("insert");
        SpeakerRepository::update(&store, &s).await.expect("same email");

        s.details.email = email("new@x.com");
        SpeakerRepository::update(&store, &s).await.expect("new email");
        assert!(!SpeakerRepository::exists_by_email(&store, &email("old@x.com"))
            .await
            .expect("lookup"));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_row(store: MemoryEntityStore) {
        let s = SpeakerRepository::insert(&store, &new_speaker("s@x.com", "o@x.com"))
            .await
            .expect("insert");
        SpeakerRepository::delete_by_id(&store, s.id).await.expect("delete");
        assert!(!SpeakerRepository::exists_by_email(&store, &email("s@x.com"))
            .await
            .expect("lookup"));
    }

    #[rstest]
    #[tokio::test]
    async fn seeded_users_are_visible_to_lookups(store: MemoryEntityStore) {
        let user = store.seed_user("Admin@EMSX.com", "Admin").expect("seed");
        let found = UserRepository::find_by_email(&store, &email("admin@emsx.com"))
            .await
            .expect("lookup");
        assert_eq!(found, Some(user));
    }
}
