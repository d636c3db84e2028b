//! Entity store selection for the HTTP state.

use std::sync::Arc;

use emsx_backend::domain::ports::{EntityStoreError, FIXTURE_LOGIN_EMAIL, FixtureLoginService};
use emsx_backend::inbound::http::state::{EntityStores, HttpState};
use emsx_backend::outbound::persistence::{
    DbPool, DieselParticipantRepository, DieselSpeakerRepository, DieselUserRepository,
    MemoryEntityStore,
};
use tracing::info;

use super::ServerConfig;

const FIXTURE_ACCOUNT_NAME: &str = "Administrator";

/// PostgreSQL stores. The fixture login account is seeded by migration.
fn diesel_stores(pool: &DbPool) -> EntityStores {
    EntityStores {
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        speakers: Arc::new(DieselSpeakerRepository::new(pool.clone())),
        participants: Arc::new(DieselParticipantRepository::new(pool.clone())),
    }
}

/// In-memory stores holding the fixture login account, matching the
/// migrated database.
fn memory_stores() -> Result<EntityStores, EntityStoreError> {
    let store = Arc::new(MemoryEntityStore::new());
    store.seed_user(FIXTURE_LOGIN_EMAIL, FIXTURE_ACCOUNT_NAME)?;
    Ok(EntityStores {
        users: store.clone(),
        speakers: store.clone(),
        participants: store,
    })
}

/// Assemble the HTTP state for `config`.
///
/// # Errors
/// Returns [`std::io::Error`] if seeding the in-memory store fails.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let stores = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL entity stores");
            diesel_stores(pool)
        }
        None => {
            info!("no database configured; using in-memory entity stores");
            memory_stores()
                .map_err(|error| std::io::Error::other(format!("seed memory store: {error}")))?
        }
    };
    Ok(HttpState::from_stores(stores, Arc::new(FixtureLoginService)))
}
