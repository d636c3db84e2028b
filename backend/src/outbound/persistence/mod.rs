//! Entity store adapters.
//!
//! [`MemoryEntityStore`] keeps everything in process and is used when no
//! database is configured. The Diesel adapters persist to PostgreSQL through
//! a `diesel-async` + `bb8` pool; their row structs and schema stay private
//! to this module.
//!
//! ```ignore
//! use emsx_backend::outbound::persistence::{DbPool, DieselSpeakerRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/emsx")).await?;
//! let speakers = DieselSpeakerRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_participant_repository;
mod diesel_speaker_repository;
mod diesel_user_repository;
mod memory;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_participant_repository::DieselParticipantRepository;
pub use diesel_speaker_repository::DieselSpeakerRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use memory::MemoryEntityStore;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
