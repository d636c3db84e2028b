//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound persistence
//! adapters. Driving ports (`*Command`, `*Query`, [`LoginService`]) are what
//! inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod email_availability_query;
mod identity_resolver;
mod login_service;
mod participant_command;
mod participant_query;
mod participant_repository;
mod speaker_command;
mod speaker_query;
mod speaker_repository;
mod store_error;
mod user_repository;

#[cfg(test)]
pub use email_availability_query::MockEmailAvailabilityQuery;
pub use email_availability_query::EmailAvailabilityQuery;
#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
pub use identity_resolver::{FixedIdentity, IdentityResolver};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FIXTURE_LOGIN_EMAIL, FIXTURE_LOGIN_PASSWORD, FixtureLoginService, LoginService,
};
#[cfg(test)]
pub use participant_command::MockParticipantCommand;
pub use participant_command::ParticipantCommand;
#[cfg(test)]
pub use participant_query::MockParticipantQuery;
pub use participant_query::ParticipantQuery;
#[cfg(test)]
pub use participant_repository::MockParticipantRepository;
pub use participant_repository::ParticipantRepository;
#[cfg(test)]
pub use speaker_command::MockSpeakerCommand;
pub use speaker_command::SpeakerCommand;
#[cfg(test)]
pub use speaker_query::MockSpeakerQuery;
pub use speaker_query::SpeakerQuery;
#[cfg(test)]
pub use speaker_repository::MockSpeakerRepository;
pub use speaker_repository::SpeakerRepository;
pub use store_error::EntityStoreError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
