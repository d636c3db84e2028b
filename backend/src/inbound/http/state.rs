//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and only see driving ports, so
//! tests can swap any of them for a mock.

use std::sync::Arc;

use crate::domain::ports::{
    EmailAvailabilityQuery, LoginService, ParticipantCommand, ParticipantQuery,
    ParticipantRepository, SpeakerCommand, SpeakerQuery, SpeakerRepository, UserRepository,
};
use crate::domain::{EmailUniquenessValidator, ParticipantService, SpeakerService};

/// Driven ports the HTTP state is assembled from.
#[derive(Clone)]
pub struct EntityStores {
    /// Accounts owned by the authentication subsystem.
    pub users: Arc<dyn UserRepository>,
    /// Speaker table.
    pub speakers: Arc<dyn SpeakerRepository>,
    /// Participant table.
    pub participants: Arc<dyn ParticipantRepository>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub speakers: Arc<dyn SpeakerCommand>,
    pub speakers_query: Arc<dyn SpeakerQuery>,
    pub participants: Arc<dyn ParticipantCommand>,
    pub participants_query: Arc<dyn ParticipantQuery>,
    pub emails: Arc<dyn EmailAvailabilityQuery>,
}

impl HttpState {
    /// Wire the domain services over `stores`.
    ///
    /// One validator instance is shared by both services and the
    /// availability endpoint.
    pub fn from_stores(stores: EntityStores, login: Arc<dyn LoginService>) -> Self {
        let validator = EmailUniquenessValidator::new(
            stores.users,
            stores.speakers.clone(),
            stores.participants.clone(),
        );
        let speakers = Arc::new(SpeakerService::new(stores.speakers, validator.clone()));
        let participants = Arc::new(ParticipantService::new(
            stores.participants,
            validator.clone(),
        ));
        Self {
            login,
            speakers: speakers.clone(),
            speakers_query: speakers,
            participants: participants.clone(),
            participants_query: participants,
            emails: Arc::new(validator),
        }
    }
}
