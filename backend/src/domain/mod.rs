//! Domain types, rules and use-cases.
//!
//! Nothing here knows about HTTP or SQL. Inbound adapters call the driving
//! ports in [`ports`]; outbound adapters implement the driven ones.
//!
//! Public surface:
//! - [`EmailAddress`], [`OwnerEmail`], [`EntityId`], [`EntityKind`],
//!   [`PersonName`]: value objects.
//! - [`User`], [`Speaker`], [`Participant`] and their drafts.
//! - [`EmailUniquenessValidator`]: the cross-kind email rule.
//! - [`SpeakerService`], [`ParticipantService`]: owner-scoped use-cases.
//! - [`Error`], [`EntityServiceError`]: failure types.

pub mod auth;
pub mod email;
pub mod email_uniqueness;
pub mod entity_kind;
pub mod entity_service_error;
pub mod error;
pub mod owner;
pub mod participant;
pub mod participant_service;
pub mod person_name;
pub mod ports;
pub mod speaker;
pub mod speaker_service;
pub mod trace_id;
pub mod user;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::email::{EMAIL_MAX, EmailAddress, EmailValidationError};
pub use self::email_uniqueness::{EmailUniquenessError, EmailUniquenessValidator};
pub use self::entity_kind::{EntityId, EntityKind, InvalidEntityId};
pub use self::entity_service_error::EntityServiceError;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::owner::{ANONYMOUS_OWNER, ANONYMOUS_PRINCIPAL, OwnerEmail};
pub use self::participant::{NewParticipant, Participant, ParticipantDetails, ParticipantDraft};
pub use self::participant_service::ParticipantService;
pub use self::person_name::{PERSON_NAME_MAX, PersonName, PersonNameError};
pub use self::speaker::{NewSpeaker, Speaker, SpeakerDetails, SpeakerDraft};
pub use self::speaker_service::SpeakerService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;

/// Result alias used by HTTP handlers.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use emsx_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
