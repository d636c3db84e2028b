//! Typed failures of the speaker and participant services.

use serde_json::json;

use super::ports::EntityStoreError;
use super::{EmailUniquenessError, EntityId, EntityKind, Error};

/// Failures surfaced by entity commands and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityServiceError {
    /// Another record already holds the requested email.
    #[error("email {email} is already registered")]
    EmailAlreadyExists {
        /// Normalised email that clashed.
        email: String,
    },
    /// No record with this id belongs to the caller. Deliberately does not
    /// say which.
    #[error("{kind} {id} not found")]
    NotFoundOrForbidden {
        /// Kind that was looked up.
        kind: EntityKind,
        /// Identifier that was looked up.
        id: EntityId,
    },
    /// A create was attempted without an email.
    #[error("{kind} email is required")]
    EmailRequired {
        /// Kind being created.
        kind: EntityKind,
    },
    /// A store adapter failed.
    #[error(transparent)]
    Store(#[from] EntityStoreError),
}

impl From<EmailUniquenessError> for EntityServiceError {
    fn from(value: EmailUniquenessError) -> Self {
        match value {
            EmailUniquenessError::AlreadyExists { email } => Self::EmailAlreadyExists { email },
            EmailUniquenessError::Store(err) => Self::Store(err),
        }
    }
}

impl From<EntityServiceError> for Error {
    fn from(value: EntityServiceError) -> Self {
        match value {
            EntityServiceError::EmailAlreadyExists { email } => email_conflict(&email),
            EntityServiceError::NotFoundOrForbidden { kind, id } => {
                Error::not_found(format!("{kind} {id} not found")).with_details(json!({
                    "code": "not_found_or_forbidden",
                    "kind": kind,
                    "id": id,
                }))
            }
            EntityServiceError::EmailRequired { .. } => Error::invalid_request("email is required")
                .with_details(json!({ "field": "email", "code": "missing_email" })),
            EntityServiceError::Store(EntityStoreError::Connection { message }) => {
                Error::service_unavailable(format!("entity store unavailable: {message}"))
            }
            EntityServiceError::Store(EntityStoreError::Query { message }) => {
                Error::internal(format!("entity store error: {message}"))
            }
            EntityServiceError::Store(EntityStoreError::EmailTaken { email }) => {
                email_conflict(&email)
            }
        }
    }
}

fn email_conflict(email: &str) -> Error {
    Error::conflict(format!("email {email} is already registered")).with_details(json!({
        "code": "email_already_exists",
        "email": email,
    }))
}
