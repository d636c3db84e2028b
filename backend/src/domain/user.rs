//! Accounts owned by the authentication subsystem.
//!
//! The service never writes users; it reads them only to keep emails unique
//! across every kind of record.

use super::{EmailAddress, EntityId, PersonName};

/// Registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Storage identifier.
    pub id: EntityId,
    /// Normalised login email.
    pub email: EmailAddress,
    /// Display name.
    pub full_name: PersonName,
}
