//! Participant records and the drafts used to create or replace them.

use super::{EmailAddress, EntityId, OwnerEmail, PersonName};

/// Profile fields shared by stored and pending participants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantDetails {
    /// Full name on the badge.
    pub full_name: PersonName,
    /// Normalised contact email; unique across all records.
    pub email: EmailAddress,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Participant owned by the caller that registered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Storage identifier.
    pub id: EntityId,
    /// Identity of the registering caller. Scopes visibility.
    pub owner_email: OwnerEmail,
    /// Profile fields.
    pub details: ParticipantDetails,
}

/// Participant not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParticipant {
    /// Identity of the registering caller.
    pub owner_email: OwnerEmail,
    /// Profile fields.
    pub details: ParticipantDetails,
}

/// Caller-supplied participant fields; see [`super::SpeakerDraft`] for the
/// email semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantDraft {
    /// Full name.
    pub full_name: PersonName,
    /// Requested email.
    pub email: Option<EmailAddress>,
    /// Contact phone number.
    pub phone: Option<String>,
}

impl ParticipantDraft {
    /// Build profile fields using `email` as the address.
    pub fn into_details(self, email: EmailAddress) -> ParticipantDetails {
        ParticipantDetails {
            full_name: self.full_name,
            email,
            phone: self.phone,
        }
    }
}
