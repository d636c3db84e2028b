//! Speaker records and the drafts used to create or replace them.

use chrono::NaiveDate;

use super::{EmailAddress, EntityId, OwnerEmail, PersonName};

/// Profile fields shared by a stored speaker and a new one awaiting an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerDetails {
    /// Full name shown in the programme.
    pub full_name: PersonName,
    /// Free-form biography.
    pub bio: Option<String>,
    /// Normalised contact email; unique across all records.
    pub email: EmailAddress,
    /// Affiliation.
    pub company: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
}

/// Speaker owned by the caller that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    /// Storage identifier.
    pub id: EntityId,
    /// Identity of the creating caller. Scopes visibility.
    pub owner_email: OwnerEmail,
    /// Profile fields.
    pub details: SpeakerDetails,
}

/// Speaker not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpeaker {
    /// Identity of the creating caller.
    pub owner_email: OwnerEmail,
    /// Profile fields.
    pub details: SpeakerDetails,
}

/// Caller-supplied speaker fields.
///
/// `email` is required on create. On update `None` means "keep the stored
/// email"; every other field replaces the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerDraft {
    /// Full name.
    pub full_name: PersonName,
    /// Biography.
    pub bio: Option<String>,
    /// Requested email.
    pub email: Option<EmailAddress>,
    /// Affiliation.
    pub company: Option<String>,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
}

impl SpeakerDraft {
    /// Build profile fields using `email` as the address.
    pub fn into_details(self, email: EmailAddress) -> SpeakerDetails {
        SpeakerDetails {
            full_name: self.full_name,
            bio: self.bio,
            email,
            company: self.company,
            date_of_birth: self.date_of_birth,
        }
    }
}
