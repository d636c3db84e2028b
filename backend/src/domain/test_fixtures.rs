//! Builders shared by domain unit tests.

use super::{
    EmailAddress, EntityId, OwnerEmail, Participant, ParticipantDetails, ParticipantDraft,
    PersonName, Speaker, SpeakerDetails, SpeakerDraft, User,
};

pub(crate) fn id(raw: i64) -> EntityId {
    EntityId::new(raw).expect("fixture ids are positive")
}

pub(crate) fn email(raw: &str) -> EmailAddress {
    EmailAddress::parse(raw).expect("fixture emails are well formed")
}

pub(crate) fn owner(raw: &str) -> OwnerEmail {
    OwnerEmail::from(email(raw))
}

pub(crate) fn name(raw: &str) -> PersonName {
    PersonName::new(raw).expect("fixture names are valid")
}

pub(crate) fn user(raw_id: i64, address: &str) -> User {
    User {
        id: id(raw_id),
        email: email(address),
        full_name: name("Registered User"),
    }
}

pub(crate) fn speaker_draft(address: Option<&str>) -> SpeakerDraft {
    SpeakerDraft {
        full_name: name("Ada Lovelace"),
        bio: Some("Analytical engines".to_owned()),
        email: address.map(email),
        company: Some("Babbage & Co".to_owned()),
        date_of_birth: None,
    }
}

pub(crate) fn speaker(raw_id: i64, address: &str, owner_address: &str) -> Speaker {
    Speaker {
        id: id(raw_id),
        owner_email: owner(owner_address),
        details: SpeakerDetails {
            full_name: name("Ada Lovelace"),
            bio: None,
            email: email(address),
            company: None,
            date_of_birth: None,
        },
    }
}

pub(crate) fn participant_draft(address: Option<&str>) -> ParticipantDraft {
    ParticipantDraft {
        full_name: name("Grace Hopper"),
        email: address.map(email),
        phone: Some("+34 600 000 000".to_owned()),
    }
}

pub(crate) fn participant(raw_id: i64, address: &str, owner_address: &str) -> Participant {
    Participant {
        id: id(raw_id),
        owner_email: owner(owner_address),
        details: ParticipantDetails {
            full_name: name("Grace Hopper"),
            email: email(address),
            phone: None,
        },
    }
}
