//! Internal Diesel row structs and their conversions to domain types.
//!
//! Rows are never exposed outside the persistence module. Conversions from
//! rows re-validate stored values and report bad data as query errors.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::ports::EntityStoreError;
use crate::domain::{
    EmailAddress, EntityId, NewParticipant, NewSpeaker, OwnerEmail, Participant,
    ParticipantDetails, PersonName, Speaker, SpeakerDetails, User,
};

use super::schema::{participants, speakers, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = speakers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SpeakerRow {
    pub id: i64,
    pub full_name: String,
    pub bio: Option<String>,
    pub email: String,
    pub company: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub owner_email: String,
}

/// Insert and update share the same columns.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = speakers)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct SpeakerWrite<'a> {
    pub full_name: &'a str,
    pub bio: Option<&'a str>,
    pub email: &'a str,
    pub company: Option<&'a str>,
    pub date_of_birth: Option<NaiveDate>,
    pub owner_email: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = participants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ParticipantRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub owner_email: String,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = participants)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ParticipantWrite<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub owner_email: &'a str,
}

fn corrupt(column: &str, error: impl std::fmt::Display) -> EntityStoreError {
    EntityStoreError::query(format!("stored {column} is invalid: {error}"))
}

fn id_column(raw: i64) -> Result<EntityId, EntityStoreError> {
    EntityId::new(raw).map_err(|err| corrupt("id", err))
}

fn email_column(raw: &str) -> Result<EmailAddress, EntityStoreError> {
    EmailAddress::normalize(raw).ok_or_else(|| corrupt("email", "empty"))
}

fn name_column(raw: &str) -> Result<PersonName, EntityStoreError> {
    PersonName::new(raw).map_err(|err| corrupt("full_name", err))
}

impl TryFrom<UserRow> for User {
    type Error = EntityStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: id_column(row.id)?,
            email: email_column(&row.email)?,
            full_name: name_column(&row.full_name)?,
        })
    }
}

impl TryFrom<SpeakerRow> for Speaker {
    type Error = EntityStoreError;

    fn try_from(row: SpeakerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: id_column(row.id)?,
            owner_email: OwnerEmail::from_principal(Some(&row.owner_email)),
            details: SpeakerDetails {
                full_name: name_column(&row.full_name)?,
                bio: row.bio,
                email: email_column(&row.email)?,
                company: row.company,
                date_of_birth: row.date_of_birth,
            },
        })
    }
}

impl TryFrom<ParticipantRow> for Participant {
    type Error = EntityStoreError;

    fn try_from(row: ParticipantRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: id_column(row.id)?,
            owner_email: OwnerEmail::from_principal(Some(&row.owner_email)),
            details: ParticipantDetails {
                full_name: name_column(&row.full_name)?,
                email: email_column(&row.email)?,
                phone: row.phone,
            },
        })
    }
}

impl<'a> SpeakerWrite<'a> {
    pub(crate) fn new(owner: &'a OwnerEmail, details: &'a SpeakerDetails) -> Self {
        Self {
            full_name: details.full_name.as_ref(),
            bio: details.bio.as_deref(),
            email: details.email.as_ref(),
            company: details.company.as_deref(),
            date_of_birth: details.date_of_birth,
            owner_email: owner.as_ref(),
        }
    }
}

impl<'a> From<&'a NewSpeaker> for SpeakerWrite<'a> {
    fn from(value: &'a NewSpeaker) -> Self {
        Self::new(&value.owner_email, &value.details)
    }
}

impl<'a> From<&'a Speaker> for SpeakerWrite<'a> {
    fn from(value: &'a Speaker) -> Self {
        Self::new(&value.owner_email, &value.details)
    }
}

impl<'a> ParticipantWrite<'a> {
    pub(crate) fn new(owner: &'a OwnerEmail, details: &'a ParticipantDetails) -> Self {
        Self {
            full_name: details.full_name.as_ref(),
            email: details.email.as_ref(),
            phone: details.phone.as_deref(),
            owner_email: owner.as_ref(),
        }
    }
}

impl<'a> From<&'a NewParticipant> for ParticipantWrite<'a> {
    fn from(value: &'a NewParticipant) -> Self {
        Self::new(&value.owner_email, &value.details)
    }
}

impl<'a> From<&'a Participant> for ParticipantWrite<'a> {
    fn from(value: &'a Participant) -> Self {
        Self::new(&value.owner_email, &value.details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn speaker_row() -> SpeakerRow {
        SpeakerRow {
            id: 3,
            full_name: "Ada Lovelace".to_owned(),
            bio: None,
            email: "Ada@Example.com".to_owned(),
            company: Some("Babbage & Co".to_owned()),
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10),
            owner_email: "chair@conf.org".to_owned(),
        }
    }

    #[rstest]
    fn speaker_rows_convert_and_normalise_email() {
        let speaker = Speaker::try_from(speaker_row()).expect("valid row");
        assert_eq!(speaker.id.get(), 3);
        assert_eq!(speaker.details.email.as_ref(), "ada@example.com");
        assert_eq!(speaker.owner_email.as_ref(), "chair@conf.org");
    }

    #[rstest]
    #[case(SpeakerRow { id: 0, ..speaker_row() })]
    #[case(SpeakerRow { email: " ".to_owned(), ..speaker_row() })]
    #[case(SpeakerRow { full_name: String::new(), ..speaker_row() })]
    fn corrupt_rows_are_query_errors(#[case] row: SpeakerRow) {
        let err = Speaker::try_from(row).expect_err("corrupt row");
        assert!(matches!(err, EntityStoreError::Query { .. }));
    }

    #[rstest]
    fn write_rows_borrow_domain_fields() {
        let speaker = Speaker::try_from(speaker_row()).expect("valid row");
        let write = SpeakerWrite::from(&speaker);
        assert_eq!(write.email, "ada@example.com");
        assert_eq!(write.company, Some("Babbage & Co"));
        assert_eq!(write.owner_email, "chair@conf.org");
    }
}
