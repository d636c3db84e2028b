//! Tests for the cross-kind email uniqueness rules.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{MockParticipantRepository, MockSpeakerRepository, MockUserRepository};
use crate::domain::test_fixtures::{id, participant, speaker, user};

struct Stores {
    users: MockUserRepository,
    speakers: MockSpeakerRepository,
    participants: MockParticipantRepository,
}

impl Stores {
    fn new() -> Self {
        Self {
            users: MockUserRepository::new(),
            speakers: MockSpeakerRepository::new(),
            participants: MockParticipantRepository::new(),
        }
    }

    /// Each store answers existence checks with the given flag.
    fn holding(users: bool, speakers: bool, participants: bool) -> Self {
        let mut stores = Self::new();
        stores
            .users
            .expect_exists_by_email()
            .returning(move |_| Ok(users));
        stores
            .speakers
            .expect_exists_by_email()
            .returning(move |_| Ok(speakers));
        stores
            .participants
            .expect_exists_by_email()
            .returning(move |_| Ok(participants));
        stores
    }

    fn validator(self) -> EmailUniquenessValidator {
        EmailUniquenessValidator::new(
            Arc::new(self.users),
            Arc::new(self.speakers),
            Arc::new(self.participants),
        )
    }
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
#[tokio::test]
async fn blank_email_never_exists_and_touches_no_store(#[case] email: Option<&str>) {
    let validator = Stores::new().validator();
    assert!(!validator.email_exists(email).await.expect("no store access"));
    assert!(validator.is_email_available(email).await.expect("no store access"));
}

#[tokio::test]
async fn lookups_use_the_normalised_email() {
    let mut stores = Stores::new();
    stores
        .users
        .expect_exists_by_email()
        .withf(|email| email.as_ref() == "foo@bar.com")
        .times(1)
        .return_once(|_| Ok(true));
    let validator = stores.validator();

    assert!(validator.email_exists(Some(" Foo@Bar.com ")).await.expect("lookup"));
}

#[rstest]
#[case(true, false, false)]
#[case(false, true, false)]
#[case(false, false, true)]
#[tokio::test]
async fn email_exists_when_any_kind_holds_it(
    #[case] users: bool,
    #[case] speakers: bool,
    #[case] participants: bool,
) {
    let validator = Stores::holding(users, speakers, participants).validator();
    assert!(validator.email_exists(Some("a@x.com")).await.expect("lookup"));
    assert!(!validator.is_email_available(Some("a@x.com")).await.expect("lookup"));
}

#[tokio::test]
async fn validate_unique_rejects_held_email_with_normalised_value() {
    let validator = Stores::holding(false, true, false).validator();
    let err = validator
        .validate_email_unique(Some("A@X.com"))
        .await
        .expect_err("speaker holds the email");
    assert_eq!(
        err,
        EmailUniquenessError::AlreadyExists {
            email: "a@x.com".to_owned()
        }
    );
}

#[tokio::test]
async fn validate_unique_accepts_free_email() {
    let validator = Stores::holding(false, false, false).validator();
    validator
        .validate_email_unique(Some("free@x.com"))
        .await
        .expect("nobody holds the email");
}

#[tokio::test]
async fn store_failures_propagate() {
    let mut stores = Stores::new();
    stores
        .users
        .expect_exists_by_email()
        .return_once(|_| Err(EntityStoreError::connection("refused")));
    let validator = stores.validator();

    let err = validator
        .validate_email_unique(Some("a@x.com"))
        .await
        .expect_err("store failure");
    assert!(matches!(
        err,
        EmailUniquenessError::Store(EntityStoreError::Connection { .. })
    ));
}

#[rstest]
#[case(None)]
#[case(Some("  "))]
#[tokio::test]
async fn update_without_email_always_succeeds(#[case] email: Option<&str>) {
    let validator = Stores::new().validator();
    validator
        .validate_email_unique_for_update(email, id(1), EntityKind::Speaker)
        .await
        .expect("no change requested");
}

#[tokio::test]
async fn speaker_may_keep_its_own_email() {
    let mut stores = Stores::holding(false, false, false);
    stores
        .speakers
        .expect_find_by_email()
        .return_once(|_| Ok(Some(speaker(4, "a@x.com", "o1@x.com"))));
    let validator = stores.validator();

    validator
        .validate_email_unique_for_update(Some("A@x.com "), id(4), EntityKind::Speaker)
        .await
        .expect("own email is allowed");
}

#[tokio::test]
async fn speaker_may_not_take_another_speakers_email() {
    let mut stores = Stores::holding(false, false, false);
    stores
        .speakers
        .expect_find_by_email()
        .return_once(|_| Ok(Some(speaker(5, "a@x.com", "o1@x.com"))));
    let validator = stores.validator();

    let err = validator
        .validate_email_unique_for_update(Some("a@x.com"), id(4), EntityKind::Speaker)
        .await
        .expect_err("held by speaker 5");
    assert!(matches!(err, EmailUniquenessError::AlreadyExists { .. }));
}

#[tokio::test]
async fn participant_may_keep_its_own_email() {
    let mut stores = Stores::holding(false, false, false);
    stores
        .participants
        .expect_find_by_email()
        .return_once(|_| Ok(Some(participant(2, "p@x.com", "o1@x.com"))));
    let validator = stores.validator();

    validator
        .validate_email_unique_for_update(Some("p@x.com"), id(2), EntityKind::Participant)
        .await
        .expect("own email is allowed");
}

#[rstest]
#[case(EntityKind::Speaker)]
#[case(EntityKind::Participant)]
#[tokio::test]
async fn email_held_by_a_user_blocks_any_id(#[case] kind: EntityKind) {
    let mut stores = Stores::holding(true, false, false);
    stores
        .speakers
        .expect_find_by_email()
        .returning(|_| Ok(None));
    stores
        .participants
        .expect_find_by_email()
        .returning(|_| Ok(None));
    let validator = stores.validator();

    let err = validator
        .validate_email_unique_for_update(Some("a@x.com"), id(1), kind)
        .await
        .expect_err("held by a user");
    assert_eq!(
        err,
        EmailUniquenessError::AlreadyExists {
            email: "a@x.com".to_owned()
        }
    );
}

#[tokio::test]
async fn same_id_in_a_different_kind_does_not_exempt() {
    let mut stores = Stores::holding(false, true, false);
    stores
        .participants
        .expect_find_by_email()
        .returning(|_| Ok(None));
    let validator = stores.validator();

    let err = validator
        .validate_email_unique_for_update(Some("a@x.com"), id(4), EntityKind::Participant)
        .await
        .expect_err("speaker 4 holds it");
    assert!(matches!(err, EmailUniquenessError::AlreadyExists { .. }));
}

#[tokio::test]
async fn user_kind_updates_use_user_holder() {
    let mut stores = Stores::holding(false, false, false);
    stores
        .users
        .expect_find_by_email()
        .return_once(|_| Ok(Some(user(8, "u@x.com"))));
    let validator = stores.validator();

    validator
        .validate_email_unique_for_update(Some("u@x.com"), id(8), EntityKind::User)
        .await
        .expect("user keeps own email");
}
