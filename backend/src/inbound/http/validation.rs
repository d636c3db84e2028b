//! Request field validation shared by the entity handlers.
//!
//! Every rejection is a 400 `invalid_request` whose details name the field
//! and a stable code.

use serde_json::json;

use crate::domain::{EmailAddress, EntityId, Error, PersonName};

pub(crate) fn field_error(field: &str, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}

/// Optional email: absent or blank means "none supplied".
pub(crate) fn optional_email(raw: Option<&str>) -> Result<Option<EmailAddress>, Error> {
    match raw {
        Some(value) if !value.trim().is_empty() => EmailAddress::parse(value)
            .map(Some)
            .map_err(|err| field_error("email", err.code(), err.to_string())),
        _ => Ok(None),
    }
}

/// Required email, used by endpoints that cannot proceed without one.
pub(crate) fn required_email(raw: &str) -> Result<EmailAddress, Error> {
    EmailAddress::parse(raw).map_err(|err| field_error("email", err.code(), err.to_string()))
}

pub(crate) fn full_name(raw: &str) -> Result<PersonName, Error> {
    PersonName::new(raw).map_err(|err| field_error("fullName", err.code(), err.to_string()))
}

pub(crate) fn entity_id(raw: i64) -> Result<EntityId, Error> {
    EntityId::new(raw).map_err(|err| field_error("id", "invalid_id", err.to_string()))
}

/// Blank optional text collapses to `None`; anything else is trimmed.
pub(crate) fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn detail_code(error: &Error) -> Option<&str> {
        error.details().and_then(|d| d["code"].as_str())
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn blank_optional_email_is_none(#[case] raw: Option<&str>) {
        assert_eq!(optional_email(raw).expect("blank is accepted"), None);
    }

    #[rstest]
    fn malformed_email_names_the_field() {
        let err = optional_email(Some("nope")).expect_err("malformed");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.details().and_then(|d| d["field"].as_str()), Some("email"));
        assert_eq!(detail_code(&err), Some("invalid_email"));
    }

    #[rstest]
    #[case("", "empty_full_name")]
    #[case("   ", "empty_full_name")]
    fn blank_names_are_rejected(#[case] raw: &str, #[case] code: &str) {
        let err = full_name(raw).expect_err("blank name");
        assert_eq!(detail_code(&err), Some(code));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    fn non_positive_ids_are_rejected(#[case] raw: i64) {
        let err = entity_id(raw).expect_err("bad id");
        assert_eq!(detail_code(&err), Some("invalid_id"));
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some("  "), None)]
    #[case(Some(" Acme "), Some("Acme"))]
    fn optional_text_trims_and_drops_blanks(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
        assert_eq!(
            optional_text(raw.map(str::to_owned)).as_deref(),
            expected
        );
    }
}
