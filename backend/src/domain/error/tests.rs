//! Tests for domain error construction and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const NIL_TRACE: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn conflict() -> Error {
    Error::conflict("email already registered")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("login"), ErrorCode::Unauthorized)]
#[case(Error::forbidden("nope"), ErrorCode::Forbidden)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("taken"), ErrorCode::Conflict)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_codes(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn try_new_rejects_blank_messages(#[case] message: &str) {
    let result = Error::try_new(ErrorCode::Conflict, message);
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn try_with_trace_id_rejects_blank_values(conflict: Error) {
    let result = conflict.try_with_trace_id("  ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
fn trace_id_is_absent_outside_a_scope(conflict: Error) {
    assert!(conflict.trace_id().is_none());
}

#[tokio::test]
async fn trace_id_is_captured_inside_a_scope() {
    let trace_id: TraceId = NIL_TRACE.parse().expect("nil uuid parses");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(NIL_TRACE));
}

#[rstest]
fn serialises_camel_case_and_skips_absent_fields(conflict: Error) {
    let value = serde_json::to_value(conflict).expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "conflict", "message": "email already registered" })
    );
}

#[rstest]
fn serialises_details_and_trace_id() {
    let error = Error::invalid_request("email is invalid")
        .with_trace_id(NIL_TRACE)
        .with_details(json!({ "field": "email", "code": "invalid_email" }));
    let value = serde_json::to_value(error).expect("serialise error");
    assert_eq!(value["traceId"], NIL_TRACE);
    assert_eq!(value["details"]["field"], "email");
}

#[rstest]
fn deserialising_rejects_blank_message() {
    let payload = json!({ "code": "not_found", "message": " " });
    let result: Result<Error, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[tokio::test]
async fn deserialising_ignores_ambient_trace_id() {
    let trace_id: TraceId = NIL_TRACE.parse().expect("nil uuid parses");
    let payload = json!({ "code": "forbidden", "message": "no" });
    let error: Error = TraceId::scope(trace_id, async move {
        serde_json::from_value(payload).expect("payload is valid")
    })
    .await;
    assert!(error.trace_id().is_none());
}
