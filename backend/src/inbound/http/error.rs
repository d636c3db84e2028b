//! HTTP mapping for domain errors.
//!
//! The domain error stays transport agnostic; this module picks status codes,
//! writes the `trace-id` header and hides internal failure messages from
//! clients. Extractor rejections (bad JSON, bad path or query parameters)
//! are turned into the same `invalid_request` envelope.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::{EntityServiceError, Error, ErrorCode, TRACE_ID_HEADER};

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let redacted = Error::internal("Internal server error");
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::InternalError {
            error!(message = %self.message(), trace_id = ?self.trace_id(), "internal error");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl ResponseError for EntityServiceError {
    fn status_code(&self) -> StatusCode {
        status_for(Error::from(self.clone()).code())
    }

    fn error_response(&self) -> HttpResponse {
        Error::from(self.clone()).error_response()
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

fn rejection(field: &str, code: &str, message: String) -> actix_web::Error {
    warn!(field, code, %message, "request rejected");
    Error::invalid_request(message)
        .with_details(json!({ "field": field, "code": code }))
        .into()
}

/// `JsonConfig` error handler producing `invalid_request` payloads.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejection("body", "invalid_body", format!("invalid request body: {err}"))
}

/// `PathConfig` error handler producing `invalid_request` payloads.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    rejection("id", "invalid_id", format!("invalid path parameter: {err}"))
}

/// `QueryConfig` error handler producing `invalid_request` payloads.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    rejection("query", "invalid_query", format!("invalid query string: {err}"))
}
