//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};

use crate::domain::ports::{FIXTURE_LOGIN_EMAIL, FIXTURE_LOGIN_PASSWORD, FixtureLoginService};
use crate::outbound::persistence::MemoryEntityStore;

use super::state::{EntityStores, HttpState};

/// Session middleware with a throwaway key, cookie `session`, not `Secure`.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Real services over an empty in-memory store, plus the store itself for
/// seeding and assertions.
pub fn memory_state() -> (HttpState, Arc<MemoryEntityStore>) {
    let store = Arc::new(MemoryEntityStore::new());
    let stores = EntityStores {
        users: store.clone(),
        speakers: store.clone(),
        participants: store.clone(),
    };
    (
        HttpState::from_stores(stores, Arc::new(FixtureLoginService)),
        store,
    )
}

/// Status and JSON body of a response; non-JSON bodies read as `Null`.
pub async fn json_body<B: MessageBody>(response: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Session cookie set by `response`, if any.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// Login request for the fixture account.
pub fn fixture_login() -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({
            "email": FIXTURE_LOGIN_EMAIL,
            "password": FIXTURE_LOGIN_PASSWORD,
        }))
}
