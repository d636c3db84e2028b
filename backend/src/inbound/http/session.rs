//! Session helpers and the per-request owner identity.
//!
//! Handlers never touch the raw Actix session. They either use
//! [`SessionContext`] for login/logout or take a [`CurrentOwner`] extractor
//! which resolves the caller's identity once per request.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::ports::IdentityResolver;
use crate::domain::{EmailAddress, Error, OwnerEmail};

pub(crate) const PRINCIPAL_KEY: &str = "principal_email";

/// Newtype exposing the session operations handlers need.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap an Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the authenticated principal in the session cookie.
    pub fn persist_principal(&self, email: &EmailAddress) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(PRINCIPAL_KEY, email.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Raw principal name stored in the session, if any.
    pub fn principal(&self) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(PRINCIPAL_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Drop every session value and expire the cookie.
    pub fn purge(&self) {
        self.0.purge();
    }
}

impl IdentityResolver for SessionContext {
    fn current_identity(&self) -> OwnerEmail {
        match self.principal() {
            Ok(principal) => OwnerEmail::from_principal(principal.as_deref()),
            Err(error) => {
                warn!(%error, "unreadable session principal; treating caller as anonymous");
                OwnerEmail::anonymous()
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}

/// Owner identity of the caller, resolved from the session.
///
/// Unauthenticated callers resolve to [`OwnerEmail::anonymous`]; this
/// extractor never rejects a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentOwner(pub OwnerEmail);

impl FromRequest for CurrentOwner {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = SessionContext::from_request(req, payload);
        Box::pin(async move {
            let session = fut.await?;
            Ok(CurrentOwner(session.current_identity()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    fn session_test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .route(
                "/whoami",
                web::get().to(|owner: CurrentOwner| async move {
                    HttpResponse::Ok().body(owner.0.to_string())
                }),
            )
            .route(
                "/raw/{principal}",
                web::get().to(|session: Session, path: web::Path<String>| async move {
                    session
                        .insert(PRINCIPAL_KEY, path.into_inner())
                        .expect("store raw principal");
                    HttpResponse::Ok()
                }),
            )
            .route(
                "/login",
                web::get().to(|session: SessionContext| async move {
                    let email = EmailAddress::parse("Chair@Conf.org").expect("fixture email");
                    session.persist_principal(&email)?;
                    Ok::<_, Error>(HttpResponse::Ok())
                }),
            )
    }

    fn session_cookie(response: &actix_web::dev::ServiceResponse) -> Cookie<'static> {
        response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(Cookie::into_owned)
            .expect("session cookie set")
    }

    async fn body_text(response: actix_web::dev::ServiceResponse) -> String {
        assert_eq!(response.status(), StatusCode::OK);
        String::from_utf8(test::read_body(response).await.to_vec()).expect("utf-8 body")
    }

    #[actix_web::test]
    async fn missing_principal_resolves_to_anonymous() {
        let app = test::init_service(session_test_app()).await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(body_text(response).await, "anonymous@emsx.com");
    }

    #[actix_web::test]
    async fn persisted_principal_resolves_to_owner() {
        let app = test::init_service(session_test_app()).await;
        let login =
            test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
        let cookie = session_cookie(&login);

        let request = test::TestRequest::get()
            .uri("/whoami")
            .cookie(cookie)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(body_text(response).await, "chair@conf.org");
    }

    #[actix_web::test]
    async fn legacy_anonymous_principal_resolves_to_anonymous() {
        let app = test::init_service(session_test_app()).await;
        let raw = test::call_service(
            &app,
            test::TestRequest::get().uri("/raw/anonymousUser").to_request(),
        )
        .await;
        let cookie = session_cookie(&raw);

        let request = test::TestRequest::get()
            .uri("/whoami")
            .cookie(cookie)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(body_text(response).await, "anonymous@emsx.com");
    }
}
