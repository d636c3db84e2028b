//! Login and logout handlers.
//!
//! ```text
//! POST /api/v1/login {"email":"admin@emsx.com","password":"password"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{Error, LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Account email.
    #[schema(example = "admin@emsx.com")]
    pub email: String,
    /// Account password.
    pub password: String,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::InvalidEmail(inner) => Error::invalid_request(inner.to_string())
            .with_details(json!({ "field": "email", "code": inner.code() })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Authenticate and store the principal in the session cookie.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials =
        LoginCredentials::try_from_parts(&email, &password).map_err(map_login_validation_error)?;
    let principal = state.login.authenticate(&credentials).await?;
    session.persist_principal(&principal)?;
    info!(%principal, "principal logged in");
    Ok(HttpResponse::Ok().finish())
}

/// Forget the session's principal. Always succeeds.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockLoginService;
    use crate::inbound::http::test_utils::{memory_state, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::Arc;

    async fn post_login(state: HttpState, email: &str, password: &str) -> (StatusCode, Value, bool) {
        let app = actix_test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(login).service(logout)),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(&LoginRequest {
                email: email.into(),
                password: password.into(),
            })
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let has_cookie = response
            .response()
            .cookies()
            .any(|cookie| cookie.name() == "session");
        let body = actix_test::read_body(response).await;
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value, has_cookie)
    }

    #[actix_web::test]
    async fn fixture_account_logs_in() {
        let (state, _) = memory_state();
        let (status, _, has_cookie) = post_login(state, "admin@emsx.com", "password").await;
        assert_eq!(status, StatusCode::OK);
        assert!(has_cookie);
    }

    #[rstest]
    #[case("", "password", "email", "empty_email")]
    #[case("admin", "password", "email", "invalid_email")]
    #[case("admin@emsx.com", "", "password", "empty_password")]
    #[actix_web::test]
    async fn malformed_payloads_are_rejected(
        #[case] email: &str,
        #[case] password: &str,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let (state, _) = memory_state();
        let (status, body, _) = post_login(state, email, password).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], field);
        assert_eq!(body["details"]["code"], code);
    }

    #[actix_web::test]
    async fn login_delegates_to_the_port() {
        let (mut state, _) = memory_state();
        let mut login_port = MockLoginService::new();
        login_port
            .expect_authenticate()
            .withf(|creds| creds.email().as_ref() == "chair@conf.org")
            .times(1)
            .return_once(|_| Err(Error::unauthorized("invalid credentials")));
        state.login = Arc::new(login_port);

        let (status, body, _) = post_login(state, "Chair@Conf.org", "pw").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "unauthorized");
    }

    #[actix_web::test]
    async fn logout_returns_no_content() {
        let app = actix_test::init_service(
            App::new()
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(logout)),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post().uri("/api/v1/logout").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
