//! Driving port for authentication.
//!
//! Inbound adapters call it to turn credentials into a principal email
//! without knowing how accounts are stored.

use async_trait::async_trait;

use crate::domain::{EmailAddress, Error, LoginCredentials};

/// Email of the development account accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_EMAIL: &str = "admin@emsx.com";
/// Password of the development account.
pub const FIXTURE_LOGIN_PASSWORD: &str = "password";

/// Authentication use-case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the principal's email.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<EmailAddress, Error>;
}

/// Development authenticator accepting a single fixed account.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<EmailAddress, Error> {
        if credentials.email().as_ref() == FIXTURE_LOGIN_EMAIL
            && credentials.password() == FIXTURE_LOGIN_PASSWORD
        {
            Ok(credentials.email().clone())
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
