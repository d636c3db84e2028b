//! Login credentials.
//!
//! Handlers build these from raw strings before calling the
//! [`LoginService`](super::ports::LoginService) port.

use std::fmt;

use zeroize::Zeroizing;

use super::{EmailAddress, EmailValidationError};

/// Reasons a login payload is rejected before authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// The email was missing or malformed.
    InvalidEmail(EmailValidationError),
    /// The password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// The password is kept verbatim, whitespace included, and wiped from memory
/// on drop.
///
/// # Examples
/// ```
/// use emsx_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Admin@EMSX.com", "password").unwrap();
/// assert_eq!(creds.email().as_ref(), "admin@emsx.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw email and password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = EmailAddress::parse(email).map_err(LoginValidationError::InvalidEmail)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised login email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password as supplied.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::InvalidEmail(EmailValidationError::Empty))]
    #[case("admin", "pw", LoginValidationError::InvalidEmail(EmailValidationError::Malformed))]
    #[case("admin@emsx.com", "", LoginValidationError::EmptyPassword)]
    fn rejects_invalid_parts(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password).expect_err("invalid input");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn keeps_password_whitespace() {
        let creds = LoginCredentials::try_from_parts("a@x.com", " pw ").expect("valid input");
        assert_eq!(creds.password(), " pw ");
    }
}
