//! Email address value object.
//!
//! Every comparison in the uniqueness rules happens on the normalised form:
//! surrounding whitespace removed and ASCII/Unicode letters lowercased.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum accepted length for an email address, in characters.
pub const EMAIL_MAX: usize = 254;

/// Validation errors returned by [`EmailAddress::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    /// Blank input.
    Empty,
    /// Longer than [`EMAIL_MAX`] characters.
    TooLong { max: usize },
    /// Not shaped like `local@domain`.
    Malformed,
}

impl EmailValidationError {
    /// Stable code used in request validation details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty_email",
            Self::TooLong { .. } => "email_too_long",
            Self::Malformed => "invalid_email",
        }
    }
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "email must not be empty"),
            Self::TooLong { max } => write!(f, "email must be at most {max} characters"),
            Self::Malformed => write!(f, "email must look like local@domain"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// Normalised email address.
///
/// ## Invariants
/// - No leading or trailing whitespace.
/// - Lowercase.
/// - Never empty.
///
/// # Examples
/// ```
/// use emsx_backend::domain::EmailAddress;
///
/// let email = EmailAddress::normalize(" Ada@Example.COM ").unwrap();
/// assert_eq!(email.as_ref(), "ada@example.com");
/// assert!(EmailAddress::normalize("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trim and lowercase `raw`, returning `None` when nothing is left.
    ///
    /// No shape check is applied; this is the comparison key used by the
    /// uniqueness rules.
    pub fn normalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    /// Normalise and check that `raw` is shaped like an address.
    pub fn parse(raw: &str) -> Result<Self, EmailValidationError> {
        let email = Self::normalize(raw).ok_or(EmailValidationError::Empty)?;
        if email.0.chars().count() > EMAIL_MAX {
            return Err(EmailValidationError::TooLong { max: EMAIL_MAX });
        }
        let (local, domain) = email
            .0
            .split_once('@')
            .ok_or(EmailValidationError::Malformed)?;
        let well_formed = !local.is_empty()
            && !domain.is_empty()
            && !domain.contains('@')
            && !email.0.chars().any(char::is_whitespace);
        if !well_formed {
            return Err(EmailValidationError::Malformed);
        }
        Ok(email)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
