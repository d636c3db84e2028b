//! Display name for people recorded by the service.

use std::fmt;

/// Maximum length of a person's full name, in characters.
pub const PERSON_NAME_MAX: usize = 120;

/// Validation errors for [`PersonName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonNameError {
    /// Blank after trimming.
    Empty,
    /// Longer than [`PERSON_NAME_MAX`].
    TooLong { max: usize },
}

impl PersonNameError {
    /// Stable code used in request validation details.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty_full_name",
            Self::TooLong { .. } => "full_name_too_long",
        }
    }
}

impl fmt::Display for PersonNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "full name must not be empty"),
            Self::TooLong { max } => write!(f, "full name must be at most {max} characters"),
        }
    }
}

impl std::error::Error for PersonNameError {}

/// Trimmed, non-empty full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    /// Trim and validate `raw`.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PersonNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PersonNameError::Empty);
        }
        if trimmed.chars().count() > PERSON_NAME_MAX {
            return Err(PersonNameError::TooLong {
                max: PERSON_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}
