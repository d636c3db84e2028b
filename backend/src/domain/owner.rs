//! Owner identity attached to speaker and participant records.

use std::fmt;

use super::EmailAddress;

/// Placeholder identity used when no principal is authenticated.
pub const ANONYMOUS_OWNER: &str = "anonymous@emsx.com";

/// Principal name some session stores use for unauthenticated callers.
pub const ANONYMOUS_PRINCIPAL: &str = "anonymousUser";

/// Normalised email of the caller that owns a record.
///
/// Owner identity scopes visibility only; it plays no part in email
/// uniqueness.
///
/// # Examples
/// ```
/// use emsx_backend::domain::OwnerEmail;
///
/// assert_eq!(OwnerEmail::from_principal(None), OwnerEmail::anonymous());
/// let owner = OwnerEmail::from_principal(Some("Organiser@EMSX.com"));
/// assert_eq!(owner.as_ref(), "organiser@emsx.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerEmail(String);

impl OwnerEmail {
    /// The fixed anonymous identity.
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_OWNER.to_owned())
    }

    /// Resolve a principal name into an owner identity.
    ///
    /// Missing, blank and `anonymousUser` principals all collapse to
    /// [`OwnerEmail::anonymous`].
    pub fn from_principal(principal: Option<&str>) -> Self {
        principal
            .map(str::trim)
            .filter(|name| *name != ANONYMOUS_PRINCIPAL)
            .and_then(EmailAddress::normalize)
            .map_or_else(Self::anonymous, Self::from)
    }

    /// Whether this is the anonymous placeholder.
    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_OWNER
    }
}

impl From<EmailAddress> for OwnerEmail {
    fn from(value: EmailAddress) -> Self {
        Self(value.into())
    }
}

impl AsRef<str> for OwnerEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for OwnerEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
