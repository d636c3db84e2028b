//! Port resolving the caller's identity for owner-scoped operations.

use crate::domain::OwnerEmail;

/// Source of the current caller's identity.
///
/// Implementations never fail: a missing or unreadable principal resolves to
/// [`OwnerEmail::anonymous`].
#[cfg_attr(test, mockall::automock)]
pub trait IdentityResolver {
    /// The authenticated principal's email, or the anonymous placeholder.
    fn current_identity(&self) -> OwnerEmail;
}

/// Resolver returning a fixed identity.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub OwnerEmail);

impl Default for FixedIdentity {
    fn default() -> Self {
        Self(OwnerEmail::anonymous())
    }
}

impl IdentityResolver for FixedIdentity {
    fn current_identity(&self) -> OwnerEmail {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_fixed_identity_is_anonymous() {
        assert!(FixedIdentity::default().current_identity().is_anonymous());
    }
}
