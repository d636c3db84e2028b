//! Entity kinds and identifiers shared by the uniqueness rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The record kinds that can hold an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Accounts owned by the authentication subsystem.
    User,
    /// Conference speakers.
    Speaker,
    /// Conference participants.
    Participant,
}

impl EntityKind {
    /// Every kind, in the order the uniqueness rules consult them.
    pub const ALL: [EntityKind; 3] = [Self::User, Self::Speaker, Self::Participant];

    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Speaker => "speaker",
            Self::Participant => "participant",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an identifier is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("entity id must be positive, got {0}")]
pub struct InvalidEntityId(pub i64);

/// Storage-assigned numeric identifier.
///
/// # Examples
/// ```
/// use emsx_backend::domain::EntityId;
///
/// let id = EntityId::new(7).unwrap();
/// assert_eq!(id.get(), 7);
/// assert!(EntityId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct EntityId(i64);

impl EntityId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: i64) -> Result<Self, InvalidEntityId> {
        if raw > 0 {
            Ok(Self(raw))
        } else {
            Err(InvalidEntityId(raw))
        }
    }

    /// Raw numeric value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for EntityId {
    type Error = InvalidEntityId;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityId> for i64 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
