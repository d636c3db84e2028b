//! Diesel and pool error mapping shared by the store adapters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::EmailAddress;
use crate::domain::ports::EntityStoreError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> EntityStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EntityStoreError::connection(message)
        }
    }
}

/// Map a Diesel failure. `email` is the address being written, if any; a
/// unique violation on a write becomes [`EntityStoreError::EmailTaken`].
pub(super) fn map_diesel_error(
    error: DieselError,
    email: Option<&EmailAddress>,
) -> EntityStoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match (error, email) {
        (DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _), Some(email)) => {
            EntityStoreError::email_taken(email.as_ref())
        }
        (DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _), _) => {
            EntityStoreError::connection("database connection error")
        }
        (DieselError::NotFound, _) => EntityStoreError::query("record not found"),
        (DieselError::QueryBuilderError(_), _) => EntityStoreError::query("database query error"),
        _ => EntityStoreError::query("database error"),
    }
}
