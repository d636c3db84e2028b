//! Error type shared by the entity store ports.

use super::define_port_error;

define_port_error! {
    /// Failures raised by user, speaker and participant store adapters.
    pub enum EntityStoreError {
        /// The backing store could not be reached.
        Connection { message: String } => "entity store connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "entity store query failed: {message}",
        /// The store's own email index rejected a write.
        EmailTaken { email: String } => "email {email} is already stored",
    }
}
