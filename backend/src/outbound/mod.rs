//! Outbound adapters implementing the driven ports.
//!
//! Adapters only translate between domain types and storage
//! representations; no business rules live here.

pub mod persistence;
