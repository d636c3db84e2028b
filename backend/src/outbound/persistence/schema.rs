//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Accounts owned by the authentication subsystem. Read-only here.
    users (id) {
        id -> Int8,
        /// Normalised email; unique within the table.
        email -> Varchar,
        full_name -> Varchar,
    }
}

diesel::table! {
    /// Conference speakers.
    speakers (id) {
        id -> Int8,
        full_name -> Varchar,
        bio -> Nullable<Text>,
        /// Normalised email; unique within the table.
        email -> Varchar,
        company -> Nullable<Varchar>,
        date_of_birth -> Nullable<Date>,
        /// Identity of the creating caller.
        owner_email -> Varchar,
    }
}

diesel::table! {
    /// Conference participants.
    participants (id) {
        id -> Int8,
        full_name -> Varchar,
        /// Normalised email; unique within the table.
        email -> Varchar,
        phone -> Nullable<Varchar>,
        /// Identity of the registering caller.
        owner_email -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, speakers, participants);
