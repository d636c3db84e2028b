//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod emails;
pub mod error;
pub mod health;
pub mod participants;
pub mod schemas;
pub mod session;
pub mod speakers;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use crate::domain::ApiResult;

use self::error::{json_error_handler, path_error_handler, query_error_handler};

/// Register every `/api/v1` handler and the extractor error handlers.
///
/// The caller wraps the scope with session middleware and provides
/// [`state::HttpState`] as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(auth::login)
        .service(auth::logout)
        .service(speakers::list_speakers)
        .service(speakers::get_speaker)
        .service(speakers::create_speaker)
        .service(speakers::update_speaker)
        .service(speakers::delete_speaker)
        .service(participants::list_participants)
        .service(participants::get_participant)
        .service(participants::create_participant)
        .service(participants::update_participant)
        .service(participants::delete_participant)
        .service(emails::email_availability);
}
