//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST handler, the domain schema wrappers from
//! [`crate::inbound::http::schemas`] and the session cookie security scheme.
//! Swagger UI serves it in debug builds; `openapi-dump` prints it.

use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::emails::AvailabilityResponse;
use crate::inbound::http::participants::{ParticipantRequest, ParticipantResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::speakers::{SpeakerRequest, SpeakerResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login. Without it the caller acts as the anonymous owner.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "EMSX backend API",
        description = "Owner-scoped speakers and participants with email uniqueness across every record kind."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::speakers::list_speakers,
        crate::inbound::http::speakers::get_speaker,
        crate::inbound::http::speakers::create_speaker,
        crate::inbound::http::speakers::update_speaker,
        crate::inbound::http::speakers::delete_speaker,
        crate::inbound::http::participants::list_participants,
        crate::inbound::http::participants::get_participant,
        crate::inbound::http::participants::create_participant,
        crate::inbound::http::participants::update_participant,
        crate::inbound::http::participants::delete_participant,
        crate::inbound::http::emails::email_availability,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        LoginRequest,
        SpeakerRequest,
        SpeakerResponse,
        ParticipantRequest,
        ParticipantResponse,
        AvailabilityResponse
    )),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "speakers", description = "Speakers owned by the caller"),
        (name = "participants", description = "Participants owned by the caller"),
        (name = "emails", description = "Cross-record email availability"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
