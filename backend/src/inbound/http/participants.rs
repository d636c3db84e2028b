//! Participant HTTP handlers.
//!
//! ```text
//! GET    /api/v1/participants
//! GET    /api/v1/participants/{id}
//! POST   /api/v1/participants
//! PUT    /api/v1/participants/{id}
//! DELETE /api/v1/participants/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Participant, ParticipantDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::CurrentOwner;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{entity_id, full_name, optional_email, optional_text};

/// Participant fields accepted on create and update.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRequest {
    #[serde(default)]
    #[schema(example = "Grace Hopper")]
    pub full_name: String,
    /// Required on create; omitted on update keeps the stored address.
    #[schema(example = "grace@example.org")]
    pub email: Option<String>,
    #[schema(example = "+1 555 0100")]
    pub phone: Option<String>,
}

impl TryFrom<ParticipantRequest> for ParticipantDraft {
    type Error = Error;

    fn try_from(value: ParticipantRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            full_name: full_name(&value.full_name)?,
            email: optional_email(value.email.as_deref())?,
            phone: optional_text(value.phone),
        })
    }
}

/// Participant as returned to its owner.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub owner_email: String,
}

impl From<Participant> for ParticipantResponse {
    fn from(value: Participant) -> Self {
        Self {
            id: value.id.get(),
            full_name: value.details.full_name.into(),
            email: value.details.email.into(),
            phone: value.details.phone,
            owner_email: value.owner_email.to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/participants",
    responses(
        (status = 200, description = "Participants owned by the caller", body = [ParticipantResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["participants"],
    operation_id = "listParticipants"
)]
#[get("/participants")]
pub async fn list_participants(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
) -> ApiResult<HttpResponse> {
    let participants = state.participants_query.find_all(&owner.0).await?;
    Ok(HttpResponse::Ok().json(
        participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/participants/{id}",
    params(("id" = i64, Path, description = "Participant identifier")),
    responses(
        (status = 200, description = "Participant", body = ParticipantResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema)
    ),
    tags = ["participants"],
    operation_id = "getParticipant"
)]
#[get("/participants/{id}")]
pub async fn get_participant(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = entity_id(path.into_inner())?;
    let participant = state.participants_query.find_by_id(&owner.0, id).await?;
    Ok(HttpResponse::Ok().json(ParticipantResponse::from(participant)))
}

/// Register a participant owned by the caller.
///
/// The email must not be held by any user, speaker or participant.
#[utoipa::path(
    post,
    path = "/api/v1/participants",
    request_body = ParticipantRequest,
    responses(
        (status = 201, description = "Participant registered", body = ParticipantResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["participants"],
    operation_id = "createParticipant"
)]
#[post("/participants")]
pub async fn create_participant(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
    payload: web::Json<ParticipantRequest>,
) -> ApiResult<HttpResponse> {
    let draft = ParticipantDraft::try_from(payload.into_inner())?;
    let participant = state.participants.create(&owner.0, draft).await?;
    let location = format!("/api/v1/participants/{}", participant.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ParticipantResponse::from(participant)))
}

#[utoipa::path(
    put,
    path = "/api/v1/participants/{id}",
    params(("id" = i64, Path, description = "Participant identifier")),
    request_body = ParticipantRequest,
    responses(
        (status = 200, description = "Participant updated", body = ParticipantResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["participants"],
    operation_id = "updateParticipant"
)]
#[put("/participants/{id}")]
pub async fn update_participant(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
    path: web::Path<i64>,
    payload: web::Json<ParticipantRequest>,
) -> ApiResult<HttpResponse> {
    let id = entity_id(path.into_inner())?;
    let draft = ParticipantDraft::try_from(payload.into_inner())?;
    let participant = state.participants.update(&owner.0, id, draft).await?;
    Ok(HttpResponse::Ok().json(ParticipantResponse::from(participant)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/participants/{id}",
    params(("id" = i64, Path, description = "Participant identifier")),
    responses(
        (status = 204, description = "Participant deleted"),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema)
    ),
    tags = ["participants"],
    operation_id = "deleteParticipant"
)]
#[delete("/participants/{id}")]
pub async fn delete_participant(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = entity_id(path.into_inner())?;
    state.participants.delete(&owner.0, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
