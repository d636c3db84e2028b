//! Speaker HTTP handlers.
//!
//! ```text
//! GET    /api/v1/speakers
//! GET    /api/v1/speakers/{id}
//! POST   /api/v1/speakers
//! PUT    /api/v1/speakers/{id}
//! DELETE /api/v1/speakers/{id}
//! ```
//!
//! Every route is scoped to the [`CurrentOwner`]; a speaker belonging to
//! another owner answers exactly like a missing one.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Speaker, SpeakerDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::CurrentOwner;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{entity_id, full_name, optional_email, optional_text};

/// Speaker fields accepted on create and update.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRequest {
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    pub bio: Option<String>,
    /// Required on create. Omit on update to keep the stored address.
    #[schema(example = "ada@example.org")]
    pub email: Option<String>,
    pub company: Option<String>,
    #[schema(value_type = Option<String>, format = Date, example = "1815-12-10")]
    pub date_of_birth: Option<NaiveDate>,
}

impl TryFrom<SpeakerRequest> for SpeakerDraft {
    type Error = Error;

    fn try_from(value: SpeakerRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            full_name: full_name(&value.full_name)?,
            bio: optional_text(value.bio),
            email: optional_email(value.email.as_deref())?,
            company: optional_text(value.company),
            date_of_birth: value.date_of_birth,
        })
    }
}

/// Speaker as returned to its owner.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerResponse {
    pub id: i64,
    pub full_name: String,
    pub bio: Option<String>,
    pub email: String,
    pub company: Option<String>,
    #[schema(value_type = Option<String>, format = Date)]
    pub date_of_birth: Option<NaiveDate>,
    pub owner_email: String,
}

impl From<Speaker> for SpeakerResponse {
    fn from(value: Speaker) -> Self {
        let Speaker {
            id,
            owner_email,
            details,
        } = value;
        Self {
            id: id.get(),
            full_name: details.full_name.into(),
            bio: details.bio,
            email: details.email.into(),
            company: details.company,
            date_of_birth: details.date_of_birth,
            owner_email: owner_email.to_string(),
        }
    }
}

/// List the caller's speakers in id order.
#[utoipa::path(
    get,
    path = "/api/v1/speakers",
    responses(
        (status = 200, description = "Speakers owned by the caller", body = [SpeakerResponse]),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["speakers"],
    operation_id = "listSpeakers"
)]
#[get("/speakers")]
pub async fn list_speakers(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
) -> ApiResult<HttpResponse> {
    let speakers = state.speakers_query.find_all(&owner.0).await?;
    let body: Vec<SpeakerResponse> = speakers.into_iter().map(SpeakerResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Fetch one of the caller's speakers.
#[utoipa::path(
    get,
    path = "/api/v1/speakers/{id}",
    params(("id" = i64, Path, description = "Speaker identifier")),
    responses(
        (status = 200, description = "Speaker", body = SpeakerResponse),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema)
    ),
    tags = ["speakers"],
    operation_id = "getSpeaker"
)]
#[get("/speakers/{id}")]
pub async fn get_speaker(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = entity_id(path.into_inner())?;
    let speaker = state.speakers_query.find_by_id(&owner.0, id).await?;
    Ok(HttpResponse::Ok().json(SpeakerResponse::from(speaker)))
}

/// Register a speaker owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/speakers",
    request_body = SpeakerRequest,
    responses(
        (status = 201, description = "Speaker created", body = SpeakerResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["speakers"],
    operation_id = "createSpeaker"
)]
#[post("/speakers")]
pub async fn create_speaker(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
    payload: web::Json<SpeakerRequest>,
) -> ApiResult<HttpResponse> {
    let draft = SpeakerDraft::try_from(payload.into_inner())?;
    let speaker = state.speakers.create(&owner.0, draft).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/v1/speakers/{}", speaker.id)))
        .json(SpeakerResponse::from(speaker)))
}

/// Replace one of the caller's speakers.
#[utoipa::path(
    put,
    path = "/api/v1/speakers/{id}",
    params(("id" = i64, Path, description = "Speaker identifier")),
    request_body = SpeakerRequest,
    responses(
        (status = 200, description = "Speaker updated", body = SpeakerResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["speakers"],
    operation_id = "updateSpeaker"
)]
#[put("/speakers/{id}")]
pub async fn update_speaker(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
    path: web::Path<i64>,
    payload: web::Json<SpeakerRequest>,
) -> ApiResult<HttpResponse> {
    let id = entity_id(path.into_inner())?;
    let draft = SpeakerDraft::try_from(payload.into_inner())?;
    let speaker = state.speakers.update(&owner.0, id, draft).await?;
    Ok(HttpResponse::Ok().json(SpeakerResponse::from(speaker)))
}

/// Remove one of the caller's speakers.
#[utoipa::path(
    delete,
    path = "/api/v1/speakers/{id}",
    params(("id" = i64, Path, description = "Speaker identifier")),
    responses(
        (status = 204, description = "Speaker deleted"),
        (status = 404, description = "Missing or owned by someone else", body = ErrorSchema)
    ),
    tags = ["speakers"],
    operation_id = "deleteSpeaker"
)]
#[delete("/speakers/{id}")]
pub async fn delete_speaker(
    state: web::Data<HttpState>,
    owner: CurrentOwner,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = entity_id(path.into_inner())?;
    state.speakers.delete(&owner.0, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
