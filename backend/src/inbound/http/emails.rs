//! Email availability lookup.
//!
//! ```text
//! GET /api/v1/emails/availability?email=ada@example.org
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::required_email;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityParams {
    /// Address to check; matched case-insensitively.
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    /// Normalised form of the queried address.
    #[schema(example = "ada@example.org")]
    pub email: String,
    /// Whether a new record could use the address.
    pub available: bool,
}

/// Report whether no user, speaker or participant holds an email.
#[utoipa::path(
    get,
    path = "/api/v1/emails/availability",
    params(AvailabilityParams),
    responses(
        (status = 200, description = "Availability of the address", body = AvailabilityResponse),
        (status = 400, description = "Missing or malformed email", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema)
    ),
    tags = ["emails"],
    operation_id = "emailAvailability"
)]
#[get("/emails/availability")]
pub async fn email_availability(
    state: web::Data<HttpState>,
    query: web::Query<AvailabilityParams>,
) -> ApiResult<HttpResponse> {
    let email = required_email(&query.email)?;
    let available = state.emails.is_email_available(&email).await?;
    debug!(%email, available, "email availability checked");
    Ok(HttpResponse::Ok().json(AvailabilityResponse {
        email: email.into(),
        available,
    }))
}
