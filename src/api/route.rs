//! Routing decision endpoint

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{decision::Decision, visitor::Visitor},
};

use super::ValidatedJson;

/// Make a routing decision for a visitor
///
/// By the time the response leaves, an accept has already been recorded
/// against the winning target's daily counter. A reject is a normal 200
/// outcome, not an error.
#[utoipa::path(
    post,
    path = "/route",
    tag = "route",
    request_body = Visitor,
    responses(
        (status = 200, description = "Routing decision", body = Decision),
        (status = 400, description = "Malformed visitor payload", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn route(
    State(state): State<crate::AppState>,
    ValidatedJson(visitor): ValidatedJson<Visitor>,
) -> AppResult<Json<Decision>> {
    let decision = state.services.routing.decide(&visitor).await?;
    Ok(Json(decision))
}
