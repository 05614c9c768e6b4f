use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use common::types::SuccessAck;
use models::Claim;
use serde::Deserialize;
use service::claims::domain::{ClaimPatch, NewClaimInput};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ClaimSearch {
    pub search: Option<String>,
}

/// List claims, optionally filtered by `?search=`
#[utoipa::path(
    get,
    path = "/api/claims",
    tag = "claims",
    params(("search" = Option<String>, Query, description = "Case-insensitive match on id, first or last name")),
    responses((status = 200, description = "Claims in insertion order", body = [crate::openapi::ClaimDoc]))
)]
pub async fn list_claims(
    State(state): State<AppState>,
    Query(q): Query<ClaimSearch>,
) -> Result<Json<Vec<Claim>>, JsonApiError> {
    let claims = state.claims.list_claims(q.search.as_deref()).await?;
    Ok(Json(claims))
}

#[utoipa::path(
    post,
    path = "/api/claims",
    tag = "claims",
    request_body = crate::openapi::NewClaimRequest,
    responses((status = 201, description = "Created", body = crate::openapi::ClaimDoc))
)]
pub async fn create_claim(
    State(state): State<AppState>,
    payload: Result<Json<NewClaimInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Claim>), JsonApiError> {
    let Json(input) = payload?;
    let claim = state.claims.create_claim(input).await?;
    Ok((StatusCode::CREATED, Json(claim)))
}

#[utoipa::path(
    put,
    path = "/api/claims/{id}",
    tag = "claims",
    params(("id" = String, Path, description = "Claim id")),
    request_body = crate::openapi::ClaimPatchRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClaimDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ClaimPatch>, JsonRejection>,
) -> Result<Json<Claim>, JsonApiError> {
    let Json(patch) = payload?;
    let claim = state.claims.update_claim(&id, patch).await?;
    Ok(Json(claim))
}

#[utoipa::path(
    delete,
    path = "/api/claims/{id}",
    tag = "claims",
    params(("id" = String, Path, description = "Claim id")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::SuccessDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessAck>, JsonApiError> {
    state.claims.delete_claim(&id).await?;
    Ok(Json(SuccessAck::ok()))
}
