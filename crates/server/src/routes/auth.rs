use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use service::users::domain::{LoginInput, UserSummary};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Plaintext credential check; no session or token is issued.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged In", body = crate::openapi::UserSummaryDoc),
        (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<UserSummary>, JsonApiError> {
    let Json(input) = payload?;
    let user = state.users.authenticate(input).await?;
    Ok(Json(user))
}
