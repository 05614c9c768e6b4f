use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use common::types::SuccessAck;
use service::users::domain::{CreateUserInput, UpdateRoleInput, UserSummary};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Passwords are stored but never returned.
#[utoipa::path(get, path = "/api/users", tag = "users", responses((status = 200, description = "OK", body = [crate::openapi::UserSummaryDoc])))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, JsonApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users.iter().map(UserSummary::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = crate::openapi::CreateUserRequest,
    responses(
        (status = 200, description = "Created", body = crate::openapi::SuccessDoc),
        (status = 400, description = "Missing or invalid fields", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Username taken", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserInput>, JsonRejection>,
) -> Result<Json<SuccessAck>, JsonApiError> {
    let Json(input) = payload?;
    state.users.create_user(input).await?;
    Ok(Json(SuccessAck::ok()))
}

#[utoipa::path(
    put,
    path = "/api/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Account name")),
    request_body = crate::openapi::UpdateRoleRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserSummaryDoc),
        (status = 400, description = "Invalid role", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Result<Json<UpdateRoleInput>, JsonRejection>,
) -> Result<Json<UserSummary>, JsonApiError> {
    let Json(input) = payload?;
    let role = input.role()?;
    let user = state.users.update_user_role(&username, role).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{username}",
    tag = "users",
    params(("username" = String, Path, description = "Account name")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::SuccessDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<SuccessAck>, JsonApiError> {
    state.users.delete_user(&username).await?;
    Ok(Json(SuccessAck::ok()))
}
