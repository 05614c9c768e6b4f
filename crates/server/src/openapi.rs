use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClientInfoDoc { pub first_name: String, pub last_name: String, pub email: String, pub phone: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClaimDetailsDoc {
    pub policy_number: String,
    pub claim_type: String,
    /// ISO date, e.g. `2023-03-15`
    pub date_of_incident: String,
    pub description: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClaimDoc {
    pub id: String,
    pub client_info: ClientInfoDoc,
    pub claim_details: ClaimDetailsDoc,
    pub status: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct NewClaimRequest { pub client_info: ClientInfoDoc, pub claim_details: ClaimDetailsDoc }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ClaimPatchRequest {
    pub client_info: Option<ClientInfoDoc>,
    pub claim_details: Option<ClaimDetailsDoc>,
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct LoginRequest { pub username: String, pub password: String }

#[derive(ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    /// `user` or `admin`
    pub role: String,
}

#[derive(ToSchema)]
pub struct UpdateRoleRequest { pub role: String }

#[derive(ToSchema)]
pub struct UserSummaryDoc { pub username: String, pub role: String }

#[derive(ToSchema)]
pub struct SuccessDoc { pub success: bool }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::claims::list_claims,
        crate::routes::claims::create_claim,
        crate::routes::claims::update_claim,
        crate::routes::claims::delete_claim,
        crate::routes::auth::login,
        crate::routes::users::list_users,
        crate::routes::users::create_user,
        crate::routes::users::update_user_role,
        crate::routes::users::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            ClientInfoDoc,
            ClaimDetailsDoc,
            ClaimDoc,
            NewClaimRequest,
            ClaimPatchRequest,
            LoginRequest,
            CreateUserRequest,
            UpdateRoleRequest,
            UserSummaryDoc,
            SuccessDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "claims"),
        (name = "auth"),
        (name = "users")
    )
)]
pub struct ApiDoc;
