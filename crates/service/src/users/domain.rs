use models::{user, Role, User};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Registration payload. Fields are optional so missing ones map to a
/// validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl CreateUserInput {
    /// Check required fields and parse the role into a storable [`User`].
    pub fn into_user(self) -> Result<User, ServiceError> {
        let (Some(username), Some(password), Some(role)) = (self.username, self.password, self.role) else {
            return Err(ServiceError::Validation("username, password and role are required".into()));
        };
        user::validate_username(&username)?;
        user::validate_password(&password)?;
        let role = parse_role(&role)?;
        Ok(User::new(username, password, role))
    }
}

/// `PUT /api/users/:username` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoleInput {
    pub role: Option<String>,
}

impl UpdateRoleInput {
    pub fn role(&self) -> Result<Role, ServiceError> {
        let role = self
            .role
            .as_deref()
            .ok_or_else(|| ServiceError::Validation("role is required".into()))?;
        parse_role(role)
    }
}

fn parse_role(raw: &str) -> Result<Role, ServiceError> {
    if raw.trim().is_empty() {
        return Err(ServiceError::Validation("role is required".into()));
    }
    Ok(raw.parse::<Role>()?)
}

/// Login input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Account as exposed outside the service: never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(u: &User) -> Self {
        Self { username: u.username.clone(), role: u.role }
    }
}
