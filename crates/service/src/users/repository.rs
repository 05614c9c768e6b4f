use async_trait::async_trait;
use models::{Role, User};

use super::domain::{CreateUserInput, LoginInput, UserSummary};
use crate::errors::ServiceError;

/// Repository abstraction over the users collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored account, password included. Callers decide what to expose.
    async fn list_users(&self) -> Result<Vec<User>, ServiceError>;
    async fn create_user(&self, input: CreateUserInput) -> Result<UserSummary, ServiceError>;
    async fn update_user_role(&self, username: &str, role: Role) -> Result<UserSummary, ServiceError>;
    async fn delete_user(&self, username: &str) -> Result<(), ServiceError>;
    async fn authenticate(&self, input: LoginInput) -> Result<UserSummary, ServiceError>;
}
