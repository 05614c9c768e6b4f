use async_trait::async_trait;
use models::Claim;

use super::domain::{ClaimPatch, NewClaimInput};
use crate::errors::ServiceError;

/// Repository abstraction over the claims collection.
#[async_trait]
pub trait ClaimRepository: Send + Sync {
    /// All claims in insertion order, optionally filtered by a case-insensitive
    /// substring of id, first name or last name. Blank terms do not filter.
    async fn list_claims(&self, search: Option<&str>) -> Result<Vec<Claim>, ServiceError>;
    async fn create_claim(&self, input: NewClaimInput) -> Result<Claim, ServiceError>;
    async fn update_claim(&self, id: &str, patch: ClaimPatch) -> Result<Claim, ServiceError>;
    async fn delete_claim(&self, id: &str) -> Result<(), ServiceError>;
}
