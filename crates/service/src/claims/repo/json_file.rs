use std::sync::Arc;

use async_trait::async_trait;
use models::Claim;
use tracing::{debug, info, instrument};

use crate::claims::{
    domain::{ClaimPatch, NewClaimInput},
    id::generate_unique_claim_id,
    repository::ClaimRepository,
};
use crate::errors::ServiceError;
use crate::storage::JsonDocumentStore;

/// Claims stored in the `claims` array of the JSON document.
///
/// # Examples
/// ```
/// use service::claims::{ClaimRepository, JsonClaimRepository, domain::NewClaimInput};
/// use service::storage::JsonDocumentStore;
/// let path = std::env::temp_dir().join("claims_doc_example.json");
/// let _ = std::fs::remove_file(&path);
/// let store = tokio_test::block_on(JsonDocumentStore::new(&path)).unwrap();
/// let repo = JsonClaimRepository::new(store);
/// let claim = tokio_test::block_on(repo.create_claim(NewClaimInput::default())).unwrap();
/// assert!(claim.id.starts_with("CLAIM-"));
/// assert_eq!(claim.status, "Submitted");
/// let _ = std::fs::remove_file(&path);
/// ```
#[derive(Clone)]
pub struct JsonClaimRepository {
    store: Arc<JsonDocumentStore>,
}

impl JsonClaimRepository {
    pub fn new(store: Arc<JsonDocumentStore>) -> Self { Self { store } }
}

#[async_trait]
impl ClaimRepository for JsonClaimRepository {
    #[instrument(skip(self))]
    async fn list_claims(&self, search: Option<&str>) -> Result<Vec<Claim>, ServiceError> {
        let needle = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        let claims = self
            .store
            .read("claims.list", |doc| match &needle {
                Some(n) => doc.claims.iter().filter(|c| c.matches(n)).cloned().collect(),
                None => doc.claims.clone(),
            })
            .await?;
        debug!(count = claims.len(), "claims listed");
        Ok(claims)
    }

    #[instrument(skip(self, input))]
    async fn create_claim(&self, input: NewClaimInput) -> Result<Claim, ServiceError> {
        let claim = self
            .store
            .transact("claims.create", |doc| {
                let id = generate_unique_claim_id(|candidate| doc.has_claim(candidate));
                let claim = Claim::submitted(id, input.client_info, input.claim_details);
                doc.claims.push(claim.clone());
                Ok(claim)
            })
            .await?;
        info!(claim_id = %claim.id, "claim_created");
        Ok(claim)
    }

    #[instrument(skip(self, patch))]
    async fn update_claim(&self, id: &str, patch: ClaimPatch) -> Result<Claim, ServiceError> {
        patch.validate()?;
        let claim = self
            .store
            .transact("claims.update", |doc| {
                let idx = doc.claim_index(id).ok_or_else(|| ServiceError::not_found("Claim"))?;
                let claim = &mut doc.claims[idx];
                patch.apply_to(claim);
                Ok(claim.clone())
            })
            .await?;
        info!(claim_id = %claim.id, status = %claim.status, "claim_updated");
        Ok(claim)
    }

    #[instrument(skip(self))]
    async fn delete_claim(&self, id: &str) -> Result<(), ServiceError> {
        self.store
            .transact("claims.delete", |doc| {
                let idx = doc.claim_index(id).ok_or_else(|| ServiceError::not_found("Claim"))?;
                doc.claims.remove(idx);
                Ok(())
            })
            .await?;
        info!(claim_id = %id, "claim_deleted");
        Ok(())
    }
}
