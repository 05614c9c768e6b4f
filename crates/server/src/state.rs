use std::sync::Arc;

use service::{
    claims::{ClaimRepository, JsonClaimRepository},
    storage::JsonDocumentStore,
    users::{JsonUserRepository, UserRepository},
};

/// Shared handler state: the two repositories as trait objects.
#[derive(Clone)]
pub struct AppState {
    pub claims: Arc<dyn ClaimRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Both repositories backed by the same document store.
    pub fn from_store(store: Arc<JsonDocumentStore>) -> Self {
        Self {
            claims: Arc::new(JsonClaimRepository::new(Arc::clone(&store))),
            users: Arc::new(JsonUserRepository::new(store)),
        }
    }
}
