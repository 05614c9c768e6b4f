#![cfg(test)]
use std::{path::{Path, PathBuf}, sync::Arc};

use crate::storage::JsonDocumentStore;

/// Unique document path under the system temp dir.
pub fn temp_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", uuid::Uuid::new_v4()))
}

/// Fresh empty store backed by a temp file; returns the path for cleanup.
pub async fn temp_store(prefix: &str) -> Result<(Arc<JsonDocumentStore>, PathBuf), anyhow::Error> {
    let path = temp_path(prefix);
    let store = JsonDocumentStore::new(&path).await?;
    Ok((store, path))
}

/// Fresh store filled with the sample claims and users.
pub async fn seeded_store(prefix: &str) -> Result<(Arc<JsonDocumentStore>, PathBuf), anyhow::Error> {
    let (store, path) = temp_store(prefix).await?;
    crate::seed::seed_if_empty(&store).await?;
    Ok((store, path))
}

pub async fn cleanup(path: &Path) {
    let _ = tokio::fs::remove_file(path).await;
}
