use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use models::Document;
use tokio::{fs, sync::Mutex};
use tracing::{debug, error, info};

use crate::errors::ServiceError;

/// JSON file holding the whole [`Document`].
///
/// Nothing is cached between operations: [`read`](Self::read) loads the file,
/// [`transact`](Self::transact) loads, mutates and writes it back. Both hold a
/// single async mutex for the entire sequence, so concurrent requests are
/// serialized and cannot overwrite each other's changes.
pub struct JsonDocumentStore {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl JsonDocumentStore {
    /// Open the store at `path`. Creates parent directories and an empty
    /// document if the file is missing; fails if an existing file is unreadable.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        common::env::ensure_data_dir(&file_path).await.map_err(ServiceError::storage)?;
        let store = Self { file_path, lock: Mutex::new(()) };
        store.load().await?;
        info!(file = %store.file_path.display(), "document store opened");
        Ok(Arc::new(store))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the persisted document, writing a default one if none exists.
    pub async fn load(&self) -> Result<Document, ServiceError> {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    /// Overwrite the persisted document with `doc`.
    pub async fn save(&self, doc: &Document) -> Result<(), ServiceError> {
        let _guard = self.lock.lock().await;
        self.save_unlocked(doc).await
    }

    /// Load the document and project something out of it.
    pub async fn read<T, F>(&self, operation: &'static str, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Document) -> T,
    {
        let started = Instant::now();
        let _guard = self.lock.lock().await;
        let res = self.load_unlocked().await.map(|doc| f(&doc));
        observe(operation, &res, started);
        res
    }

    /// Load, apply `f`, and persist the result. Nothing is written when `f` fails.
    pub async fn transact<T, F>(&self, operation: &'static str, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Document) -> Result<T, ServiceError>,
    {
        let started = Instant::now();
        let _guard = self.lock.lock().await;
        let res = async {
            let mut doc = self.load_unlocked().await?;
            let out = f(&mut doc)?;
            self.save_unlocked(&doc).await?;
            Ok(out)
        }
        .await;
        observe(operation, &res, started);
        res
    }

    async fn load_unlocked(&self) -> Result<Document, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => {
                debug!(file = %self.file_path.display(), "document file empty; using default");
                Ok(Document::default())
            }
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                error!(file = %self.file_path.display(), error = %e, "document file is not valid JSON");
                ServiceError::Storage(format!("cannot parse {}: {e}", self.file_path.display()))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let empty = Document::default();
                self.save_unlocked(&empty).await?;
                info!(file = %self.file_path.display(), "created empty document");
                Ok(empty)
            }
            Err(e) => Err(ServiceError::Storage(format!("cannot read {}: {e}", self.file_path.display()))),
        }
    }

    async fn save_unlocked(&self, doc: &Document) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(doc).map_err(ServiceError::storage)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, data)
            .await
            .map_err(|e| ServiceError::Storage(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.file_path)
            .await
            .map_err(|e| ServiceError::Storage(format!("cannot replace {}: {e}", self.file_path.display())))?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.file_path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }
}

fn observe<T>(operation: &str, res: &Result<T, ServiceError>, started: Instant) {
    let elapsed = started.elapsed().as_secs_f64();
    common::metrics::record_store_op(operation, res.is_ok(), elapsed);
    if let Err(ServiceError::Storage(msg)) = res {
        error!(operation, error = %msg, "document store failure");
    }
}
