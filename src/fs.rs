use std::sync::Arc;

use sqlx::postgres::PgPool;
use tokio::sync::Mutex;

use crate::config::{BackendConfig, Config};
use crate::datastore;
use crate::storage::{FileSystem, S3Fs, SharedClient, Storage};
use crate::types::Result;

/// Hands out namespaced storage handles based on the configured backend.
/// The backend kind is resolved on each `get_filesystem` call, so a
/// misconfigured kind surfaces at first use rather than at startup.
pub struct FsFactory {
    config: Arc<Config>,
    db: Arc<PgPool>,
    s3_conn: SharedClient,
}

impl FsFactory {
    pub fn new(config: Arc<Config>, db: Arc<PgPool>) -> Self {
        FsFactory {
            config,
            db,
            s3_conn: Arc::new(Mutex::new(None)),
        }
    }

    pub fn db(&self) -> &PgPool {
        &self.db
    }

    pub async fn get_filesystem(&self, namespace: &str) -> Result<NamespaceFs> {
        let backend: Box<dyn Storage> = match BackendConfig::try_from(self.config.as_ref())? {
            BackendConfig::Disk(disk) => Box::new(FileSystem::new(&disk, namespace).await?),
            BackendConfig::S3(s3) => Box::new(S3Fs::new(s3, namespace, self.s3_conn.clone())),
        };

        Ok(NamespaceFs {
            namespace: namespace.to_owned(),
            backend,
            db: self.db.clone(),
        })
    }
}

/// A storage handle bound to one namespace, wrapping the backend with the
/// two ledger-backed capabilities: `expire` and `get_url`.
pub struct NamespaceFs {
    namespace: String,
    backend: Box<dyn Storage>,
    db: Arc<PgPool>,
}

impl NamespaceFs {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub async fn exists(&self, filename: &str) -> Result<bool> {
        Ok(self.backend.exists(filename).await?)
    }

    pub async fn remove(&self, filename: &str) -> Result<()> {
        Ok(self.backend.remove(filename).await?)
    }

    pub async fn store(&self, filename: &str, data: &[u8]) -> Result<()> {
        Ok(self.backend.store(filename, data).await?)
    }

    pub async fn fetch(&self, filename: &str) -> Result<Vec<u8>> {
        Ok(self.backend.fetch(filename).await?)
    }

    /// Sets the lifespan of a file under this namespace. `days` and
    /// `seconds` are added together. `expires = false` records the file in
    /// the ledger without ever sweeping it. A file that is never expired has
    /// an unbounded lifetime.
    pub async fn expire(
        &self,
        filename: &str,
        seconds: i64,
        days: i64,
        expires: bool,
    ) -> Result<()> {
        datastore::upsert_expiration(&self.db, &self.namespace, filename, seconds, days, expires)
            .await
    }

    /// Returns a download URL valid for `timeout_secs`, whether or not the
    /// file exists. Disk-backed namespaces ignore the timeout.
    pub async fn get_url(&self, filename: &str, timeout_secs: u64) -> Result<String> {
        Ok(self.backend.get_url(filename, timeout_secs).await?)
    }
}
