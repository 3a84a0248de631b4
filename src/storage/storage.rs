use crate::storage::Result;

/// A storage backend bound to exactly one namespace for its lifetime.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn exists(&self, filename: &str) -> Result<bool>;
    async fn remove(&self, filename: &str) -> Result<()>;
    // store should be idempotent
    async fn store(&self, filename: &str, data: &[u8]) -> Result<()>;
    async fn fetch(&self, filename: &str) -> Result<Vec<u8>>;
    /// Returns a fetchable URL for `filename` whether or not the object
    /// exists; resolvers never check existence. The validity window is
    /// enforced by the cloud backend and ignored by the disk backend.
    async fn get_url(&self, filename: &str, timeout_secs: u64) -> Result<String>;
}
