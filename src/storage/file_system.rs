use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::config::DiskConfig;
use crate::storage::{Result, Storage, StorageError};

#[derive(Debug)]
pub struct FileSystem {
    root: PathBuf,
    namespace: String,
    url_root: String,
}

impl FileSystem {
    /// Roots the backend at `<directory_root>/<namespace>`, creating the
    /// directory if it is missing.
    pub async fn new(config: &DiskConfig, namespace: &str) -> Result<Self> {
        let root = config.directory_root.join(namespace);

        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| StorageError::IoError(format!("{:?}", e)))?;

        Ok(FileSystem {
            root,
            namespace: namespace.to_owned(),
            url_root: config.url_root.clone(),
        })
    }

    fn get_path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    async fn create_parent_dir(&self, filename: &str) -> Result<()> {
        let path_buf = self.get_path(filename);
        let parent = match path_buf.parent() {
            Some(parent) => parent.to_owned(),
            None => return Ok(()),
        };

        tokio::fs::create_dir_all(&parent)
            .await
            .map_err(|e| StorageError::IoError(format!("{:?}", e)))
    }
}

#[async_trait::async_trait]
impl Storage for FileSystem {
    async fn exists(&self, filename: &str) -> Result<bool> {
        match tokio::fs::metadata(self.get_path(filename)).await {
            Ok(_) => Ok(true),
            Err(e) => match e.kind() {
                std::io::ErrorKind::NotFound => Ok(false),
                _ => Err(StorageError::IoError(format!("{:?}", e))),
            },
        }
    }

    async fn remove(&self, filename: &str) -> Result<()> {
        tokio::fs::remove_file(self.get_path(filename))
            .await
            .map_err(|e| StorageError::IoError(format!("{:?}", e)))
    }

    async fn store(&self, filename: &str, data: &[u8]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(self.get_path(filename))
            .await;

        match file {
            Ok(mut file) => file
                .write_all(data)
                .await
                .map_err(|e| StorageError::IoError(format!("{:?}", e))),
            Err(e) => match e.kind() {
                std::io::ErrorKind::AlreadyExists => Ok(()),
                std::io::ErrorKind::NotFound => {
                    self.create_parent_dir(filename).await?;
                    self.store(filename, data).await
                }
                _ => Err(StorageError::IoError(format!("{:?}", e))),
            },
        }
    }

    async fn fetch(&self, filename: &str) -> Result<Vec<u8>> {
        tokio::fs::read(self.get_path(filename))
            .await
            .map_err(|e| StorageError::IoError(format!("{:?}", e)))
    }

    // Disk urls carry no expiry; the timeout only applies to signed cloud
    // urls. Known asymmetry.
    async fn get_url(&self, filename: &str, _timeout_secs: u64) -> Result<String> {
        Ok(format!("{}/{}/{}", self.url_root, self.namespace, filename))
    }
}
