use quick_error::quick_error;

mod file_system;
mod s3;
mod storage;

// forwarding declarations
pub use file_system::FileSystem;
pub use s3::{S3Fs, SharedClient};
pub use storage::Storage;

quick_error! {
    #[derive(Debug, PartialEq)]
    pub enum StorageError {
        IoError(message: String) { }
        ConnectionError(message: String) { }
        SignedUrlError(message: String) { }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;
