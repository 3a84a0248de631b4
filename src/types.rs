use quick_error::quick_error;

quick_error! {
    #[derive(Debug)]
    pub enum FsError {
        SqlError(err: sqlx::Error) {
            from()
        }
        SqlMigrateError(err: sqlx::migrate::MigrateError) {
            from()
        }
        StorageError(err: crate::storage::StorageError) {
            from()
        }
        UnsupportedBackend(kind: String) { }
        InvalidConfig(message: String) { }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;
