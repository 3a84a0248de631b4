pub mod config;
pub mod datastore;
pub mod db;
pub mod fs;
pub mod storage;
pub mod sweep;
pub mod types;
