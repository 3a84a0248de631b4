use std::path::Path;

use expirefs::config::Config;

pub fn test_config(db_port: u16, directory_root: &Path, url_root: &str) -> Config {
    Config {
        db_connection_pool_size: 1,
        db_host: "localhost".to_owned(),
        db_port,
        db_user: "postgres".to_owned(),
        db_password: "postgres".to_owned(),
        db_database: "postgres".to_owned(),
        db_schema: "public".to_owned(),
        storage_type: "disk".to_owned(),
        directory_root: Some(directory_root.to_string_lossy().to_string()),
        url_root: Some(url_root.to_owned()),
        bucket: None,
        aws_access_key_id: None,
        aws_secret_access_key: None,
        prefix: None,
        aws_region: "us-east-1".to_owned(),
        aws_endpoint_url: None,
    }
}
