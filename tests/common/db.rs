use std::sync::Arc;

use expirefs::config::Config;
use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn setup_postgres(config: &Config) -> Arc<PgPool> {
    println!("Connecting to db at {}", config.db_connection_string());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(config.db_connection_string().as_ref())
        .await
        .unwrap();

    sqlx::migrate!().run(&pool).await.unwrap();

    Arc::new(pool)
}

pub async fn count_expirations(db: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM fs_expiration")
        .fetch_one(db)
        .await
        .unwrap()
}
