use chrono::prelude::*;
use chrono::Duration;
use futures_util::TryStreamExt;
use sqlx::postgres::PgPool;
use sqlx::FromRow;

use crate::types::Result;

/// One row of the expiration ledger. At most one row exists per
/// (namespace, filename) pair; a row with `expires = false` is permanent
/// bookkeeping and is never swept.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Expiration {
    pub namespace: String,
    pub filename: String,
    pub expires: bool,
    pub expiration: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Schedules `namespace/filename` for deletion `days` + `seconds` from now.
/// A second call for the same pair overwrites `expires` and `expiration` in
/// place rather than inserting a duplicate.
pub async fn upsert_expiration(
    db: &PgPool,
    namespace: &str,
    filename: &str,
    seconds: i64,
    days: i64,
    expires: bool,
) -> Result<()> {
    let expiration = Utc::now() + Duration::days(days) + Duration::seconds(seconds);

    let query_str = r#"
INSERT INTO fs_expiration (namespace, filename, expires, expiration)
VALUES ($1, $2, $3, $4)
ON CONFLICT ON CONSTRAINT namespace_filename_cnst
DO UPDATE SET expires = EXCLUDED.expires, expiration = EXCLUDED.expiration, updated_at = NOW()
    "#;

    sqlx::query(query_str)
        .bind(namespace)
        .bind(filename)
        .bind(expires)
        .bind(expiration)
        .execute(db)
        .await?;

    Ok(())
}

/// Returns every ledger row that is due as of call time. Rows with
/// `expires = false` are never returned. No ordering is guaranteed.
pub async fn due_expirations(db: &PgPool) -> Result<Vec<Expiration>> {
    let query_str = "SELECT * FROM fs_expiration WHERE expires = TRUE AND expiration <= $1";
    let mut query_result = sqlx::query_as::<_, Expiration>(query_str)
        .bind(Utc::now())
        .fetch(db);

    let mut result = Vec::new();
    while let Some(expiration) = query_result.try_next().await? {
        result.push(expiration);
    }

    Ok(result)
}

pub async fn get_expiration(
    db: &PgPool,
    namespace: &str,
    filename: &str,
) -> Result<Option<Expiration>> {
    let query_str = "SELECT * FROM fs_expiration WHERE namespace = $1 AND filename = $2";
    let result = sqlx::query_as::<_, Expiration>(query_str)
        .bind(namespace)
        .bind(filename)
        .fetch_optional(db)
        .await?;

    Ok(result)
}

/// Removes one ledger row, returning whether a row was deleted. Deleting a
/// row whose object is already gone is a normal condition, not an error.
pub async fn delete_expiration(db: &PgPool, namespace: &str, filename: &str) -> Result<bool> {
    let query_str = "DELETE FROM fs_expiration WHERE namespace = $1 AND filename = $2";
    let rows_affected = sqlx::query(query_str)
        .bind(namespace)
        .bind(filename)
        .execute(db)
        .await?
        .rows_affected();

    Ok(rows_affected > 0)
}
