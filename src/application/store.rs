//! Persistence capability for application records.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::types::{Application, ApplicationField};
use crate::{Database, RelayError, Result};

/// Exact-match key-value store for [`Application`] records.
///
/// Implement this trait to back the directory with another store.
#[async_trait]
pub trait ApplicationStore: Send + Sync + 'static {
    /// Persist a record.
    async fn put(&self, application: &Application) -> Result<()>;

    /// Return one record whose `field` equals `value`, if any.
    ///
    /// When several records match, the earliest stored one is returned.
    async fn find_by(&self, field: ApplicationField, value: &str) -> Result<Option<Application>>;

    /// Delete every record whose `field` equals `value`.
    ///
    /// Returns the number of deleted records.
    async fn delete_by(&self, field: ApplicationField, value: &str) -> Result<u64>;
}

/// SQLite-backed application store.
#[derive(Clone)]
pub struct SqliteApplicationStore {
    pool: SqlitePool,
}

impl SqliteApplicationStore {
    /// Create a store over the given pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a store over an open database.
    pub fn from_database(db: &Database) -> Self {
        Self::new(db.pool().clone())
    }

    /// Count all stored records.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RelayError::Database(e.to_string()))?;
        Ok(count.0)
    }
}

#[async_trait]
impl ApplicationStore for SqliteApplicationStore {
    async fn put(&self, application: &Application) -> Result<()> {
        sqlx::query("INSERT INTO applications (api_key, name) VALUES (?, ?)")
            .bind(&application.api_key)
            .bind(&application.name)
            .execute(&self.pool)
            .await
            .map_err(|e| RelayError::Database(e.to_string()))?;
        Ok(())
    }

    async fn find_by(&self, field: ApplicationField, value: &str) -> Result<Option<Application>> {
        let sql = format!(
            "SELECT api_key, name FROM applications WHERE {} = ? ORDER BY id LIMIT 1",
            field.column()
        );
        let result = sqlx::query_as::<_, Application>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RelayError::Database(e.to_string()))?;

        Ok(result)
    }

    async fn delete_by(&self, field: ApplicationField, value: &str) -> Result<u64> {
        let sql = format!("DELETE FROM applications WHERE {} = ?", field.column());
        let result = sqlx::query(&sql)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| RelayError::Database(e.to_string()))?;
        Ok(result.rows_affected())
    }
}
