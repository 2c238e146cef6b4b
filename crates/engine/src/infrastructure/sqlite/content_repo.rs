//! SQLite content repository.

use std::sync::Arc;

use async_trait::async_trait;
use paradox_wheel_domain::{ContentEntries, ContentScope};
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{ClockPort, ContentRepo, RepoError};

pub struct SqliteContentRepo {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteContentRepo {
    pub fn new(pool: SqlitePool, clock: Arc<dyn ClockPort>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl ContentRepo for SqliteContentRepo {
    async fn get(&self, scope: ContentScope) -> Result<ContentEntries, RepoError> {
        let rows = sqlx::query("SELECT key, value FROM content_entries WHERE scope = ?")
            .bind(scope.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("content.get", e))?;

        Ok(rows
            .iter()
            .map(|row| (row.get("key"), row.get("value")))
            .collect())
    }

    async fn upsert(&self, scope: ContentScope, entries: &ContentEntries) -> Result<(), RepoError> {
        let now = self.clock.now().to_rfc3339();
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("content.upsert", e))?;

        for (key, value) in entries {
            sqlx::query(
                r#"
                INSERT INTO content_entries (scope, key, value, updated_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(scope, key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(scope.as_str())
            .bind(key)
            .bind(value)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("content.upsert", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("content.upsert", e))
    }
}
