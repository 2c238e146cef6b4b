//! SQLite rote repository.
//!
//! Sphere requirements are stored as a JSON object keyed by sphere name.

use std::collections::BTreeMap;

use async_trait::async_trait;
use paradox_wheel_domain::{EntityName, Rote, RoteId, Sphere};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::parse_column;
use crate::infrastructure::ports::{RepoError, RoteRepo};

pub struct SqliteRoteRepo {
    pool: SqlitePool,
}

impl SqliteRoteRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_rote(row: &SqliteRow) -> Result<Rote, RepoError> {
        let id: String = row.get("id");
        let name: String = row.get("name");
        let spheres_json: String = row.get("spheres_json");

        let spheres: BTreeMap<Sphere, u8> =
            serde_json::from_str(&spheres_json).map_err(RepoError::serialization)?;
        let name = EntityName::new(name).map_err(RepoError::serialization)?;

        Ok(Rote::new(name, spheres)
            .map_err(RepoError::serialization)?
            .with_id(parse_column(&id)?)
            .with_tradition(row.get::<String, _>("tradition"))
            .with_description(row.get::<String, _>("description"))
            .with_source(row.get::<String, _>("source")))
    }
}

#[async_trait]
impl RoteRepo for SqliteRoteRepo {
    async fn list(&self) -> Result<Vec<Rote>, RepoError> {
        let rows = sqlx::query("SELECT * FROM rotes ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("rote.list", e))?;

        rows.iter().map(Self::row_to_rote).collect()
    }

    async fn get(&self, id: RoteId) -> Result<Option<Rote>, RepoError> {
        let row = sqlx::query("SELECT * FROM rotes WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("rote.get", e))?;

        row.as_ref().map(Self::row_to_rote).transpose()
    }

    async fn save(&self, rote: &Rote) -> Result<(), RepoError> {
        let spheres_json =
            serde_json::to_string(rote.spheres()).map_err(RepoError::serialization)?;

        sqlx::query(
            r#"
            INSERT INTO rotes (id, name, tradition, description, spheres_json, level, source)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                tradition = excluded.tradition,
                description = excluded.description,
                spheres_json = excluded.spheres_json,
                level = excluded.level,
                source = excluded.source
            "#,
        )
        .bind(rote.id.to_string())
        .bind(rote.name.as_str())
        .bind(&rote.tradition)
        .bind(&rote.description)
        .bind(spheres_json)
        .bind(i64::from(rote.level()))
        .bind(&rote.source)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("rote.save", e))?;

        Ok(())
    }

    async fn delete(&self, id: RoteId) -> Result<(), RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("rote.delete", e))?;

        let result = sqlx::query("DELETE FROM rotes WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("rote.delete", e))?;
        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Rote", id));
        }

        sqlx::query("DELETE FROM character_rotes WHERE rote_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("rote.delete", e))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("rote.delete", e))
    }
}
