//! SQLite merit and flaw repository.

use async_trait::async_trait;
use paradox_wheel_domain::{EntityName, Merit, MeritCost, MeritId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{parse_column, small_int};
use crate::infrastructure::ports::{MeritRepo, RepoError};

pub struct SqliteMeritRepo {
    pool: SqlitePool,
}

impl SqliteMeritRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_merit(row: &SqliteRow) -> Result<Merit, RepoError> {
        let id: String = row.get("id");
        let name: String = row.get("name");
        let kind: String = row.get("kind");
        let merit_type: String = row.get("merit_type");
        let cost = MeritCost::new(
            small_int("min_cost", row.get("min_cost"))?,
            small_int("max_cost", row.get("max_cost"))?,
        )
        .map_err(RepoError::serialization)?;

        Ok(Merit::new(
            EntityName::new(name).map_err(RepoError::serialization)?,
            parse_column(&kind)?,
            parse_column(&merit_type)?,
            cost,
        )
        .with_id(parse_column(&id)?)
        .with_description(row.get::<String, _>("description")))
    }
}

#[async_trait]
impl MeritRepo for SqliteMeritRepo {
    async fn list(&self) -> Result<Vec<Merit>, RepoError> {
        let rows = sqlx::query("SELECT * FROM merits ORDER BY kind DESC, name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("merit.list", e))?;

        rows.iter().map(Self::row_to_merit).collect()
    }

    async fn get(&self, id: MeritId) -> Result<Option<Merit>, RepoError> {
        let row = sqlx::query("SELECT * FROM merits WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("merit.get", e))?;

        row.as_ref().map(Self::row_to_merit).transpose()
    }

    async fn save(&self, merit: &Merit) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO merits (id, name, kind, merit_type, min_cost, max_cost, description)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                kind = excluded.kind,
                merit_type = excluded.merit_type,
                min_cost = excluded.min_cost,
                max_cost = excluded.max_cost,
                description = excluded.description
            "#,
        )
        .bind(merit.id.to_string())
        .bind(merit.name.as_str())
        .bind(merit.kind.as_str())
        .bind(merit.merit_type.as_str())
        .bind(i64::from(merit.cost.min()))
        .bind(i64::from(merit.cost.max()))
        .bind(&merit.description)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("merit.save", e))?;

        Ok(())
    }

    async fn delete(&self, id: MeritId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM merits WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("merit.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Merit", id));
        }
        Ok(())
    }
}
