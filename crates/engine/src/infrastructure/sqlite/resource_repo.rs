//! SQLite resource repository.

use async_trait::async_trait;
use paradox_wheel_domain::{EntityName, Resource, ResourceId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{parse_column, parse_timestamp};
use crate::infrastructure::ports::{RepoError, ResourceRepo};

pub struct SqliteResourceRepo {
    pool: SqlitePool,
}

impl SqliteResourceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_resource(row: &SqliteRow) -> Result<Resource, RepoError> {
        let id: String = row.get("id");
        let title: String = row.get("title");
        let created_at: String = row.get("created_at");
        let published: i64 = row.get("published");

        Ok(Resource {
            id: parse_column(&id)?,
            title: EntityName::new(title).map_err(RepoError::serialization)?,
            url: row.get("url"),
            description: row.get("description"),
            category: row.get("category"),
            published: published != 0,
            created_at: parse_timestamp(&created_at)?,
        })
    }
}

#[async_trait]
impl ResourceRepo for SqliteResourceRepo {
    async fn list(&self) -> Result<Vec<Resource>, RepoError> {
        let rows = sqlx::query("SELECT * FROM resources ORDER BY created_at DESC, title")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("resource.list", e))?;

        rows.iter().map(Self::row_to_resource).collect()
    }

    async fn get(&self, id: ResourceId) -> Result<Option<Resource>, RepoError> {
        let row = sqlx::query("SELECT * FROM resources WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("resource.get", e))?;

        row.as_ref().map(Self::row_to_resource).transpose()
    }

    async fn save(&self, resource: &Resource) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO resources (id, title, url, description, category, published, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                url = excluded.url,
                description = excluded.description,
                category = excluded.category,
                published = excluded.published
            "#,
        )
        .bind(resource.id.to_string())
        .bind(resource.title.as_str())
        .bind(&resource.url)
        .bind(&resource.description)
        .bind(&resource.category)
        .bind(resource.published)
        .bind(resource.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("resource.save", e))?;

        Ok(())
    }

    async fn delete(&self, id: ResourceId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM resources WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("resource.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Resource", id));
        }
        Ok(())
    }
}
