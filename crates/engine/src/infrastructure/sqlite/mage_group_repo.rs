//! SQLite mage group repository.

use async_trait::async_trait;
use paradox_wheel_domain::{EntityName, MageGroup, MageGroupId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::parse_column;
use crate::infrastructure::ports::{MageGroupRepo, RepoError};

pub struct SqliteMageGroupRepo {
    pool: SqlitePool,
}

impl SqliteMageGroupRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_group(row: &SqliteRow) -> Result<MageGroup, RepoError> {
        let id: String = row.get("id");
        let name: String = row.get("name");
        let group_type: String = row.get("group_type");
        let published: i64 = row.get("published");

        Ok(MageGroup {
            id: parse_column(&id)?,
            name: EntityName::new(name).map_err(RepoError::serialization)?,
            group_type: parse_column(&group_type)?,
            summary: row.get("summary"),
            content: row.get("content"),
            published: published != 0,
        })
    }
}

#[async_trait]
impl MageGroupRepo for SqliteMageGroupRepo {
    async fn list(&self) -> Result<Vec<MageGroup>, RepoError> {
        let rows = sqlx::query("SELECT * FROM mage_groups ORDER BY group_type, name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("mage_group.list", e))?;

        rows.iter().map(Self::row_to_group).collect()
    }

    async fn get(&self, id: MageGroupId) -> Result<Option<MageGroup>, RepoError> {
        let row = sqlx::query("SELECT * FROM mage_groups WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("mage_group.get", e))?;

        row.as_ref().map(Self::row_to_group).transpose()
    }

    async fn save(&self, group: &MageGroup) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO mage_groups (id, name, group_type, summary, content, published)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                group_type = excluded.group_type,
                summary = excluded.summary,
                content = excluded.content,
                published = excluded.published
            "#,
        )
        .bind(group.id.to_string())
        .bind(group.name.as_str())
        .bind(group.group_type.as_str())
        .bind(&group.summary)
        .bind(&group.content)
        .bind(group.published)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("mage_group.save", e))?;

        Ok(())
    }

    async fn delete(&self, id: MageGroupId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM mage_groups WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("mage_group.delete", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("MageGroup", id));
        }
        Ok(())
    }
}
