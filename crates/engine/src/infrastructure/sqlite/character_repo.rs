//! SQLite character repository.

use async_trait::async_trait;
use paradox_wheel_domain::{Character, CharacterId, CharacterName, RoteId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::{parse_column, parse_timestamp, small_int};
use crate::infrastructure::ports::{CharacterRepo, RepoError};

pub struct SqliteCharacterRepo {
    pool: SqlitePool,
}

impl SqliteCharacterRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_character(row: &SqliteRow) -> Result<Character, RepoError> {
        let id: String = row.get("id");
        let name: String = row.get("name");
        let created_at: String = row.get("created_at");
        let updated_at: String = row.get("updated_at");

        Ok(Character {
            id: parse_column(&id)?,
            name: CharacterName::new(name).map_err(RepoError::serialization)?,
            faction: row.get("faction"),
            concept: row.get("concept"),
            arete: small_int("arete", row.get("arete"))?,
            avatar: small_int("avatar", row.get("avatar"))?,
            essence: row.get("essence"),
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })
    }
}

#[async_trait]
impl CharacterRepo for SqliteCharacterRepo {
    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        let rows = sqlx::query("SELECT * FROM characters ORDER BY created_at, name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("character.list", e))?;

        rows.iter().map(Self::row_to_character).collect()
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        let row = sqlx::query("SELECT * FROM characters WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("character.get", e))?;

        row.as_ref().map(Self::row_to_character).transpose()
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO characters
                (id, name, faction, concept, arete, avatar, essence, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                faction = excluded.faction,
                concept = excluded.concept,
                arete = excluded.arete,
                avatar = excluded.avatar,
                essence = excluded.essence,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(character.id.to_string())
        .bind(character.name.as_str())
        .bind(&character.faction)
        .bind(&character.concept)
        .bind(i64::from(character.arete))
        .bind(i64::from(character.avatar))
        .bind(&character.essence)
        .bind(character.created_at.to_rfc3339())
        .bind(character.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("character.save", e))?;

        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<(), RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("character.delete", e))?;

        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("character.delete", e))?;
        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Character", id));
        }

        sqlx::query("DELETE FROM character_rotes WHERE character_id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("character.delete", e))?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("character.delete", e))
    }

    async fn list_rote_ids(&self, id: CharacterId) -> Result<Vec<RoteId>, RepoError> {
        let rows = sqlx::query(
            "SELECT rote_id FROM character_rotes WHERE character_id = ? ORDER BY rote_id",
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("character.list_rote_ids", e))?;

        rows.iter()
            .map(|row| {
                let rote_id: String = row.get("rote_id");
                parse_column(&rote_id)
            })
            .collect()
    }

    async fn add_rote(&self, id: CharacterId, rote_id: RoteId) -> Result<(), RepoError> {
        sqlx::query(
            "INSERT OR IGNORE INTO character_rotes (character_id, rote_id) VALUES (?, ?)",
        )
        .bind(id.to_string())
        .bind(rote_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("character.add_rote", e))?;

        Ok(())
    }

    async fn remove_rote(&self, id: CharacterId, rote_id: RoteId) -> Result<(), RepoError> {
        let result =
            sqlx::query("DELETE FROM character_rotes WHERE character_id = ? AND rote_id = ?")
                .bind(id.to_string())
                .bind(rote_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("character.remove_rote", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found(
                "Character rote",
                format!("{}/{}", id, rote_id),
            ));
        }
        Ok(())
    }
}
