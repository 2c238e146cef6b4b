//! Pool creation and schema.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        faction TEXT NOT NULL,
        concept TEXT NOT NULL,
        arete INTEGER NOT NULL,
        avatar INTEGER NOT NULL,
        essence TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS character_rotes (
        character_id TEXT NOT NULL,
        rote_id TEXT NOT NULL,
        PRIMARY KEY (character_id, rote_id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rotes (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        tradition TEXT NOT NULL,
        description TEXT NOT NULL,
        spheres_json TEXT NOT NULL,
        level INTEGER NOT NULL,
        source TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS merits (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        kind TEXT NOT NULL,
        merit_type TEXT NOT NULL,
        min_cost INTEGER NOT NULL,
        max_cost INTEGER NOT NULL,
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS resources (
        id TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        url TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        published INTEGER NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS mage_groups (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        group_type TEXT NOT NULL,
        summary TEXT NOT NULL,
        content TEXT NOT NULL,
        published INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS content_entries (
        scope TEXT NOT NULL,
        key TEXT NOT NULL,
        value TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        PRIMARY KEY (scope, key)
    )
    "#,
];

/// Opens (creating if needed) the database file at `db_path`.
pub async fn connect(db_path: &str) -> Result<SqlitePool, RepoError> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await
        .map_err(|e| RepoError::database("connect", e))
}

/// Creates every table that does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), RepoError> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| RepoError::database("ensure_schema", e))?;
    }
    Ok(())
}

/// A single-connection in-memory database with the schema applied.
#[cfg(test)]
pub(crate) async fn connect_in_memory() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    ensure_schema(&pool).await.expect("schema");
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_is_idempotent() {
        let pool = connect_in_memory().await;
        ensure_schema(&pool).await.unwrap();

        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();
        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "character_rotes",
                "characters",
                "content_entries",
                "mage_groups",
                "merits",
                "resources",
                "rotes"
            ]
        );
    }
}
