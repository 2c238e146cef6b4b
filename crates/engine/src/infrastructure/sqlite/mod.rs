//! SQLite persistence.
//!
//! One repository per port trait, all sharing a single pool. Timestamps are
//! stored as RFC 3339 text and IDs as hyphenated UUID strings.

mod character_repo;
mod connection;
mod content_repo;
mod mage_group_repo;
mod merit_repo;
mod resource_repo;
mod rote_repo;

pub use character_repo::SqliteCharacterRepo;
pub use connection::{connect, ensure_schema};
pub use content_repo::SqliteContentRepo;
pub use mage_group_repo::SqliteMageGroupRepo;
pub use merit_repo::SqliteMeritRepo;
pub use resource_repo::SqliteResourceRepo;
pub use rote_repo::SqliteRoteRepo;

#[cfg(test)]
pub(crate) use connection::connect_in_memory;

use std::str::FromStr;

use chrono::{DateTime, Utc};
use paradox_wheel_domain::DomainError;

use crate::infrastructure::ports::RepoError;

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepoError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepoError::serialization(format!("timestamp {value}: {e}")))
}

fn parse_column<T>(value: &str) -> Result<T, RepoError>
where
    T: FromStr<Err = DomainError>,
{
    value.parse().map_err(RepoError::serialization)
}

fn small_int(column: &'static str, value: i64) -> Result<u8, RepoError> {
    u8::try_from(value)
        .map_err(|_| RepoError::serialization(format!("{column} out of range: {value}")))
}
