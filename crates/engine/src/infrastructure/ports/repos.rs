//! Repository port traits.

use async_trait::async_trait;
use paradox_wheel_domain::{
    Character, CharacterId, ContentEntries, ContentScope, MageGroup, MageGroupId, Merit, MeritId,
    Resource, ResourceId, Rote, RoteId,
};

use super::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================
//
// `delete` returns `RepoError::NotFound` when no row matched.

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Character>, RepoError>;
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
    /// Deletes the character and its rote assignments.
    async fn delete(&self, id: CharacterId) -> Result<(), RepoError>;

    // Rote assignments
    async fn list_rote_ids(&self, id: CharacterId) -> Result<Vec<RoteId>, RepoError>;
    /// Idempotent: assigning a rote twice keeps one row.
    async fn add_rote(&self, id: CharacterId, rote_id: RoteId) -> Result<(), RepoError>;
    async fn remove_rote(&self, id: CharacterId, rote_id: RoteId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoteRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Rote>, RepoError>;
    async fn get(&self, id: RoteId) -> Result<Option<Rote>, RepoError>;
    async fn save(&self, rote: &Rote) -> Result<(), RepoError>;
    /// Deletes the rote and unassigns it from every character.
    async fn delete(&self, id: RoteId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeritRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Merit>, RepoError>;
    async fn get(&self, id: MeritId) -> Result<Option<Merit>, RepoError>;
    async fn save(&self, merit: &Merit) -> Result<(), RepoError>;
    async fn delete(&self, id: MeritId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<Resource>, RepoError>;
    async fn get(&self, id: ResourceId) -> Result<Option<Resource>, RepoError>;
    async fn save(&self, resource: &Resource) -> Result<(), RepoError>;
    async fn delete(&self, id: ResourceId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MageGroupRepo: Send + Sync {
    async fn list(&self) -> Result<Vec<MageGroup>, RepoError>;
    async fn get(&self, id: MageGroupId) -> Result<Option<MageGroup>, RepoError>;
    async fn save(&self, group: &MageGroup) -> Result<(), RepoError>;
    async fn delete(&self, id: MageGroupId) -> Result<(), RepoError>;
}

/// Key/value site copy, one map per scope.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepo: Send + Sync {
    async fn get(&self, scope: ContentScope) -> Result<ContentEntries, RepoError>;
    /// Inserts or overwrites the given keys. Keys not in `entries` are kept.
    async fn upsert(&self, scope: ContentScope, entries: &ContentEntries) -> Result<(), RepoError>;
}
