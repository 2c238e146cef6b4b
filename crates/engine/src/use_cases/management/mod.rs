//! Management use cases for CRUD-style operations.
//!
//! These keep HTTP handlers thin. Each CRUD struct talks to its port trait
//! directly and applies the listing filters itself.

mod character;
mod mage_group;
mod merit;
mod resource;
mod rote;

pub use character::{CharacterCrud, CharacterPatch};
pub use mage_group::{MageGroupCrud, MageGroupPatch};
pub use merit::{MeritCrud, MeritPatch};
pub use resource::{ResourceCrud, ResourcePatch};
pub use rote::{RoteCrud, RotePatch};

use paradox_wheel_domain::DomainError;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("Not found")]
    NotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<ValidationError> for ManagementError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

impl From<DomainError> for ManagementError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e.to_string())
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub character: CharacterCrud,
    pub rote: RoteCrud,
    pub merit: MeritCrud,
    pub resource: ResourceCrud,
    pub mage_group: MageGroupCrud,
}

impl ManagementUseCases {
    pub fn new(
        character: CharacterCrud,
        rote: RoteCrud,
        merit: MeritCrud,
        resource: ResourceCrud,
        mage_group: MageGroupCrud,
    ) -> Self {
        Self {
            character,
            rote,
            merit,
            resource,
            mage_group,
        }
    }
}
