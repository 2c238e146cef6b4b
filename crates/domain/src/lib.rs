//! Domain layer for The Paradox Wheel.
//!
//! Holds the game's closed vocabularies, the persisted reference entities and
//! the character build allocator. Nothing here performs I/O.

pub mod build;
pub mod catalog;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use build::{
    AllocationOutcome, BuildCommand, BuildIdentity, BuildPhase, CharacterBuildState,
    FreebieTarget, MeritPick, PriorityTier, Rejection,
};
pub use catalog::{
    Ability, AbilityCategory, Affiliation, Attribute, AttributeCategory, Background, Sphere,
    Tradition,
};
pub use entities::{
    validate_entries, validate_ratings, Character, ContentEntries, ContentScope, MageGroup,
    MageGroupFilter, MageGroupType, Merit, MeritCost, MeritFilter, MeritKind, MeritType, Resource,
    ResourceFilter, Rote, RoteFilter,
};
pub use error::DomainError;
pub use ids::{CharacterId, MageGroupId, MeritId, ResourceId, RoteId};
pub use value_objects::{CharacterName, EntityName};
