//! Persisted entities

mod character;
mod content;
mod mage_group;
mod merit;
mod resource;
mod rote;

pub use character::{validate_ratings, Character};
pub use content::{validate_entries, ContentEntries, ContentScope};
pub use mage_group::{MageGroup, MageGroupFilter, MageGroupType};
pub use merit::{Merit, MeritCost, MeritFilter, MeritKind, MeritType};
pub use resource::{Resource, ResourceFilter};
pub use rote::{Rote, RoteFilter, MAX_SPHERE_LEVEL};
