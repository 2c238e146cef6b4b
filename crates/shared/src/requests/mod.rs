//! Request bodies and query strings

mod build;
mod character;
mod mage_group;
mod merit;
mod resource;
mod rote;

pub use build::BuildCommandRequest;
pub use character::{CharacterRoteRequest, CreateCharacterRequest, UpdateCharacterRequest};
pub use mage_group::{CreateMageGroupRequest, MageGroupQuery, UpdateMageGroupRequest};
pub use merit::{CreateMeritRequest, MeritQuery, UpdateMeritRequest};
pub use resource::{CreateResourceRequest, ResourceQuery, UpdateResourceRequest};
pub use rote::{CreateRoteRequest, RoteQuery, UpdateRoteRequest};
