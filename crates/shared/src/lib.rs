//! The Paradox Wheel Shared - Wire types for the REST API
//!
//! Request bodies, query strings and response payloads exchanged between the
//! engine and its clients. Everything serializes in camelCase.
//!
//! # Design Principles
//!
//! 1. **No business logic** - Pure data types and conversions
//! 2. **No domain IDs** - use raw `uuid::Uuid` in DTOs

pub mod requests;
pub mod responses;

pub use requests::{
    BuildCommandRequest, CharacterRoteRequest, CreateCharacterRequest, CreateMageGroupRequest,
    CreateMeritRequest, CreateResourceRequest, CreateRoteRequest, MageGroupQuery, MeritQuery,
    ResourceQuery, RoteQuery, UpdateCharacterRequest, UpdateMageGroupRequest, UpdateMeritRequest,
    UpdateResourceRequest, UpdateRoteRequest,
};
pub use responses::{
    BuildCommandResponse, BuildSummary, CharacterDetailResponse, CharacterResponse,
    CharacterRotesResponse, ErrorResponse, MageGroupResponse, MeritResponse, ResourceResponse,
    RoteResponse,
};
