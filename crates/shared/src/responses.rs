//! Response payloads
//!
//! Every error body is an [`ErrorResponse`]. Entity responses are built from
//! the domain types with `From`.

use std::collections::BTreeMap;

use paradox_wheel_domain::{
    Ability, AbilityCategory, AllocationOutcome, AttributeCategory, BuildPhase, Character,
    CharacterBuildState, MageGroup, MageGroupType, Merit, MeritKind, MeritType, Resource, Rote,
    Sphere,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// Characters
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: Uuid,
    pub name: String,
    pub faction: String,
    pub concept: String,
    pub arete: u8,
    pub avatar: u8,
    pub essence: String,
    /// RFC 3339
    pub created_at: String,
    /// RFC 3339
    pub updated_at: String,
}

impl From<&Character> for CharacterResponse {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id.to_uuid(),
            name: character.name.to_string(),
            faction: character.faction.clone(),
            concept: character.concept.clone(),
            arete: character.arete,
            avatar: character.avatar,
            essence: character.essence.clone(),
            created_at: character.created_at.to_rfc3339(),
            updated_at: character.updated_at.to_rfc3339(),
        }
    }
}

/// A character with the rotes assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetailResponse {
    #[serde(flatten)]
    pub character: CharacterResponse,
    pub rote_ids: Vec<Uuid>,
}

/// Rote assignments of one character, after a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRotesResponse {
    pub character_id: Uuid,
    pub rote_ids: Vec<Uuid>,
}

// =============================================================================
// Reference data
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoteResponse {
    pub id: Uuid,
    pub name: String,
    pub tradition: String,
    pub description: String,
    pub spheres: BTreeMap<Sphere, u8>,
    /// Highest sphere level required.
    pub level: u8,
    pub source: String,
}

impl From<&Rote> for RoteResponse {
    fn from(rote: &Rote) -> Self {
        Self {
            id: rote.id.to_uuid(),
            name: rote.name.to_string(),
            tradition: rote.tradition.clone(),
            description: rote.description.clone(),
            spheres: rote.spheres().clone(),
            level: rote.level(),
            source: rote.source.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeritResponse {
    pub id: Uuid,
    pub name: String,
    pub kind: MeritKind,
    pub merit_type: MeritType,
    pub min_cost: u8,
    pub max_cost: u8,
    pub description: String,
}

impl From<&Merit> for MeritResponse {
    fn from(merit: &Merit) -> Self {
        Self {
            id: merit.id.to_uuid(),
            name: merit.name.to_string(),
            kind: merit.kind,
            merit_type: merit.merit_type,
            min_cost: merit.cost.min(),
            max_cost: merit.cost.max(),
            description: merit.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub published: bool,
    pub created_at: String,
}

impl From<&Resource> for ResourceResponse {
    fn from(resource: &Resource) -> Self {
        Self {
            id: resource.id.to_uuid(),
            title: resource.title.to_string(),
            url: resource.url.clone(),
            description: resource.description.clone(),
            category: resource.category.clone(),
            published: resource.published,
            created_at: resource.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MageGroupResponse {
    pub id: Uuid,
    pub name: String,
    pub group_type: MageGroupType,
    pub summary: String,
    pub content: String,
    pub published: bool,
}

impl From<&MageGroup> for MageGroupResponse {
    fn from(group: &MageGroup) -> Self {
        Self {
            id: group.id.to_uuid(),
            name: group.name.to_string(),
            group_type: group.group_type,
            summary: group.summary.clone(),
            content: group.content.clone(),
            published: group.published,
        }
    }
}

// =============================================================================
// Character builds
// =============================================================================

/// Derived budgets shown alongside a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    pub phase: BuildPhase,
    pub can_proceed: bool,
    /// Why the current phase cannot be left yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    pub attribute_remaining: BTreeMap<AttributeCategory, i32>,
    pub ability_remaining: BTreeMap<AbilityCategory, i32>,
    pub sphere_remaining: i32,
    pub background_remaining: i32,
    pub remaining_freebies: i32,
    pub arete: u8,
    pub willpower: u8,
    pub abilities_needing_specialty: Vec<Ability>,
}

impl From<&CharacterBuildState> for BuildSummary {
    fn from(build: &CharacterBuildState) -> Self {
        Self {
            phase: build.phase(),
            can_proceed: build.can_proceed(),
            gate: build.phase_gate().err(),
            attribute_remaining: AttributeCategory::ALL
                .iter()
                .map(|category| (*category, build.attribute_remaining(*category)))
                .collect(),
            ability_remaining: AbilityCategory::ALL
                .iter()
                .map(|category| (*category, build.ability_remaining(*category)))
                .collect(),
            sphere_remaining: build.sphere_remaining(),
            background_remaining: build.background_remaining(),
            remaining_freebies: build.remaining_freebies(),
            arete: build.total_arete(),
            willpower: build.total_willpower(),
            abilities_needing_specialty: build.abilities_needing_specialty(),
        }
    }
}

/// Result of running one build command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildCommandResponse {
    pub state: CharacterBuildState,
    pub outcome: AllocationOutcome,
    pub summary: BuildSummary,
}

impl BuildCommandResponse {
    pub fn new(state: CharacterBuildState, outcome: AllocationOutcome) -> Self {
        let summary = BuildSummary::from(&state);
        Self {
            state,
            outcome,
            summary,
        }
    }
}
