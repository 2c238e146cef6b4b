use paradox_wheel_domain::{MeritKind, MeritType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeritRequest {
    pub name: String,
    pub kind: MeritKind,
    pub merit_type: MeritType,
    pub min_cost: u8,
    /// Defaults to `min_cost` for fixed-cost entries.
    #[serde(default)]
    pub max_cost: Option<u8>,
    #[serde(default)]
    pub description: String,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateMeritRequest {
    pub name: Option<String>,
    pub kind: Option<MeritKind>,
    pub merit_type: Option<MeritType>,
    pub min_cost: Option<u8>,
    pub max_cost: Option<u8>,
    pub description: Option<String>,
}

/// Query string of `GET /api/merits`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeritQuery {
    pub kind: Option<String>,
    #[serde(rename = "type")]
    pub merit_type: Option<String>,
}
