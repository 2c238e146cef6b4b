use paradox_wheel_domain::MageGroupType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMageGroupRequest {
    pub name: String,
    pub group_type: MageGroupType,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub published: bool,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateMageGroupRequest {
    pub name: Option<String>,
    pub group_type: Option<MageGroupType>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

/// Query string of `GET /api/mage-groups`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MageGroupQuery {
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    pub published: Option<bool>,
}
