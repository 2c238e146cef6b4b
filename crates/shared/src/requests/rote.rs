use std::collections::BTreeMap;

use paradox_wheel_domain::Sphere;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoteRequest {
    pub name: String,
    #[serde(default)]
    pub tradition: String,
    #[serde(default)]
    pub description: String,
    pub spheres: BTreeMap<Sphere, u8>,
    #[serde(default)]
    pub source: String,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRoteRequest {
    pub name: Option<String>,
    pub tradition: Option<String>,
    pub description: Option<String>,
    pub spheres: Option<BTreeMap<Sphere, u8>>,
    pub source: Option<String>,
}

/// Query string of `GET /api/rotes`.
///
/// `sphere` is free text so Technocratic names such as "Data" resolve too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoteQuery {
    pub query: Option<String>,
    pub tradition: Option<String>,
    pub sphere: Option<String>,
    pub max_level: Option<u8>,
}
