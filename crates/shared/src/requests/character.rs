use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub name: String,
    #[serde(default)]
    pub faction: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub arete: Option<u8>,
    #[serde(default)]
    pub avatar: Option<u8>,
    #[serde(default)]
    pub essence: String,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    pub faction: Option<String>,
    pub concept: Option<String>,
    pub arete: Option<u8>,
    pub avatar: Option<u8>,
    pub essence: Option<String>,
}

/// Body of `POST` and `DELETE /api/characters/{id}/rotes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRoteRequest {
    pub rote_id: Uuid,
}
