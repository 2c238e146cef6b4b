use paradox_wheel_domain::{BuildCommand, CharacterBuildState};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/character-builds/commands`.
///
/// A missing `state` starts a fresh build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildCommandRequest {
    #[serde(default)]
    pub state: CharacterBuildState,
    pub command: BuildCommand,
}
