//! Character build wizard.
//!
//! The server keeps no build sessions. Clients send the whole state with
//! every command and get the next state back; only a finished build is
//! persisted.

use std::sync::Arc;

use paradox_wheel_domain::{AllocationOutcome, BuildCommand, Character, CharacterBuildState};

use crate::infrastructure::ports::{CharacterRepo, ClockPort};
use crate::use_cases::management::ManagementError;

pub struct BuildOps {
    character: Arc<dyn CharacterRepo>,
    clock: Arc<dyn ClockPort>,
}

impl BuildOps {
    pub fn new(character: Arc<dyn CharacterRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { character, clock }
    }

    /// Applies one command. A rejected command returns the state unchanged.
    ///
    /// The posted state is checked first; one that breaks an allocation rule
    /// is refused before any command touches it.
    pub fn run_command(
        &self,
        mut state: CharacterBuildState,
        command: BuildCommand,
    ) -> Result<(CharacterBuildState, AllocationOutcome), ManagementError> {
        if let Err(e) = state.validate() {
            tracing::debug!(phase = %state.phase(), error = %e, "Posted build state refused");
            return Err(e.into());
        }
        let outcome = state.apply(command);
        if let Some(reason) = outcome.rejection() {
            tracing::debug!(phase = %state.phase(), %reason, "Build command rejected");
        }
        Ok((state, outcome))
    }

    /// Persists a completed build as a new character.
    pub async fn finalize(&self, state: &CharacterBuildState) -> Result<Character, ManagementError> {
        let character = Character::from_build(state, self.clock.now())?;
        self.character.save(&character).await?;
        tracing::info!(
            id = %character.id,
            name = %character.name,
            arete = character.arete,
            "Character finalized from build"
        );
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::MockCharacterRepo;
    use chrono::{TimeZone, Utc};
    use paradox_wheel_domain::{Attribute, BuildPhase, FreebieTarget};

    fn ops(repo: MockCharacterRepo) -> BuildOps {
        BuildOps::new(
            Arc::new(repo),
            Arc::new(FixedClock(Utc.timestamp_opt(1_700_000_000, 0).unwrap())),
        )
    }

    const COMPLETE_BUILD: &str = r#"{
        "identity": {"name": "Moira", "sect": "Verbena"},
        "phase": "complete",
        "attributePriorities": {"physical": "primary", "social": "secondary", "mental": "tertiary"},
        "attributes": {
            "strength": 3, "dexterity": 4, "stamina": 3,
            "charisma": 3, "manipulation": 2, "appearance": 3,
            "perception": 3, "intelligence": 1, "wits": 2
        },
        "abilityPriorities": {"talents": "primary", "skills": "secondary", "knowledges": "tertiary"},
        "abilities": {
            "alertness": 3, "awareness": 3, "empathy": 3, "expression": 2, "brawl": 2,
            "survival": 3, "meditation": 3, "crafts": 3,
            "occult": 3, "medicine": 2
        },
        "spheres": {"life": 3, "forces": 2, "prime": 1},
        "affinitySphere": "life",
        "backgrounds": {"avatar": 3, "node": 2, "destiny": 2},
        "freebieDots": {"arete": 1, "willpower": 2, "spheres": {"forces": 1}, "abilities": {"medicine": 1}}
    }"#;

    #[test]
    fn rejected_commands_leave_the_state_alone() {
        let ops = ops(MockCharacterRepo::new());
        let before = CharacterBuildState::new();

        let (after, outcome) = ops
            .run_command(
                before.clone(),
                BuildCommand::SetAttribute {
                    attribute: Attribute::Strength,
                    value: 4,
                },
            )
            .unwrap();
        assert!(outcome.is_rejected());
        assert_eq!(after, before);
    }

    #[test]
    fn advance_is_gated() {
        let ops = ops(MockCharacterRepo::new());
        let (state, outcome) = ops
            .run_command(CharacterBuildState::new(), BuildCommand::Advance)
            .unwrap();
        assert!(outcome.is_rejected());
        assert_eq!(state.phase(), BuildPhase::Basics);
    }

    #[test]
    fn tampered_states_are_refused_before_the_command_runs() {
        let ops = ops(MockCharacterRepo::new());
        let state: CharacterBuildState =
            serde_json::from_str(r#"{"freebieDots":{"arete":255}}"#).unwrap();

        let err = ops
            .run_command(
                state,
                BuildCommand::AddFreebieDot {
                    target: FreebieTarget::Arete,
                },
            )
            .unwrap_err();
        assert!(matches!(err, ManagementError::Domain(_)));
    }

    #[tokio::test]
    async fn unfinished_builds_are_not_saved() {
        let mut repo = MockCharacterRepo::new();
        repo.expect_save().never();

        let err = ops(repo)
            .finalize(&CharacterBuildState::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::Domain(_)));
    }

    #[tokio::test]
    async fn forged_complete_builds_are_not_saved() {
        let build: CharacterBuildState = serde_json::from_str(
            r#"{
                "identity": {"name": "Moira", "sect": "Verbena"},
                "phase": "complete",
                "backgrounds": {"avatar": 2}
            }"#,
        )
        .unwrap();

        let mut repo = MockCharacterRepo::new();
        repo.expect_save().never();

        let err = ops(repo).finalize(&build).await.unwrap_err();
        assert!(matches!(err, ManagementError::Domain(_)));
    }

    #[tokio::test]
    async fn complete_builds_are_saved() {
        let build: CharacterBuildState = serde_json::from_str(COMPLETE_BUILD).unwrap();

        let mut repo = MockCharacterRepo::new();
        repo.expect_save()
            .withf(|c| c.name.as_str() == "Moira" && c.faction == "Verbena" && c.avatar == 3)
            .times(1)
            .returning(|_| Ok(()));

        let character = ops(repo).finalize(&build).await.unwrap();
        assert_eq!(character.arete, 2);
    }
}
