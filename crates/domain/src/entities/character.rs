//! Character entity - A finished, persisted mage
//!
//! Only the headline values of a build survive finalisation. The full sheet
//! lives in the wizard and is discarded once the character is saved.

use chrono::{DateTime, Utc};

use crate::build::CharacterBuildState;
use crate::catalog::Background;
use crate::error::DomainError;
use crate::ids::CharacterId;
use crate::value_objects::CharacterName;

/// Highest Arete or Avatar rating a stored character may carry.
const MAX_RATING: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: CharacterName,
    /// Tradition, Convention or Craft the mage belongs to.
    pub faction: String,
    pub concept: String,
    pub arete: u8,
    /// Avatar background rating.
    pub avatar: u8,
    pub essence: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    pub fn new(name: CharacterName, now: DateTime<Utc>) -> Self {
        Self {
            id: CharacterId::new(),
            name,
            faction: String::new(),
            concept: String::new(),
            arete: 1,
            avatar: 0,
            essence: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = faction.into();
        self
    }

    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = concept.into();
        self
    }

    pub fn with_essence(mut self, essence: impl Into<String>) -> Self {
        self.essence = essence.into();
        self
    }

    /// Sets Arete and Avatar.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if Arete is 0 or either rating
    /// exceeds 10.
    pub fn with_ratings(mut self, arete: u8, avatar: u8) -> Result<Self, DomainError> {
        validate_ratings(arete, avatar)?;
        self.arete = arete;
        self.avatar = avatar;
        Ok(self)
    }

    /// Creates the stored record for a build that has cleared every phase.
    ///
    /// The faction is the sect when one is given, otherwise the affiliation.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidStateTransition` if the build is not complete
    /// - `DomainError::Validation` if the build breaks an allocation rule or
    ///   has no name
    pub fn from_build(build: &CharacterBuildState, now: DateTime<Utc>) -> Result<Self, DomainError> {
        if !build.is_complete() {
            return Err(DomainError::invalid_state_transition(format!(
                "Build is still in the {} phase",
                build.phase()
            )));
        }
        build.validate()?;

        let identity = build.identity();
        let faction = if identity.sect.trim().is_empty() {
            identity.affiliation.trim()
        } else {
            identity.sect.trim()
        };

        Character::new(CharacterName::new(identity.name.as_str())?, now)
            .with_faction(faction)
            .with_concept(identity.concept.trim())
            .with_essence(identity.essence.trim())
            .with_ratings(
                build.total_arete(),
                build.total_background(Background::Avatar),
            )
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

pub fn validate_ratings(arete: u8, avatar: u8) -> Result<(), DomainError> {
    if arete == 0 || arete > MAX_RATING {
        return Err(DomainError::validation(format!(
            "Arete must be between 1 and {}",
            MAX_RATING
        )));
    }
    if avatar > MAX_RATING {
        return Err(DomainError::validation(format!(
            "Avatar cannot exceed {}",
            MAX_RATING
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{BuildCommand, BuildIdentity, BuildPhase};
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn ratings_are_bounded() {
        let name = CharacterName::new("Dante").unwrap();
        let character = Character::new(name, fixed_time());
        assert!(character.clone().with_ratings(0, 1).is_err());
        assert!(character.clone().with_ratings(3, 11).is_err());
        assert_eq!(character.with_ratings(3, 2).unwrap().arete, 3);
    }

    #[test]
    fn unfinished_builds_cannot_be_stored() {
        let mut build = CharacterBuildState::new();
        build.apply(BuildCommand::SetIdentity {
            identity: BuildIdentity {
                name: "Dante".to_string(),
                ..BuildIdentity::default()
            },
        });
        assert_eq!(build.phase(), BuildPhase::Basics);

        let err = Character::from_build(&build, fixed_time()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
    }

    #[test]
    fn completed_build_keeps_its_headline_values() {
        let json = r#"{
            "identity": {
                "name": " Dante ",
                "affiliation": "Traditions",
                "sect": "",
                "concept": "Hacker",
                "essence": "Dynamic"
            },
            "phase": "complete",
            "attributePriorities": {"mental": "primary", "physical": "secondary", "social": "tertiary"},
            "attributes": {
                "perception": 3, "intelligence": 4, "wits": 3,
                "strength": 2, "dexterity": 3, "stamina": 3,
                "charisma": 2, "manipulation": 3, "appearance": 1
            },
            "abilityPriorities": {"knowledges": "primary", "skills": "secondary", "talents": "tertiary"},
            "abilities": {
                "computer": 3, "science": 3, "enigmas": 3, "academics": 2, "medicine": 2,
                "technology": 3, "research": 3, "stealth": 3,
                "awareness": 3, "subterfuge": 2
            },
            "spheres": {"correspondence": 3, "forces": 2, "mind": 1},
            "affinitySphere": "correspondence",
            "backgrounds": {"avatar": 3, "arcane": 2, "resources": 2},
            "freebieDots": {
                "arete": 1,
                "willpower": 1,
                "backgrounds": {"avatar": 1},
                "spheres": {"forces": 1},
                "abilities": {"medicine": 1}
            }
        }"#;
        let build: CharacterBuildState = serde_json::from_str(json).unwrap();

        let character = Character::from_build(&build, fixed_time()).unwrap();
        assert_eq!(character.name.as_str(), "Dante");
        assert_eq!(character.faction, "Traditions");
        assert_eq!(character.concept, "Hacker");
        assert_eq!(character.essence, "Dynamic");
        assert_eq!(character.arete, 2);
        assert_eq!(character.avatar, 4);
        assert_eq!(character.created_at, fixed_time());
    }

    #[test]
    fn builds_marked_complete_without_clearing_the_gates_are_refused() {
        let json = r#"{
            "identity": {"name": "Dante"},
            "phase": "complete",
            "backgrounds": {"avatar": 2}
        }"#;
        let build: CharacterBuildState = serde_json::from_str(json).unwrap();
        let err = Character::from_build(&build, fixed_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn tampered_builds_are_refused() {
        let json = r#"{
            "identity": {"name": "Dante"},
            "phase": "complete",
            "spheres": {"forces": 3, "prime": 3, "time": 3}
        }"#;
        let build: CharacterBuildState = serde_json::from_str(json).unwrap();
        let err = Character::from_build(&build, fixed_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
