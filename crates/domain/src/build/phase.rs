//! The creation wizard's linear phase sequence and its forward gates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{AbilityCategory, AttributeCategory};
use crate::error::DomainError;

use super::outcome::{AllocationOutcome, Rejection};
use super::state::CharacterBuildState;

/// Wizard phase. Moves forward one step when its gate passes and back one
/// step at any time.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BuildPhase {
    #[default]
    Basics,
    AttributesPriority,
    AttributesAssign,
    AbilitiesPriority,
    AbilitiesAssign,
    Spheres,
    Backgrounds,
    Freebies,
    Complete,
}

impl BuildPhase {
    pub const ALL: [BuildPhase; 9] = [
        BuildPhase::Basics,
        BuildPhase::AttributesPriority,
        BuildPhase::AttributesAssign,
        BuildPhase::AbilitiesPriority,
        BuildPhase::AbilitiesAssign,
        BuildPhase::Spheres,
        BuildPhase::Backgrounds,
        BuildPhase::Freebies,
        BuildPhase::Complete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildPhase::Basics => "basics",
            BuildPhase::AttributesPriority => "attributes-priority",
            BuildPhase::AttributesAssign => "attributes-assign",
            BuildPhase::AbilitiesPriority => "abilities-priority",
            BuildPhase::AbilitiesAssign => "abilities-assign",
            BuildPhase::Spheres => "spheres",
            BuildPhase::Backgrounds => "backgrounds",
            BuildPhase::Freebies => "freebies",
            BuildPhase::Complete => "complete",
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|phase| *phase == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Option<BuildPhase> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<BuildPhase> {
        self.index()
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildPhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|phase| phase.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown build phase: {}", s)))
    }
}

impl CharacterBuildState {
    /// Why the current phase cannot be left yet, or `Ok` if it can.
    pub fn phase_gate(&self) -> Result<(), String> {
        self.gate(self.phase)
    }

    /// Re-runs the gate of every phase before `Complete`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first unfinished phase.
    pub fn check_cleared_gates(&self) -> Result<(), DomainError> {
        for phase in BuildPhase::ALL
            .iter()
            .copied()
            .take_while(|phase| *phase != BuildPhase::Complete)
        {
            self.gate(phase).map_err(|reason| {
                DomainError::validation(format!("The {} phase is unfinished: {}", phase, reason))
            })?;
        }
        Ok(())
    }

    fn gate(&self, phase: BuildPhase) -> Result<(), String> {
        match phase {
            BuildPhase::Basics => {
                if self.identity.name.trim().is_empty() {
                    return Err("a name is required".to_string());
                }
            }
            BuildPhase::AttributesPriority => {
                if !self.attribute_priorities.is_complete() {
                    return Err("rank physical, social and mental exactly once each".to_string());
                }
            }
            BuildPhase::AttributesAssign => {
                for category in AttributeCategory::ALL {
                    require_spent(category.name(), self.attribute_remaining(*category))?;
                }
            }
            BuildPhase::AbilitiesPriority => {
                if !self.ability_priorities.is_complete() {
                    return Err(
                        "rank talents, skills and knowledges exactly once each".to_string()
                    );
                }
            }
            BuildPhase::AbilitiesAssign => {
                for category in AbilityCategory::ALL {
                    require_spent(category.name(), self.ability_remaining(*category))?;
                }
            }
            BuildPhase::Spheres => {
                require_spent("Spheres", self.sphere_remaining())?;
                let affinity = self
                    .affinity_sphere
                    .ok_or_else(|| "choose an affinity sphere".to_string())?;
                if let Some(tradition) = self.tradition() {
                    if !tradition.offers_affinity(affinity) {
                        return Err(format!(
                            "{} does not offer {} as an affinity",
                            tradition, affinity
                        ));
                    }
                }
            }
            BuildPhase::Backgrounds => {
                require_spent("Backgrounds", self.background_remaining())?;
            }
            BuildPhase::Freebies => {
                require_spent("Freebie points", self.remaining_freebies())?;
            }
            BuildPhase::Complete => return Err("the build is complete".to_string()),
        }
        Ok(())
    }

    pub fn can_proceed(&self) -> bool {
        self.phase_gate().is_ok()
    }

    /// Moves to the next phase if the current one's gate passes.
    pub fn advance(&mut self) -> AllocationOutcome {
        let phase = self.phase;
        match (self.phase_gate(), phase.next()) {
            (Ok(()), Some(next)) => {
                self.phase = next;
                AllocationOutcome::Applied
            }
            (Err(reason), _) => AllocationOutcome::rejected(Rejection::PhaseGate { phase, reason }),
            (Ok(()), None) => AllocationOutcome::rejected(Rejection::PhaseGate {
                phase,
                reason: "there is no later phase".to_string(),
            }),
        }
    }

    /// Steps back one phase. Downstream allocations are kept.
    pub fn retreat(&mut self) -> AllocationOutcome {
        match self.phase.previous() {
            Some(previous) => {
                self.phase = previous;
                AllocationOutcome::Applied
            }
            None => AllocationOutcome::rejected(Rejection::AtFirstPhase),
        }
    }

    /// True once the build has cleared every gate.
    pub fn is_complete(&self) -> bool {
        self.phase == BuildPhase::Complete
    }
}

fn require_spent(pool: &str, remaining: i32) -> Result<(), String> {
    match remaining {
        0 => Ok(()),
        r if r > 0 => Err(format!("{} has {} points left to spend", pool, r)),
        r => Err(format!("{} is overspent by {}", pool, -r)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{FreebieTarget, MeritPick, PriorityTier};
    use crate::catalog::{Ability, Attribute, Background, Sphere};

    #[test]
    fn phases_serialize_in_kebab_case() {
        let json = serde_json::to_string(&BuildPhase::AttributesPriority).unwrap();
        assert_eq!(json, r#""attributes-priority""#);
        assert_eq!(
            "abilities-assign".parse::<BuildPhase>().unwrap(),
            BuildPhase::AbilitiesAssign
        );
    }

    #[test]
    fn sequence_is_linear() {
        assert_eq!(BuildPhase::Basics.previous(), None);
        assert_eq!(BuildPhase::Complete.next(), None);
        assert_eq!(BuildPhase::Spheres.next(), Some(BuildPhase::Backgrounds));
        assert_eq!(BuildPhase::Spheres.previous(), Some(BuildPhase::AbilitiesAssign));
    }

    #[test]
    fn basics_needs_a_name() {
        let mut build = CharacterBuildState::new();
        build.identity_mut().name = "   ".to_string();
        assert!(build.advance().is_rejected());

        build.identity_mut().name = "Dante".to_string();
        assert!(build.advance().is_applied());
        assert_eq!(build.phase(), BuildPhase::AttributesPriority);
    }

    #[test]
    fn incomplete_priorities_keep_the_wizard_in_place() {
        let mut build = CharacterBuildState::new();
        build.identity_mut().name = "Dante".to_string();
        build.advance();

        build.set_attribute_priority(AttributeCategory::Physical, Some(PriorityTier::Primary));
        build.set_attribute_priority(AttributeCategory::Social, Some(PriorityTier::Secondary));

        let outcome = build.advance();
        assert!(matches!(
            outcome.rejection(),
            Some(Rejection::PhaseGate {
                phase: BuildPhase::AttributesPriority,
                ..
            })
        ));
        assert_eq!(build.phase(), BuildPhase::AttributesPriority);
    }

    #[test]
    fn retreat_keeps_downstream_values() {
        let mut build = CharacterBuildState::new();
        build.identity_mut().name = "Dante".to_string();
        build.advance();
        build.set_attribute_priority(AttributeCategory::Mental, Some(PriorityTier::Primary));

        assert!(build.retreat().is_applied());
        assert_eq!(build.phase(), BuildPhase::Basics);
        assert_eq!(
            build.attribute_priorities().tier(AttributeCategory::Mental),
            Some(PriorityTier::Primary)
        );
        assert_eq!(build.retreat().rejection(), Some(&Rejection::AtFirstPhase));
    }

    #[test]
    fn complete_has_no_exit() {
        let mut build = CharacterBuildState::new();
        build.phase = BuildPhase::Complete;
        assert!(!build.can_proceed());
        assert!(build.advance().is_rejected());
    }

    #[test]
    fn spheres_gate_rejects_an_affinity_the_sect_does_not_offer() {
        let mut build = CharacterBuildState::new();
        build.phase = BuildPhase::Spheres;
        build.choose_affinity_sphere(Sphere::Life);
        build.set_sphere(Sphere::Life, 3);
        build.set_sphere(Sphere::Mind, 3);
        assert!(build.can_proceed());

        build.identity_mut().sect = "Order of Hermes".to_string();
        assert!(!build.can_proceed());
    }

    /// Tries to leave `phase` and returns the gate's reason for refusing.
    fn held_at(build: &mut CharacterBuildState, phase: BuildPhase) -> String {
        build.phase = phase;
        let outcome = build.advance();
        assert_eq!(build.phase(), phase);
        match outcome.rejection() {
            Some(Rejection::PhaseGate { phase: held, reason }) if *held == phase => reason.clone(),
            other => panic!("expected the {phase} gate to hold, got {other:?}"),
        }
    }

    fn ranked_attributes() -> CharacterBuildState {
        let mut build = CharacterBuildState::new();
        build.set_attribute_priority(AttributeCategory::Physical, Some(PriorityTier::Primary));
        build.set_attribute_priority(AttributeCategory::Social, Some(PriorityTier::Secondary));
        build.set_attribute_priority(AttributeCategory::Mental, Some(PriorityTier::Tertiary));
        build
    }

    #[test]
    fn attributes_assign_holds_with_points_left() {
        let mut build = ranked_attributes();
        build.set_attribute(Attribute::Strength, 4);

        let reason = held_at(&mut build, BuildPhase::AttributesAssign);
        assert_eq!(reason, "Physical has 4 points left to spend");
    }

    #[test]
    fn attributes_assign_holds_when_a_swap_overspends() {
        let mut build = ranked_attributes();
        build.set_attribute(Attribute::Strength, 5);
        build.set_attribute(Attribute::Dexterity, 4);
        build.set_attribute(Attribute::Charisma, 6);
        build.set_attribute(Attribute::Wits, 4);
        build.phase = BuildPhase::AttributesAssign;
        assert!(build.can_proceed());

        build.set_attribute_priority(AttributeCategory::Mental, Some(PriorityTier::Primary));
        build.set_attribute_priority(AttributeCategory::Physical, Some(PriorityTier::Tertiary));

        let reason = held_at(&mut build, BuildPhase::AttributesAssign);
        assert_eq!(reason, "Physical is overspent by 4");
    }

    #[test]
    fn abilities_assign_holds_with_points_left() {
        let mut build = CharacterBuildState::new();
        build.set_ability_priority(AbilityCategory::Talents, Some(PriorityTier::Primary));
        build.set_ability_priority(AbilityCategory::Skills, Some(PriorityTier::Secondary));
        build.set_ability_priority(AbilityCategory::Knowledges, Some(PriorityTier::Tertiary));
        build.set_ability(Ability::Awareness, 3);

        let reason = held_at(&mut build, BuildPhase::AbilitiesAssign);
        assert_eq!(reason, "Talents has 10 points left to spend");
    }

    #[test]
    fn spheres_gate_holds_without_an_affinity() {
        let mut build = CharacterBuildState::new();
        build.set_sphere(Sphere::Forces, 3);
        build.set_sphere(Sphere::Prime, 3);
        assert_eq!(build.sphere_remaining(), 0);

        let reason = held_at(&mut build, BuildPhase::Spheres);
        assert_eq!(reason, "choose an affinity sphere");
    }

    #[test]
    fn backgrounds_gate_holds_below_seven_dots() {
        let mut build = CharacterBuildState::new();
        build.set_background(Background::Avatar, 3);
        build.set_background(Background::Library, 2);

        let reason = held_at(&mut build, BuildPhase::Backgrounds);
        assert_eq!(reason, "Backgrounds has 2 points left to spend");
    }

    #[test]
    fn freebies_gate_holds_with_points_left() {
        let mut build = CharacterBuildState::new();
        build.add_freebie_dot(FreebieTarget::Arete);
        build.add_freebie_dot(FreebieTarget::Arete);

        let reason = held_at(&mut build, BuildPhase::Freebies);
        assert_eq!(reason, "Freebie points has 7 points left to spend");
    }

    #[test]
    fn full_walkthrough_reaches_complete() {
        let mut build = CharacterBuildState::new();
        build.identity_mut().name = "Dante".to_string();
        build.identity_mut().sect = "Virtual Adepts".to_string();
        assert!(build.advance().is_applied());

        build.set_attribute_priority(AttributeCategory::Mental, Some(PriorityTier::Primary));
        build.set_attribute_priority(AttributeCategory::Physical, Some(PriorityTier::Secondary));
        build.set_attribute_priority(AttributeCategory::Social, Some(PriorityTier::Tertiary));
        assert!(build.advance().is_applied());

        build.set_attribute(Attribute::Intelligence, 4);
        build.set_attribute(Attribute::Wits, 4);
        build.set_attribute(Attribute::Perception, 2);
        build.set_attribute(Attribute::Dexterity, 3);
        build.set_attribute(Attribute::Stamina, 4);
        build.set_attribute(Attribute::Charisma, 2);
        build.set_attribute(Attribute::Manipulation, 3);
        assert!(build.advance().is_applied(), "{:?}", build.phase_gate());

        build.set_ability_priority(AbilityCategory::Knowledges, Some(PriorityTier::Primary));
        build.set_ability_priority(AbilityCategory::Skills, Some(PriorityTier::Secondary));
        build.set_ability_priority(AbilityCategory::Talents, Some(PriorityTier::Tertiary));
        assert!(build.advance().is_applied());

        for ability in [Ability::Computer, Ability::Science, Ability::Enigmas, Ability::Academics] {
            build.set_ability(ability, 3);
        }
        build.set_ability(Ability::Occult, 1);
        for ability in [Ability::Technology, Ability::Research, Ability::Stealth] {
            build.set_ability(ability, 3);
        }
        build.set_ability(Ability::Awareness, 3);
        build.set_ability(Ability::Subterfuge, 2);
        assert!(build.advance().is_applied(), "{:?}", build.phase_gate());

        assert!(build.choose_affinity_sphere(Sphere::Correspondence).is_applied());
        build.set_sphere(Sphere::Correspondence, 3);
        build.set_sphere(Sphere::Forces, 2);
        build.set_sphere(Sphere::Mind, 1);
        assert!(build.advance().is_applied(), "{:?}", build.phase_gate());

        build.set_background(Background::Avatar, 2);
        build.set_background(Background::Arcane, 2);
        build.set_background(Background::Resources, 3);
        assert!(build.advance().is_applied(), "{:?}", build.phase_gate());

        build.add_flaw(MeritPick::new("flaw-1", "Echoes", 2));
        build.add_freebie_dot(FreebieTarget::Arete);
        build.add_freebie_dot(FreebieTarget::Sphere(Sphere::Forces));
        build.add_freebie_dot(FreebieTarget::Ability(Ability::Computer));
        build.add_freebie_dot(FreebieTarget::Ability(Ability::Computer));
        build.add_freebie_dot(FreebieTarget::Willpower);
        build.add_freebie_dot(FreebieTarget::Willpower);
        assert_eq!(build.remaining_freebies(), 0);
        assert!(build.advance().is_applied(), "{:?}", build.phase_gate());

        assert!(build.is_complete());
        assert!(build.validate().is_ok());
    }
}
