//! Serializable build commands and the reducer that applies them.

use serde::{Deserialize, Serialize};

use crate::catalog::{Ability, AbilityCategory, Attribute, AttributeCategory, Background, Sphere};

use super::freebies::{FreebieTarget, MeritPick};
use super::outcome::AllocationOutcome;
use super::priority::PriorityTier;
use super::state::{BuildIdentity, CharacterBuildState};

/// One user action in the creation wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BuildCommand {
    /// Discard the build and start over.
    Reset,
    SetIdentity {
        identity: BuildIdentity,
    },
    SetAttributePriority {
        category: AttributeCategory,
        tier: Option<PriorityTier>,
    },
    SetAbilityPriority {
        category: AbilityCategory,
        tier: Option<PriorityTier>,
    },
    SetAttribute {
        attribute: Attribute,
        value: u8,
    },
    SetAbility {
        ability: Ability,
        value: u8,
    },
    SetSphere {
        sphere: Sphere,
        value: u8,
    },
    ChooseAffinitySphere {
        sphere: Sphere,
    },
    SetBackground {
        background: Background,
        value: u8,
    },
    AddFreebieDot {
        target: FreebieTarget,
    },
    RemoveFreebieDot {
        target: FreebieTarget,
    },
    AddMerit {
        merit: MeritPick,
    },
    RemoveMerit {
        id: String,
    },
    AddFlaw {
        flaw: MeritPick,
    },
    RemoveFlaw {
        id: String,
    },
    SetSpecialty {
        ability: Ability,
        specialty: String,
    },
    Advance,
    Retreat,
}

impl CharacterBuildState {
    /// Applies a single command.
    pub fn apply(&mut self, command: BuildCommand) -> AllocationOutcome {
        match command {
            BuildCommand::Reset => {
                *self = CharacterBuildState::new();
                AllocationOutcome::Applied
            }
            BuildCommand::SetIdentity { identity } => {
                self.identity = identity;
                AllocationOutcome::Applied
            }
            BuildCommand::SetAttributePriority { category, tier } => {
                self.set_attribute_priority(category, tier)
            }
            BuildCommand::SetAbilityPriority { category, tier } => {
                self.set_ability_priority(category, tier)
            }
            BuildCommand::SetAttribute { attribute, value } => self.set_attribute(attribute, value),
            BuildCommand::SetAbility { ability, value } => self.set_ability(ability, value),
            BuildCommand::SetSphere { sphere, value } => self.set_sphere(sphere, value),
            BuildCommand::ChooseAffinitySphere { sphere } => self.choose_affinity_sphere(sphere),
            BuildCommand::SetBackground { background, value } => {
                self.set_background(background, value)
            }
            BuildCommand::AddFreebieDot { target } => self.add_freebie_dot(target),
            BuildCommand::RemoveFreebieDot { target } => self.remove_freebie_dot(target),
            BuildCommand::AddMerit { merit } => self.add_merit(merit),
            BuildCommand::RemoveMerit { id } => self.remove_merit(&id),
            BuildCommand::AddFlaw { flaw } => self.add_flaw(flaw),
            BuildCommand::RemoveFlaw { id } => self.remove_flaw(&id),
            BuildCommand::SetSpecialty { ability, specialty } => {
                self.set_specialty(ability, &specialty)
            }
            BuildCommand::Advance => self.advance(),
            BuildCommand::Retreat => self.retreat(),
        }
    }
}
