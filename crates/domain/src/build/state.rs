//! The character build: every pool and assignment threaded through the
//! creation wizard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    Ability, AbilityCategory, Attribute, AttributeCategory, Background, Sphere, Tradition,
};
use crate::error::DomainError;

use super::freebies::{total_cost, FreebieDots, FreebieTarget, MeritPick};
use super::priority::{PriorityAssignment, PriorityGroup, PriorityTier};
use super::{
    BuildPhase, ATTRIBUTE_BASE, BACKGROUND_MAX, BACKGROUND_POINTS, BASE_ABILITY_MAX, BASE_ARETE,
    BASE_SPHERE_MAX, BASE_WILLPOWER, CREATION_ARETE_MAX, FLAW_CAP, FREEBIE_POINTS,
    SPHERE_POINTS, TRAIT_MAX, WILLPOWER_MAX,
};

/// Free-text identity fields. None of them carry rules except `name`, which
/// gates the basics phase, and `sect`, which restricts the affinity sphere
/// when it names a known Tradition or Convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildIdentity {
    pub name: String,
    pub player: String,
    pub chronicle: String,
    pub nature: String,
    pub demeanor: String,
    pub essence: String,
    pub affiliation: String,
    pub sect: String,
    pub concept: String,
}

/// In-progress character build.
///
/// Created fresh per wizard session and mutated only through the allocator
/// operations, each of which returns an
/// [`AllocationOutcome`](super::AllocationOutcome).
///
/// # Invariants
///
/// - Attributes never drop below 1; abilities and spheres never exceed 3
///   before freebies.
/// - Sphere dots total at most 6; background dots total at most 7.
/// - The affinity sphere, once chosen, holds at least one dot.
/// - Remaining freebie points never go negative; flaws total at most 7.
///
/// Category spend can exceed its budget after a priority swap. The phase
/// gate catches that before the wizard moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBuildState {
    #[serde(default)]
    pub(super) identity: BuildIdentity,
    #[serde(default)]
    pub(super) phase: BuildPhase,
    #[serde(default)]
    pub(super) attribute_priorities: PriorityAssignment<AttributeCategory>,
    #[serde(default)]
    pub(super) attributes: BTreeMap<Attribute, u8>,
    #[serde(default)]
    pub(super) ability_priorities: PriorityAssignment<AbilityCategory>,
    #[serde(default)]
    pub(super) abilities: BTreeMap<Ability, u8>,
    #[serde(default)]
    pub(super) spheres: BTreeMap<Sphere, u8>,
    #[serde(default)]
    pub(super) affinity_sphere: Option<Sphere>,
    #[serde(default)]
    pub(super) backgrounds: BTreeMap<Background, u8>,
    #[serde(default)]
    pub(super) freebie_dots: FreebieDots,
    #[serde(default)]
    pub(super) specialties: BTreeMap<Ability, String>,
    #[serde(default)]
    pub(super) merits: Vec<MeritPick>,
    #[serde(default)]
    pub(super) flaws: Vec<MeritPick>,
}

impl Default for CharacterBuildState {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterBuildState {
    /// A blank build at the basics phase with every attribute at 1.
    pub fn new() -> Self {
        Self {
            identity: BuildIdentity::default(),
            phase: BuildPhase::Basics,
            attribute_priorities: PriorityAssignment::new(),
            attributes: Attribute::ALL
                .iter()
                .map(|attribute| (*attribute, ATTRIBUTE_BASE))
                .collect(),
            ability_priorities: PriorityAssignment::new(),
            abilities: BTreeMap::new(),
            spheres: BTreeMap::new(),
            affinity_sphere: None,
            backgrounds: BTreeMap::new(),
            freebie_dots: FreebieDots::default(),
            specialties: BTreeMap::new(),
            merits: Vec::new(),
            flaws: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn identity(&self) -> &BuildIdentity {
        &self.identity
    }

    /// Identity fields carry no allocation rules and may be edited freely.
    pub fn identity_mut(&mut self) -> &mut BuildIdentity {
        &mut self.identity
    }

    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    pub fn attribute_priorities(&self) -> &PriorityAssignment<AttributeCategory> {
        &self.attribute_priorities
    }

    pub fn ability_priorities(&self) -> &PriorityAssignment<AbilityCategory> {
        &self.ability_priorities
    }

    pub fn attribute(&self, attribute: Attribute) -> u8 {
        self.attributes
            .get(&attribute)
            .copied()
            .unwrap_or(ATTRIBUTE_BASE)
    }

    pub fn ability(&self, ability: Ability) -> u8 {
        self.abilities.get(&ability).copied().unwrap_or(0)
    }

    pub fn sphere(&self, sphere: Sphere) -> u8 {
        self.spheres.get(&sphere).copied().unwrap_or(0)
    }

    pub fn affinity_sphere(&self) -> Option<Sphere> {
        self.affinity_sphere
    }

    pub fn background(&self, background: Background) -> u8 {
        self.backgrounds.get(&background).copied().unwrap_or(0)
    }

    /// Backgrounds with at least one dot.
    pub fn backgrounds(&self) -> &BTreeMap<Background, u8> {
        &self.backgrounds
    }

    pub fn freebie_dots(&self) -> &FreebieDots {
        &self.freebie_dots
    }

    pub fn specialty(&self, ability: Ability) -> Option<&str> {
        self.specialties.get(&ability).map(String::as_str)
    }

    pub fn merits(&self) -> &[MeritPick] {
        &self.merits
    }

    pub fn flaws(&self) -> &[MeritPick] {
        &self.flaws
    }

    /// The Tradition or Convention named by `sect`, if it is a known one.
    pub fn tradition(&self) -> Option<Tradition> {
        self.identity.sect.parse().ok()
    }

    // =========================================================================
    // Totals (base + freebie)
    // =========================================================================

    // Totals saturate at u8::MAX so a posted build with huge counters reads
    // as over the ceiling instead of wrapping.

    pub fn total_attribute(&self, attribute: Attribute) -> u8 {
        self.attribute(attribute)
            .saturating_add(self.freebie_dots.dots(FreebieTarget::Attribute(attribute)))
    }

    pub fn total_ability(&self, ability: Ability) -> u8 {
        self.ability(ability)
            .saturating_add(self.freebie_dots.dots(FreebieTarget::Ability(ability)))
    }

    pub fn total_sphere(&self, sphere: Sphere) -> u8 {
        self.sphere(sphere)
            .saturating_add(self.freebie_dots.dots(FreebieTarget::Sphere(sphere)))
    }

    pub fn total_background(&self, background: Background) -> u8 {
        self.background(background)
            .saturating_add(self.freebie_dots.dots(FreebieTarget::Background(background)))
    }

    pub fn total_arete(&self) -> u8 {
        BASE_ARETE.saturating_add(self.freebie_dots.arete)
    }

    pub fn total_willpower(&self) -> u8 {
        BASE_WILLPOWER.saturating_add(self.freebie_dots.willpower)
    }

    /// Total rating of a freebie target, base included.
    pub fn total(&self, target: FreebieTarget) -> u8 {
        match target {
            FreebieTarget::Attribute(a) => self.total_attribute(a),
            FreebieTarget::Ability(a) => self.total_ability(a),
            FreebieTarget::Sphere(s) => self.total_sphere(s),
            FreebieTarget::Background(b) => self.total_background(b),
            FreebieTarget::Arete => self.total_arete(),
            FreebieTarget::Willpower => self.total_willpower(),
        }
    }

    /// Highest total a freebie dot may raise `target` to.
    pub fn freebie_ceiling(target: FreebieTarget) -> u8 {
        match target {
            FreebieTarget::Arete => CREATION_ARETE_MAX,
            FreebieTarget::Willpower => WILLPOWER_MAX,
            _ => TRAIT_MAX,
        }
    }

    // =========================================================================
    // Budgets
    // =========================================================================

    /// Dots spent above the starting 1 in an attribute category.
    pub fn attribute_spent(&self, category: AttributeCategory) -> i32 {
        category
            .members()
            .map(|attribute| i32::from(self.attribute(attribute)) - i32::from(ATTRIBUTE_BASE))
            .sum()
    }

    /// Budget left in an attribute category. Negative after a priority swap
    /// leaves the category overspent.
    pub fn attribute_remaining(&self, category: AttributeCategory) -> i32 {
        i32::from(self.attribute_priorities.budget(category)) - self.attribute_spent(category)
    }

    pub fn ability_spent(&self, category: AbilityCategory) -> i32 {
        category
            .members()
            .map(|ability| i32::from(self.ability(ability)))
            .sum()
    }

    pub fn ability_remaining(&self, category: AbilityCategory) -> i32 {
        i32::from(self.ability_priorities.budget(category)) - self.ability_spent(category)
    }

    pub fn sphere_spent(&self) -> i32 {
        self.spheres.values().map(|dots| i32::from(*dots)).sum()
    }

    pub fn sphere_remaining(&self) -> i32 {
        i32::from(SPHERE_POINTS) - self.sphere_spent()
    }

    pub fn background_spent(&self) -> i32 {
        self.backgrounds.values().map(|dots| i32::from(*dots)).sum()
    }

    pub fn background_remaining(&self) -> i32 {
        i32::from(BACKGROUND_POINTS) - self.background_spent()
    }

    pub fn merit_total(&self) -> u32 {
        total_cost(&self.merits)
    }

    pub fn flaw_total(&self) -> u32 {
        total_cost(&self.flaws)
    }

    /// Net freebie spend: dots bought plus merits, minus flaws.
    pub fn freebie_spend(&self) -> i32 {
        let merits = i32::try_from(self.merit_total()).unwrap_or(i32::MAX);
        let flaws = i32::try_from(self.flaw_total()).unwrap_or(i32::MAX);
        self.freebie_dots
            .spend()
            .saturating_add(merits)
            .saturating_sub(flaws)
    }

    /// Freebie points left, recomputed from the full ledger on every call.
    ///
    /// Exceeds 15 when flaws outweigh everything bought.
    pub fn remaining_freebies(&self) -> i32 {
        i32::from(FREEBIE_POINTS).saturating_sub(self.freebie_spend())
    }

    /// Abilities rated 4 or more without a specialty. Advisory only.
    pub fn abilities_needing_specialty(&self) -> Vec<Ability> {
        Ability::ALL
            .iter()
            .copied()
            .filter(|ability| self.total_ability(*ability) >= 4)
            .filter(|ability| !self.specialties.contains_key(ability))
            .collect()
    }

    // =========================================================================
    // Validation of untrusted builds
    // =========================================================================

    /// Checks the per-trait bounds and pool limits of a build that did not
    /// come through the allocator, such as one posted by a client. A build
    /// marked complete must also pass every phase gate, category budgets
    /// included.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first violated rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.attribute_priorities.is_consistent() {
            return Err(DomainError::validation(
                "Attribute priorities assign a tier twice",
            ));
        }
        if !self.ability_priorities.is_consistent() {
            return Err(DomainError::validation(
                "Ability priorities assign a tier twice",
            ));
        }

        if let Some((attribute, _)) = self.attributes.iter().find(|(_, v)| **v < ATTRIBUTE_BASE) {
            return Err(DomainError::validation(format!(
                "{} cannot be below {}",
                attribute, ATTRIBUTE_BASE
            )));
        }
        let attribute_max = ATTRIBUTE_BASE
            .saturating_add(AttributeCategory::tier_points(PriorityTier::Primary));
        if let Some((attribute, _)) = self.attributes.iter().find(|(_, v)| **v > attribute_max) {
            return Err(DomainError::validation(format!(
                "{} cannot exceed {} before freebies",
                attribute, attribute_max
            )));
        }
        if let Some((ability, _)) = self.abilities.iter().find(|(_, v)| **v > BASE_ABILITY_MAX) {
            return Err(DomainError::validation(format!(
                "{} cannot exceed {} before freebies",
                ability, BASE_ABILITY_MAX
            )));
        }
        if let Some((sphere, _)) = self.spheres.iter().find(|(_, v)| **v > BASE_SPHERE_MAX) {
            return Err(DomainError::validation(format!(
                "{} cannot exceed {} before freebies",
                sphere, BASE_SPHERE_MAX
            )));
        }
        if self.sphere_remaining() < 0 {
            return Err(DomainError::validation(format!(
                "Spheres total more than {} dots",
                SPHERE_POINTS
            )));
        }
        if let Some(affinity) = self.affinity_sphere {
            if self.sphere(affinity) < 1 {
                return Err(DomainError::validation(format!(
                    "Affinity sphere {} needs at least one dot",
                    affinity
                )));
            }
        }
        if let Some((background, _)) = self.backgrounds.iter().find(|(_, v)| **v > BACKGROUND_MAX)
        {
            return Err(DomainError::validation(format!(
                "{} cannot exceed {}",
                background, BACKGROUND_MAX
            )));
        }
        if self.background_remaining() < 0 {
            return Err(DomainError::validation(format!(
                "Backgrounds total more than {} dots",
                BACKGROUND_POINTS
            )));
        }
        if let Some((target, _)) = self
            .freebie_dots
            .entries()
            .find(|(target, dots)| *dots > Self::freebie_ceiling(*target))
        {
            return Err(DomainError::validation(format!(
                "Too many freebie dots on {}",
                target.name()
            )));
        }
        if let Some((target, _)) = self
            .freebie_dots
            .entries()
            .find(|(target, _)| self.total(*target) > Self::freebie_ceiling(*target))
        {
            return Err(DomainError::validation(format!(
                "Freebie dots raise {} above {}",
                target.name(),
                Self::freebie_ceiling(target)
            )));
        }
        if self.merits.iter().chain(&self.flaws).any(|pick| pick.cost == 0) {
            return Err(DomainError::validation("Merit and flaw costs must be at least 1"));
        }
        if self.flaw_total() > u32::from(FLAW_CAP) {
            return Err(DomainError::validation(format!(
                "Flaws total more than {} points",
                FLAW_CAP
            )));
        }
        if self.remaining_freebies() < 0 {
            return Err(DomainError::validation("Freebie points are overspent"));
        }
        if self.phase == BuildPhase::Complete {
            self.check_cleared_gates()?;
        }
        Ok(())
    }
}
