//! Point-allocation rules.
//!
//! Each operation validates against the current build and either applies the
//! change in full or returns the reason it was refused. A rejected operation
//! never touches the build.

use crate::catalog::{Ability, AbilityCategory, Attribute, AttributeCategory, Background, Sphere};

use super::freebies::{FreebieTarget, MeritPick};
use super::outcome::{AllocationOutcome, PointPool, Rejection};
use super::priority::PriorityTier;
use super::state::CharacterBuildState;
use super::{
    ATTRIBUTE_BASE, BACKGROUND_MAX, BASE_ABILITY_MAX, BASE_SPHERE_MAX, FLAW_CAP, TRAIT_MAX,
};

impl CharacterBuildState {
    // =========================================================================
    // Priorities
    // =========================================================================

    /// Ranks an attribute category. Any other category holding `tier` loses it.
    pub fn set_attribute_priority(
        &mut self,
        category: AttributeCategory,
        tier: Option<PriorityTier>,
    ) -> AllocationOutcome {
        self.attribute_priorities.assign(category, tier);
        AllocationOutcome::Applied
    }

    /// Ranks an ability category. Any other category holding `tier` loses it.
    pub fn set_ability_priority(
        &mut self,
        category: AbilityCategory,
        tier: Option<PriorityTier>,
    ) -> AllocationOutcome {
        self.ability_priorities.assign(category, tier);
        AllocationOutcome::Applied
    }

    // =========================================================================
    // Base pools
    // =========================================================================

    /// Sets an attribute to `value`, paid from its category's priority budget.
    pub fn set_attribute(&mut self, attribute: Attribute, value: u8) -> AllocationOutcome {
        self.try_set_attribute(attribute, value).into()
    }

    fn try_set_attribute(&mut self, attribute: Attribute, value: u8) -> Result<(), Rejection> {
        if value < ATTRIBUTE_BASE {
            return Err(Rejection::BelowMinimum {
                name: attribute.name(),
                minimum: ATTRIBUTE_BASE,
            });
        }
        let category = attribute.category();
        check_pool(
            PointPool::Attributes(category),
            value,
            self.attribute(attribute),
            self.attribute_remaining(category),
        )?;
        self.check_freebie_headroom(FreebieTarget::Attribute(attribute), value)?;

        self.attributes.insert(attribute, value);
        Ok(())
    }

    /// Sets an ability to `value` (0 to 3), paid from its category's budget.
    pub fn set_ability(&mut self, ability: Ability, value: u8) -> AllocationOutcome {
        self.try_set_ability(ability, value).into()
    }

    fn try_set_ability(&mut self, ability: Ability, value: u8) -> Result<(), Rejection> {
        if value > BASE_ABILITY_MAX {
            return Err(Rejection::AboveMaximum {
                name: ability.name(),
                maximum: BASE_ABILITY_MAX,
            });
        }
        let category = ability.category();
        check_pool(
            PointPool::Abilities(category),
            value,
            self.ability(ability),
            self.ability_remaining(category),
        )?;
        self.check_freebie_headroom(FreebieTarget::Ability(ability), value)?;

        put_sparse(&mut self.abilities, ability, value);
        Ok(())
    }

    /// Sets a sphere to `value` (0 to 3). The affinity sphere keeps one dot.
    pub fn set_sphere(&mut self, sphere: Sphere, value: u8) -> AllocationOutcome {
        self.try_set_sphere(sphere, value).into()
    }

    fn try_set_sphere(&mut self, sphere: Sphere, value: u8) -> Result<(), Rejection> {
        if value > BASE_SPHERE_MAX {
            return Err(Rejection::AboveMaximum {
                name: sphere.name(),
                maximum: BASE_SPHERE_MAX,
            });
        }
        if value < 1 && self.affinity_sphere == Some(sphere) {
            return Err(Rejection::AffinitySphereFloor { sphere });
        }
        check_pool(
            PointPool::Spheres,
            value,
            self.sphere(sphere),
            self.sphere_remaining(),
        )?;
        self.check_freebie_headroom(FreebieTarget::Sphere(sphere), value)?;

        put_sparse(&mut self.spheres, sphere, value);
        Ok(())
    }

    /// Designates the affinity sphere.
    ///
    /// When `sect` names a known Tradition or Convention the sphere must be
    /// one of its options. A sphere still at 0 receives its first dot from
    /// the sphere pool. The previous affinity keeps its dots.
    pub fn choose_affinity_sphere(&mut self, sphere: Sphere) -> AllocationOutcome {
        self.try_choose_affinity_sphere(sphere).into()
    }

    fn try_choose_affinity_sphere(&mut self, sphere: Sphere) -> Result<(), Rejection> {
        if let Some(tradition) = self.tradition() {
            if !tradition.offers_affinity(sphere) {
                return Err(Rejection::AffinityNotOffered { sphere, tradition });
            }
        }
        if self.sphere(sphere) == 0 {
            check_pool(PointPool::Spheres, 1, 0, self.sphere_remaining())?;
            self.check_freebie_headroom(FreebieTarget::Sphere(sphere), 1)?;
            self.spheres.insert(sphere, 1);
        }
        self.affinity_sphere = Some(sphere);
        Ok(())
    }

    /// Sets a background to `value` (0 to 5). Zero removes it from the sheet.
    pub fn set_background(&mut self, background: Background, value: u8) -> AllocationOutcome {
        self.try_set_background(background, value).into()
    }

    fn try_set_background(&mut self, background: Background, value: u8) -> Result<(), Rejection> {
        if value > BACKGROUND_MAX {
            return Err(Rejection::AboveMaximum {
                name: background.name(),
                maximum: BACKGROUND_MAX,
            });
        }
        check_pool(
            PointPool::Backgrounds,
            value,
            self.background(background),
            self.background_remaining(),
        )?;
        self.check_freebie_headroom(FreebieTarget::Background(background), value)?;

        put_sparse(&mut self.backgrounds, background, value);
        Ok(())
    }

    // =========================================================================
    // Freebies
    // =========================================================================

    /// Buys one freebie dot on `target` at its category's price.
    pub fn add_freebie_dot(&mut self, target: FreebieTarget) -> AllocationOutcome {
        self.try_add_freebie_dot(target).into()
    }

    fn try_add_freebie_dot(&mut self, target: FreebieTarget) -> Result<(), Rejection> {
        let ceiling = Self::freebie_ceiling(target);
        if self.total(target) >= ceiling {
            return Err(Rejection::AboveMaximum {
                name: target.name(),
                maximum: ceiling,
            });
        }
        let remaining = self.remaining_freebies();
        if remaining < target.cost() {
            return Err(Rejection::InsufficientFreebies {
                needed: target.cost(),
                remaining,
            });
        }

        let dots = self.freebie_dots.dots(target);
        self.freebie_dots.set_dots(target, dots.saturating_add(1));
        Ok(())
    }

    /// Refunds one freebie dot from `target`.
    pub fn remove_freebie_dot(&mut self, target: FreebieTarget) -> AllocationOutcome {
        self.try_remove_freebie_dot(target).into()
    }

    fn try_remove_freebie_dot(&mut self, target: FreebieTarget) -> Result<(), Rejection> {
        let dots = self.freebie_dots.dots(target);
        if dots == 0 {
            return Err(Rejection::NothingToRemove {
                name: target.name(),
            });
        }
        self.freebie_dots.set_dots(target, dots - 1);
        Ok(())
    }

    // =========================================================================
    // Merits and flaws
    // =========================================================================

    /// Takes a merit, paying its cost from the freebie pool.
    pub fn add_merit(&mut self, merit: MeritPick) -> AllocationOutcome {
        self.try_add_merit(merit).into()
    }

    fn try_add_merit(&mut self, merit: MeritPick) -> Result<(), Rejection> {
        self.check_new_pick(&merit)?;
        let needed = i32::from(merit.cost);
        let remaining = self.remaining_freebies();
        if remaining < needed {
            return Err(Rejection::InsufficientFreebies { needed, remaining });
        }
        self.merits.push(merit);
        Ok(())
    }

    /// Drops a merit and refunds its cost.
    pub fn remove_merit(&mut self, id: &str) -> AllocationOutcome {
        match self.merits.iter().position(|pick| pick.id == id) {
            Some(index) => {
                self.merits.remove(index);
                AllocationOutcome::Applied
            }
            None => AllocationOutcome::rejected(Rejection::NotPresent { id: id.to_string() }),
        }
    }

    /// Takes a flaw, returning its cost to the freebie pool.
    pub fn add_flaw(&mut self, flaw: MeritPick) -> AllocationOutcome {
        self.try_add_flaw(flaw).into()
    }

    fn try_add_flaw(&mut self, flaw: MeritPick) -> Result<(), Rejection> {
        self.check_new_pick(&flaw)?;
        let attempted = self.flaw_total() + u32::from(flaw.cost);
        if attempted > u32::from(FLAW_CAP) {
            return Err(Rejection::FlawCapExceeded {
                attempted,
                cap: FLAW_CAP,
            });
        }
        self.flaws.push(flaw);
        Ok(())
    }

    /// Drops a flaw. Refused when points it granted are already spent.
    pub fn remove_flaw(&mut self, id: &str) -> AllocationOutcome {
        self.try_remove_flaw(id).into()
    }

    fn try_remove_flaw(&mut self, id: &str) -> Result<(), Rejection> {
        let index = self
            .flaws
            .iter()
            .position(|pick| pick.id == id)
            .ok_or_else(|| Rejection::NotPresent { id: id.to_string() })?;

        let needed = i32::from(self.flaws[index].cost);
        let remaining = self.remaining_freebies();
        if remaining < needed {
            return Err(Rejection::InsufficientFreebies { needed, remaining });
        }
        self.flaws.remove(index);
        Ok(())
    }

    /// Records a specialty. Blank text clears it.
    pub fn set_specialty(&mut self, ability: Ability, specialty: &str) -> AllocationOutcome {
        let specialty = specialty.trim();
        if specialty.is_empty() {
            self.specialties.remove(&ability);
        } else {
            self.specialties.insert(ability, specialty.to_string());
        }
        AllocationOutcome::Applied
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn check_new_pick(&self, pick: &MeritPick) -> Result<(), Rejection> {
        if pick.cost == 0 {
            return Err(Rejection::InvalidCost);
        }
        if self
            .merits
            .iter()
            .chain(&self.flaws)
            .any(|taken| taken.id == pick.id)
        {
            return Err(Rejection::Duplicate {
                id: pick.id.clone(),
            });
        }
        Ok(())
    }

    /// Keeps a trait that already carries freebie dots within the freebie
    /// ceiling when its base rating moves.
    fn check_freebie_headroom(&self, target: FreebieTarget, base: u8) -> Result<(), Rejection> {
        let dots = self.freebie_dots.dots(target);
        if dots > 0 && u16::from(base) + u16::from(dots) > u16::from(TRAIT_MAX) {
            return Err(Rejection::AboveMaximum {
                name: target.name(),
                maximum: TRAIT_MAX,
            });
        }
        Ok(())
    }
}

/// Rejects a raise that costs more than the pool has left. Lowering is free.
fn check_pool(pool: PointPool, value: u8, current: u8, remaining: i32) -> Result<(), Rejection> {
    let needed = i32::from(value) - i32::from(current);
    if needed > 0 && needed > remaining {
        return Err(Rejection::InsufficientPoints {
            pool,
            needed,
            remaining,
        });
    }
    Ok(())
}

fn put_sparse<K: Ord>(map: &mut std::collections::BTreeMap<K, u8>, key: K, value: u8) {
    if value == 0 {
        map.remove(&key);
    } else {
        map.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked_build() -> CharacterBuildState {
        let mut build = CharacterBuildState::new();
        build.set_attribute_priority(AttributeCategory::Physical, Some(PriorityTier::Primary));
        build.set_attribute_priority(AttributeCategory::Social, Some(PriorityTier::Secondary));
        build.set_attribute_priority(AttributeCategory::Mental, Some(PriorityTier::Tertiary));
        build.set_ability_priority(AbilityCategory::Knowledges, Some(PriorityTier::Primary));
        build.set_ability_priority(AbilityCategory::Talents, Some(PriorityTier::Secondary));
        build.set_ability_priority(AbilityCategory::Skills, Some(PriorityTier::Tertiary));
        build
    }

    mod attributes {
        use super::*;

        #[test]
        fn physical_primary_scenario_exhausts_the_budget() {
            let mut build = ranked_build();

            assert!(build.set_attribute(Attribute::Strength, 6).is_applied());
            assert_eq!(build.attribute_remaining(AttributeCategory::Physical), 2);

            assert!(build.set_attribute(Attribute::Dexterity, 3).is_applied());
            assert_eq!(build.attribute_remaining(AttributeCategory::Physical), 0);

            let outcome = build.set_attribute(Attribute::Stamina, 2);
            assert_eq!(
                outcome.rejection(),
                Some(&Rejection::InsufficientPoints {
                    pool: PointPool::Attributes(AttributeCategory::Physical),
                    needed: 1,
                    remaining: 0,
                })
            );
            assert_eq!(build.attribute(Attribute::Stamina), 1);
        }

        #[test]
        fn category_spend_never_exceeds_the_tier() {
            let mut build = ranked_build();
            let attempts = [
                (Attribute::Charisma, 3),
                (Attribute::Manipulation, 4),
                (Attribute::Appearance, 2),
                (Attribute::Charisma, 1),
                (Attribute::Manipulation, 5),
                (Attribute::Appearance, 3),
                (Attribute::Charisma, 4),
            ];

            for (attribute, value) in attempts {
                let before = build.clone();
                let outcome = build.set_attribute(attribute, value);
                assert!(build.attribute_spent(AttributeCategory::Social) <= 5);
                if outcome.is_rejected() {
                    assert_eq!(build, before);
                }
            }
        }

        #[test]
        fn unranked_category_cannot_be_raised() {
            let mut build = CharacterBuildState::new();
            assert!(build.set_attribute(Attribute::Wits, 2).is_rejected());
        }

        #[test]
        fn attributes_cannot_drop_below_one() {
            let mut build = ranked_build();
            assert_eq!(
                build.set_attribute(Attribute::Wits, 0).rejection(),
                Some(&Rejection::BelowMinimum {
                    name: "Wits",
                    minimum: 1
                })
            );
        }

        #[test]
        fn lowering_is_allowed_after_a_priority_swap_overspends() {
            let mut build = ranked_build();
            build.set_attribute(Attribute::Strength, 8);
            build.set_attribute_priority(AttributeCategory::Mental, Some(PriorityTier::Primary));
            assert_eq!(build.attribute_remaining(AttributeCategory::Physical), -7);

            assert!(build.set_attribute(Attribute::Strength, 5).is_applied());
            assert!(build.set_attribute(Attribute::Strength, 6).is_rejected());
        }
    }

    mod abilities {
        use super::*;

        #[test]
        fn abilities_cap_at_three_before_freebies() {
            let mut build = ranked_build();
            assert!(build.set_ability(Ability::Occult, 3).is_applied());
            assert!(build.set_ability(Ability::Occult, 4).is_rejected());
            assert_eq!(build.ability(Ability::Occult), 3);
        }

        #[test]
        fn skills_spend_the_tertiary_budget() {
            let mut build = ranked_build();
            assert!(build.set_ability(Ability::Stealth, 3).is_applied());
            assert!(build.set_ability(Ability::Drive, 2).is_applied());
            assert!(build.set_ability(Ability::Melee, 1).is_rejected());
            assert_eq!(build.ability_remaining(AbilityCategory::Skills), 0);
        }

        #[test]
        fn zero_removes_the_entry() {
            let mut build = ranked_build();
            build.set_ability(Ability::Art, 2);
            build.set_ability(Ability::Art, 0);
            assert!(build.abilities.is_empty());
        }
    }

    mod spheres {
        use super::*;

        #[test]
        fn sphere_values_and_total_are_capped() {
            let mut build = CharacterBuildState::new();
            assert!(build.set_sphere(Sphere::Forces, 4).is_rejected());
            assert!(build.set_sphere(Sphere::Forces, 3).is_applied());
            assert!(build.set_sphere(Sphere::Prime, 3).is_applied());
            assert!(build.set_sphere(Sphere::Mind, 1).is_rejected());
            assert_eq!(build.sphere_spent(), 6);
        }

        #[test]
        fn affinity_sphere_keeps_one_dot() {
            let mut build = CharacterBuildState::new();
            assert!(build.choose_affinity_sphere(Sphere::Forces).is_applied());
            assert_eq!(build.sphere(Sphere::Forces), 1);

            assert_eq!(
                build.set_sphere(Sphere::Forces, 0).rejection(),
                Some(&Rejection::AffinitySphereFloor {
                    sphere: Sphere::Forces
                })
            );
            assert_eq!(build.sphere(Sphere::Forces), 1);
            assert!(build.set_sphere(Sphere::Forces, 2).is_applied());
        }

        #[test]
        fn affinity_must_be_offered_by_the_tradition() {
            let mut build = CharacterBuildState::new();
            build.identity_mut().sect = "Order of Hermes".to_string();

            assert!(matches!(
                build.choose_affinity_sphere(Sphere::Life).rejection(),
                Some(Rejection::AffinityNotOffered { .. })
            ));
            assert!(build.choose_affinity_sphere(Sphere::Forces).is_applied());
        }

        #[test]
        fn unknown_sect_accepts_any_affinity() {
            let mut build = CharacterBuildState::new();
            build.identity_mut().sect = "Hollow Ones".to_string();
            assert!(build.choose_affinity_sphere(Sphere::Time).is_applied());
        }

        #[test]
        fn affinity_needs_a_free_dot() {
            let mut build = CharacterBuildState::new();
            build.set_sphere(Sphere::Forces, 3);
            build.set_sphere(Sphere::Prime, 3);

            assert!(build.choose_affinity_sphere(Sphere::Mind).is_rejected());
            assert_eq!(build.affinity_sphere(), None);
            assert!(build.choose_affinity_sphere(Sphere::Prime).is_applied());
        }
    }

    mod backgrounds {
        use super::*;

        #[test]
        fn backgrounds_share_seven_dots() {
            let mut build = CharacterBuildState::new();
            assert!(build.set_background(Background::Avatar, 6).is_rejected());
            assert!(build.set_background(Background::Avatar, 5).is_applied());
            assert!(build.set_background(Background::Node, 3).is_rejected());
            assert!(build.set_background(Background::Node, 2).is_applied());
            assert_eq!(build.background_remaining(), 0);
        }

        #[test]
        fn zero_removes_the_background() {
            let mut build = CharacterBuildState::new();
            build.set_background(Background::Mentor, 2);
            build.set_background(Background::Mentor, 0);
            assert!(build.backgrounds().is_empty());
        }
    }

    mod freebies {
        use super::*;

        fn merit(id: &str, cost: u8) -> MeritPick {
            MeritPick::new(id, id, cost)
        }

        #[test]
        fn ledger_is_recomputed_from_every_entry() {
            let mut build = CharacterBuildState::new();
            assert_eq!(build.remaining_freebies(), 15);

            build.add_freebie_dot(FreebieTarget::Ability(Ability::Awareness));
            assert_eq!(build.remaining_freebies(), 13);

            build.add_merit(merit("acute-senses", 3));
            assert_eq!(build.remaining_freebies(), 10);

            build.add_flaw(merit("nightmares", 4));
            assert_eq!(build.remaining_freebies(), 14);

            assert!(build.remove_merit("acute-senses").is_applied());
            assert_eq!(build.remaining_freebies(), 17);
        }

        #[test]
        fn purchases_beyond_the_pool_are_rejected() {
            let mut build = CharacterBuildState::new();
            assert!(build.add_freebie_dot(FreebieTarget::Sphere(Sphere::Mind)).is_applied());
            assert!(build.add_freebie_dot(FreebieTarget::Sphere(Sphere::Time)).is_applied());
            assert_eq!(build.remaining_freebies(), 1);

            assert_eq!(
                build
                    .add_freebie_dot(FreebieTarget::Ability(Ability::Law))
                    .rejection(),
                Some(&Rejection::InsufficientFreebies {
                    needed: 2,
                    remaining: 1
                })
            );
            assert!(build.add_freebie_dot(FreebieTarget::Willpower).is_applied());
            assert_eq!(build.remaining_freebies(), 0);
        }

        #[test]
        fn removing_returns_the_points() {
            let mut build = CharacterBuildState::new();
            build.add_freebie_dot(FreebieTarget::Arete);
            assert_eq!(build.total_arete(), 2);
            assert_eq!(build.remaining_freebies(), 11);

            assert!(build.remove_freebie_dot(FreebieTarget::Arete).is_applied());
            assert_eq!(build.remaining_freebies(), 15);
            assert!(build.remove_freebie_dot(FreebieTarget::Arete).is_rejected());
        }

        #[test]
        fn arete_stops_at_three() {
            let mut build = CharacterBuildState::new();
            assert!(build.add_freebie_dot(FreebieTarget::Arete).is_applied());
            assert!(build.add_freebie_dot(FreebieTarget::Arete).is_applied());
            assert_eq!(
                build.add_freebie_dot(FreebieTarget::Arete).rejection(),
                Some(&Rejection::AboveMaximum {
                    name: "Arete",
                    maximum: 3
                })
            );
        }

        #[test]
        fn freebies_cannot_push_a_trait_past_five() {
            let mut build = ranked_build();
            build.set_ability(Ability::Occult, 3);
            let target = FreebieTarget::Ability(Ability::Occult);
            assert!(build.add_freebie_dot(target).is_applied());
            assert!(build.add_freebie_dot(target).is_applied());
            assert!(build.add_freebie_dot(target).is_rejected());
            assert_eq!(build.total_ability(Ability::Occult), 5);
        }

        #[test]
        fn base_raise_respects_bought_dots() {
            let mut build = ranked_build();
            let target = FreebieTarget::Ability(Ability::Cosmology);
            for _ in 0..3 {
                build.add_freebie_dot(target);
            }
            assert!(build.set_ability(Ability::Cosmology, 2).is_applied());
            assert!(build.set_ability(Ability::Cosmology, 3).is_rejected());
        }

        #[test]
        fn remaining_never_goes_negative() {
            let mut build = CharacterBuildState::new();
            let targets = [
                FreebieTarget::Attribute(Attribute::Wits),
                FreebieTarget::Sphere(Sphere::Prime),
                FreebieTarget::Attribute(Attribute::Strength),
                FreebieTarget::Arete,
                FreebieTarget::Background(Background::Library),
            ];
            for target in targets.iter().cycle().take(20) {
                build.add_freebie_dot(*target);
                assert!(build.remaining_freebies() >= 0);
            }
            assert!(build.add_merit(merit("unlimited", 7)).is_rejected());
        }

        #[test]
        fn oversized_posted_counters_are_refused_without_wrapping() {
            let mut build: CharacterBuildState =
                serde_json::from_str(r#"{"freebieDots":{"arete":255}}"#).unwrap();
            assert_eq!(build.total_arete(), 255);
            assert_eq!(
                build.add_freebie_dot(FreebieTarget::Arete).rejection(),
                Some(&Rejection::AboveMaximum {
                    name: "Arete",
                    maximum: 3
                })
            );
            assert_eq!(build.freebie_dots().arete, 255);
        }

        #[test]
        fn base_raise_under_an_oversized_counter_is_refused() {
            let mut build: CharacterBuildState =
                serde_json::from_str(r#"{"freebieDots":{"abilities":{"occult":255}}}"#).unwrap();
            build.set_ability_priority(AbilityCategory::Knowledges, Some(PriorityTier::Primary));

            assert!(matches!(
                build.set_ability(Ability::Occult, 3).rejection(),
                Some(Rejection::AboveMaximum { maximum: 5, .. })
            ));
            assert_eq!(build.ability(Ability::Occult), 0);
        }
    }

    mod merits_and_flaws {
        use super::*;

        #[test]
        fn flaws_cap_at_seven_points() {
            let mut build = CharacterBuildState::new();
            assert!(build.add_flaw(MeritPick::new("a", "Phobia", 3)).is_applied());
            assert!(build.add_flaw(MeritPick::new("b", "Enemy", 4)).is_applied());
            assert_eq!(
                build.add_flaw(MeritPick::new("c", "Curse", 1)).rejection(),
                Some(&Rejection::FlawCapExceeded {
                    attempted: 8,
                    cap: 7
                })
            );
            assert_eq!(build.flaw_total(), 7);
        }

        #[test]
        fn picks_need_a_cost_and_a_unique_id() {
            let mut build = CharacterBuildState::new();
            assert_eq!(
                build.add_merit(MeritPick::new("m", "Luck", 0)).rejection(),
                Some(&Rejection::InvalidCost)
            );
            build.add_merit(MeritPick::new("m", "Luck", 3));
            assert!(matches!(
                build.add_flaw(MeritPick::new("m", "Luck", 2)).rejection(),
                Some(Rejection::Duplicate { .. })
            ));
        }

        #[test]
        fn removing_a_spent_flaw_is_refused() {
            let mut build = CharacterBuildState::new();
            build.add_flaw(MeritPick::new("f", "Nightmares", 2));
            for _ in 0..5 {
                build.add_freebie_dot(FreebieTarget::Ability(Ability::Awareness));
            }
            for _ in 0..3 {
                build.add_freebie_dot(FreebieTarget::Ability(Ability::Alertness));
            }
            build.add_freebie_dot(FreebieTarget::Willpower);
            assert_eq!(build.remaining_freebies(), 0);

            assert!(build.remove_flaw("f").is_rejected());
            assert_eq!(build.flaws().len(), 1);
        }

        #[test]
        fn removing_unknown_picks_is_rejected() {
            let mut build = CharacterBuildState::new();
            assert_eq!(
                build.remove_merit("nope").rejection(),
                Some(&Rejection::NotPresent {
                    id: "nope".to_string()
                })
            );
            assert!(build.remove_flaw("nope").is_rejected());
        }
    }

    mod specialties {
        use super::*;

        #[test]
        fn high_abilities_are_flagged_until_specialised() {
            let mut build = ranked_build();
            build.set_ability(Ability::Occult, 3);
            build.add_freebie_dot(FreebieTarget::Ability(Ability::Occult));
            assert_eq!(build.abilities_needing_specialty(), vec![Ability::Occult]);

            build.set_specialty(Ability::Occult, "  Hermetic lore ");
            assert_eq!(build.specialty(Ability::Occult), Some("Hermetic lore"));
            assert!(build.abilities_needing_specialty().is_empty());

            build.set_specialty(Ability::Occult, "   ");
            assert_eq!(build.specialty(Ability::Occult), None);
        }
    }
}
