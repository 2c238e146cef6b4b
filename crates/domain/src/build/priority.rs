//! Priority tiers and their assignment across a three-member group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{AbilityCategory, AttributeCategory};

/// Rank given to a category. Each tier carries a fixed point budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityTier {
    Primary,
    Secondary,
    Tertiary,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 3] = [
        PriorityTier::Primary,
        PriorityTier::Secondary,
        PriorityTier::Tertiary,
    ];
}

/// A category group whose members are ranked by priority.
pub trait PriorityGroup: Copy + Ord + 'static {
    /// Every member of the group.
    fn members() -> &'static [Self];

    /// Points granted to a member ranked at `tier`.
    fn tier_points(tier: PriorityTier) -> u8;
}

impl PriorityGroup for AttributeCategory {
    fn members() -> &'static [Self] {
        AttributeCategory::ALL
    }

    fn tier_points(tier: PriorityTier) -> u8 {
        match tier {
            PriorityTier::Primary => 7,
            PriorityTier::Secondary => 5,
            PriorityTier::Tertiary => 3,
        }
    }
}

impl PriorityGroup for AbilityCategory {
    fn members() -> &'static [Self] {
        AbilityCategory::ALL
    }

    fn tier_points(tier: PriorityTier) -> u8 {
        match tier {
            PriorityTier::Primary => 13,
            PriorityTier::Secondary => 9,
            PriorityTier::Tertiary => 5,
        }
    }
}

/// Partial bijection between a group's members and the three tiers.
///
/// # Invariants
///
/// - No tier is held by more than one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityAssignment<G: PriorityGroup> {
    tiers: BTreeMap<G, PriorityTier>,
}

impl<G: PriorityGroup> Default for PriorityAssignment<G> {
    fn default() -> Self {
        Self {
            tiers: BTreeMap::new(),
        }
    }
}

impl<G: PriorityGroup> PriorityAssignment<G> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(&self, member: G) -> Option<PriorityTier> {
        self.tiers.get(&member).copied()
    }

    /// Member currently holding `tier`, if any.
    pub fn holder(&self, tier: PriorityTier) -> Option<G> {
        self.tiers
            .iter()
            .find(|(_, held)| **held == tier)
            .map(|(member, _)| *member)
    }

    /// Assigns `tier` to `member`, or clears it with `None`.
    ///
    /// Last write wins: any other member holding the same tier loses it.
    pub fn assign(&mut self, member: G, tier: Option<PriorityTier>) {
        match tier {
            Some(tier) => {
                self.tiers.retain(|other, held| *other == member || *held != tier);
                self.tiers.insert(member, tier);
            }
            None => {
                self.tiers.remove(&member);
            }
        }
    }

    /// Points available to `member` (0 while unranked).
    pub fn budget(&self, member: G) -> u8 {
        self.tier(member).map(G::tier_points).unwrap_or(0)
    }

    /// True once every tier is held by exactly one member.
    pub fn is_complete(&self) -> bool {
        PriorityTier::ALL.iter().all(|tier| {
            self.tiers.values().filter(|held| *held == tier).count() == 1
        }) && self.tiers.keys().all(|member| G::members().contains(member))
    }

    /// True if no tier is held twice. Always holds for assignments built
    /// through [`Self::assign`]; deserialized values may violate it.
    pub fn is_consistent(&self) -> bool {
        PriorityTier::ALL.iter().all(|tier| {
            self.tiers.values().filter(|held| *held == tier).count() <= 1
        })
    }
}
