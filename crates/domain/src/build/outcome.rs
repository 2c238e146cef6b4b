//! Results of allocator operations.
//!
//! Every operation either applies in full or leaves the build untouched and
//! explains why.

use serde::Serialize;
use thiserror::Error;

use crate::catalog::{AbilityCategory, AttributeCategory, Sphere, Tradition};

use super::BuildPhase;

/// Outcome of a single allocator operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AllocationOutcome {
    /// The change was legal and has been applied.
    Applied,
    /// The change was refused; the build is unchanged.
    Rejected { reason: Rejection },
}

impl AllocationOutcome {
    pub fn rejected(reason: Rejection) -> Self {
        Self::Rejected { reason }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_applied()
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Applied => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}

impl From<Result<(), Rejection>> for AllocationOutcome {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Self::Applied,
            Err(reason) => Self::rejected(reason),
        }
    }
}

/// Point pool an allocation draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "pool", content = "category", rename_all = "camelCase")]
pub enum PointPool {
    Attributes(AttributeCategory),
    Abilities(AbilityCategory),
    Spheres,
    Backgrounds,
}

/// Why an operation was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Rejection {
    #[error("{name} cannot go below {minimum}")]
    BelowMinimum { name: &'static str, minimum: u8 },

    #[error("{name} cannot exceed {maximum}")]
    AboveMaximum { name: &'static str, maximum: u8 },

    #[error("{pool:?} has {remaining} points left, {needed} needed")]
    InsufficientPoints {
        pool: PointPool,
        needed: i32,
        remaining: i32,
    },

    #[error("{sphere} is the affinity sphere and needs at least one dot")]
    AffinitySphereFloor { sphere: Sphere },

    #[error("{tradition} does not offer {sphere} as an affinity")]
    AffinityNotOffered { sphere: Sphere, tradition: Tradition },

    #[error("{needed} freebie points needed, {remaining} remaining")]
    InsufficientFreebies { needed: i32, remaining: i32 },

    #[error("no freebie dots on {name} to remove")]
    NothingToRemove { name: &'static str },

    #[error("flaws would total {attempted}, cap is {cap}")]
    FlawCapExceeded { attempted: u32, cap: u8 },

    #[error("cost must be at least 1")]
    InvalidCost,

    #[error("{id} is already taken")]
    Duplicate { id: String },

    #[error("{id} is not on the sheet")]
    NotPresent { id: String },

    #[error("cannot leave {phase}: {reason}")]
    PhaseGate { phase: BuildPhase, reason: String },

    #[error("already at the first phase")]
    AtFirstPhase,
}
