//! Character creation: build state, point-allocation rules and the phase
//! sequencer that walks a build from basics to a finished sheet.
//!
//! All operations are synchronous and pure over [`CharacterBuildState`].
//! Callers drive a build either through the individual allocator methods or
//! by feeding [`BuildCommand`]s to [`CharacterBuildState::apply`].

mod allocator;
mod command;
mod freebies;
mod outcome;
mod phase;
mod priority;
mod state;

pub use command::BuildCommand;
pub use freebies::{FreebieDots, FreebieTarget, MeritPick};
pub use outcome::{AllocationOutcome, PointPool, Rejection};
pub use phase::BuildPhase;
pub use priority::{PriorityAssignment, PriorityGroup, PriorityTier};
pub use state::{BuildIdentity, CharacterBuildState};

/// Every attribute starts at one dot.
pub const ATTRIBUTE_BASE: u8 = 1;
/// Highest ability rating before freebies.
pub const BASE_ABILITY_MAX: u8 = 3;
/// Highest sphere rating before freebies.
pub const BASE_SPHERE_MAX: u8 = 3;
pub const SPHERE_POINTS: u8 = 6;
pub const BACKGROUND_POINTS: u8 = 7;
pub const BACKGROUND_MAX: u8 = 5;
pub const FREEBIE_POINTS: u8 = 15;
/// Maximum total cost of flaws taken at creation.
pub const FLAW_CAP: u8 = 7;
pub const BASE_ARETE: u8 = 1;
pub const BASE_WILLPOWER: u8 = 5;
/// Ceiling freebie dots may raise a dotted trait to.
pub const TRAIT_MAX: u8 = 5;
pub const CREATION_ARETE_MAX: u8 = 3;
pub const WILLPOWER_MAX: u8 = 10;
