//! Merit entity - Merits and flaws available at character creation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::build::{MeritPick, FLAW_CAP};
use crate::error::DomainError;
use crate::ids::MeritId;
use crate::value_objects::EntityName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeritKind {
    Merit,
    Flaw,
}

impl MeritKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Merit => "merit",
            Self::Flaw => "flaw",
        }
    }
}

impl fmt::Display for MeritKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeritKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "merit" => Ok(Self::Merit),
            "flaw" => Ok(Self::Flaw),
            _ => Err(DomainError::parse(format!("Unknown merit kind: {}", s))),
        }
    }
}

/// Sheet section a merit or flaw belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeritType {
    Physical,
    Mental,
    Social,
    Supernatural,
}

impl MeritType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Mental => "mental",
            Self::Social => "social",
            Self::Supernatural => "supernatural",
        }
    }
}

impl fmt::Display for MeritType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeritType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physical" => Ok(Self::Physical),
            "mental" => Ok(Self::Mental),
            "social" => Ok(Self::Social),
            "supernatural" => Ok(Self::Supernatural),
            _ => Err(DomainError::parse(format!("Unknown merit type: {}", s))),
        }
    }
}

/// Point cost range. Fixed-cost entries have `min == max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeritCost {
    min: u8,
    max: u8,
}

impl MeritCost {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless `1 <= min <= max <= 7`.
    pub fn new(min: u8, max: u8) -> Result<Self, DomainError> {
        if min == 0 || min > max || max > FLAW_CAP {
            return Err(DomainError::validation(format!(
                "Cost range {}..={} must satisfy 1 <= min <= max <= {}",
                min, max, FLAW_CAP
            )));
        }
        Ok(Self { min, max })
    }

    pub fn fixed(cost: u8) -> Result<Self, DomainError> {
        Self::new(cost, cost)
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, cost: u8) -> bool {
        (self.min..=self.max).contains(&cost)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merit {
    pub id: MeritId,
    pub name: EntityName,
    pub kind: MeritKind,
    pub merit_type: MeritType,
    pub cost: MeritCost,
    pub description: String,
}

impl Merit {
    pub fn new(name: EntityName, kind: MeritKind, merit_type: MeritType, cost: MeritCost) -> Self {
        Self {
            id: MeritId::new(),
            name,
            kind,
            merit_type,
            cost,
            description: String::new(),
        }
    }

    pub fn with_id(mut self, id: MeritId) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The build-sheet entry for taking this merit at `cost` points.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `cost` is outside the range.
    pub fn pick(&self, cost: u8) -> Result<MeritPick, DomainError> {
        if !self.cost.contains(cost) {
            return Err(DomainError::validation(format!(
                "{} costs between {} and {}",
                self.name,
                self.cost.min(),
                self.cost.max()
            )));
        }
        Ok(MeritPick::new(self.id.to_string(), self.name.as_str(), cost))
    }
}

/// Listing filter. `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeritFilter {
    pub kind: Option<MeritKind>,
    pub merit_type: Option<MeritType>,
}

impl MeritFilter {
    pub fn matches(&self, merit: &Merit) -> bool {
        self.kind.map_or(true, |kind| merit.kind == kind)
            && self.merit_type.map_or(true, |t| merit.merit_type == t)
    }
}
