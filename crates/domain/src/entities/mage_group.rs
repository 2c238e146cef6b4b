//! Mage group entity - Encyclopedia entries for Traditions, Conventions and
//! Crafts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Tradition;
use crate::error::DomainError;
use crate::ids::MageGroupId;
use crate::value_objects::EntityName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MageGroupType {
    Tradition,
    Convention,
    Craft,
    Disparate,
}

impl MageGroupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tradition => "tradition",
            Self::Convention => "convention",
            Self::Craft => "craft",
            Self::Disparate => "disparate",
        }
    }
}

impl fmt::Display for MageGroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MageGroupType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tradition" => Ok(Self::Tradition),
            "convention" => Ok(Self::Convention),
            "craft" => Ok(Self::Craft),
            "disparate" => Ok(Self::Disparate),
            _ => Err(DomainError::parse(format!("Unknown mage group type: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MageGroup {
    pub id: MageGroupId,
    pub name: EntityName,
    pub group_type: MageGroupType,
    /// One-paragraph teaser shown in listings.
    pub summary: String,
    /// Full entry body (markdown).
    pub content: String,
    pub published: bool,
}

impl MageGroup {
    pub fn new(name: EntityName, group_type: MageGroupType) -> Self {
        Self {
            id: MageGroupId::new(),
            name,
            group_type,
            summary: String::new(),
            content: String::new(),
            published: false,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// The catalog entry this group describes, if its name is a known
    /// Tradition or Convention.
    pub fn tradition(&self) -> Option<Tradition> {
        self.name.as_str().parse().ok()
    }
}

/// Listing filter. `None` matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MageGroupFilter {
    pub group_type: Option<MageGroupType>,
    pub published: Option<bool>,
}

impl MageGroupFilter {
    pub fn matches(&self, group: &MageGroup) -> bool {
        self.group_type.map_or(true, |t| group.group_type == t)
            && self.published.map_or(true, |p| group.published == p)
    }
}
