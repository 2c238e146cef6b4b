//! Rote entity - A named, pre-packaged magical effect
//!
//! Rotes are the main reference entry users browse. Each one is tied to a
//! tradition and requires dots in one or more spheres.

use std::collections::BTreeMap;

use crate::catalog::Sphere;
use crate::error::DomainError;
use crate::ids::RoteId;
use crate::value_objects::EntityName;

/// Highest sphere rating a rote may require.
pub const MAX_SPHERE_LEVEL: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rote {
    pub id: RoteId,
    pub name: EntityName,
    pub tradition: String,
    pub description: String,
    spheres: BTreeMap<Sphere, u8>,
    /// Book and page, free text.
    pub source: String,
}

impl Rote {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `spheres` is empty or any level is
    /// outside 1..=5.
    pub fn new(name: EntityName, spheres: BTreeMap<Sphere, u8>) -> Result<Self, DomainError> {
        validate_spheres(&spheres)?;
        Ok(Self {
            id: RoteId::new(),
            name,
            tradition: String::new(),
            description: String::new(),
            spheres,
            source: String::new(),
        })
    }

    pub fn with_id(mut self, id: RoteId) -> Self {
        self.id = id;
        self
    }

    pub fn with_tradition(mut self, tradition: impl Into<String>) -> Self {
        self.tradition = tradition.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sphere levels the rote requires.
    pub fn spheres(&self) -> &BTreeMap<Sphere, u8> {
        &self.spheres
    }

    pub fn set_spheres(&mut self, spheres: BTreeMap<Sphere, u8>) -> Result<(), DomainError> {
        validate_spheres(&spheres)?;
        self.spheres = spheres;
        Ok(())
    }

    /// Difficulty rank: the highest sphere level required.
    pub fn level(&self) -> u8 {
        self.spheres.values().copied().max().unwrap_or(0)
    }

    pub fn requires(&self, sphere: Sphere) -> bool {
        self.spheres.contains_key(&sphere)
    }
}

fn validate_spheres(spheres: &BTreeMap<Sphere, u8>) -> Result<(), DomainError> {
    if spheres.is_empty() {
        return Err(DomainError::validation("A rote requires at least one sphere"));
    }
    if let Some((sphere, level)) = spheres
        .iter()
        .find(|(_, level)| **level == 0 || **level > MAX_SPHERE_LEVEL)
    {
        return Err(DomainError::validation(format!(
            "{} level {} is outside 1..={}",
            sphere, level, MAX_SPHERE_LEVEL
        )));
    }
    Ok(())
}

/// Search criteria for the rote browser. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoteFilter {
    /// Case-insensitive substring of the name or description.
    pub query: Option<String>,
    /// Case-insensitive tradition name.
    pub tradition: Option<String>,
    pub sphere: Option<Sphere>,
    pub max_level: Option<u8>,
}

impl RoteFilter {
    pub fn matches(&self, rote: &Rote) -> bool {
        if let Some(query) = non_blank(&self.query) {
            let query = query.to_lowercase();
            if !rote.name.as_str().to_lowercase().contains(&query)
                && !rote.description.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        if let Some(tradition) = non_blank(&self.tradition) {
            if !rote.tradition.trim().eq_ignore_ascii_case(tradition) {
                return false;
            }
        }
        if let Some(sphere) = self.sphere {
            if !rote.requires(sphere) {
                return false;
            }
        }
        if let Some(max_level) = self.max_level {
            if rote.level() > max_level {
                return false;
            }
        }
        true
    }

    /// Keeps the matching rotes, sorted by name.
    pub fn apply(&self, rotes: Vec<Rote>) -> Vec<Rote> {
        let mut matched: Vec<Rote> = rotes.into_iter().filter(|rote| self.matches(rote)).collect();
        matched.sort_by(|a, b| {
            a.name
                .as_str()
                .to_lowercase()
                .cmp(&b.name.as_str().to_lowercase())
        });
        matched
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
