//! Editable site copy, stored as key/value pairs per scope

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const MAX_KEY_LENGTH: usize = 100;

/// A named bucket of editable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentScope {
    SiteSettings,
    GuideExpandedContent,
    CharacterCreationContent,
}

impl ContentScope {
    pub const ALL: [ContentScope; 3] = [
        ContentScope::SiteSettings,
        ContentScope::GuideExpandedContent,
        ContentScope::CharacterCreationContent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SiteSettings => "site-settings",
            Self::GuideExpandedContent => "guide-expanded-content",
            Self::CharacterCreationContent => "character-creation-content",
        }
    }
}

impl fmt::Display for ContentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentScope {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown content scope: {}", s)))
    }
}

/// Key/value entries for one scope.
pub type ContentEntries = BTreeMap<String, String>;

/// Checks every key of an update.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an empty key or one longer than 100
/// characters.
pub fn validate_entries(entries: &ContentEntries) -> Result<(), DomainError> {
    for key in entries.keys() {
        if key.trim().is_empty() {
            return Err(DomainError::validation("Content keys cannot be empty"));
        }
        if key.chars().count() > MAX_KEY_LENGTH {
            return Err(DomainError::validation(format!(
                "Content key cannot exceed {} characters: {}",
                MAX_KEY_LENGTH, key
            )));
        }
    }
    Ok(())
}
