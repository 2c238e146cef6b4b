//! Validated name newtypes
//!
//! Both types are trimmed and non-empty by construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for names and titles
const MAX_NAME_LENGTH: usize = 200;

fn validated(kind: &str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} cannot be empty", kind)));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "{} cannot exceed {} characters",
            kind, MAX_NAME_LENGTH
        )));
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// CharacterName
// ============================================================================

/// A finished character's name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed name is empty or
    /// longer than 200 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated("Character name", name.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

// ============================================================================
// EntityName
// ============================================================================

/// Name or title of a reference entry: a rote, merit, resource or mage group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityName(String);

impl EntityName {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed name is empty or
    /// longer than 200 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated("Name", name.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for EntityName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EntityName> for String {
    fn from(name: EntityName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod character_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = CharacterName::new("Dante").unwrap();
            assert_eq!(name.as_str(), "Dante");
            assert_eq!(name.to_string(), "Dante");
        }

        #[test]
        fn whitespace_only_rejected() {
            let err = CharacterName::new("   ").unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn name_is_trimmed() {
            let name = CharacterName::new("  Porthos Fitz-Empress ").unwrap();
            assert_eq!(name.as_str(), "Porthos Fitz-Empress");
        }

        #[test]
        fn too_long_rejected() {
            assert!(CharacterName::new("a".repeat(201)).is_err());
            assert!(CharacterName::new("a".repeat(200)).is_ok());
        }
    }

    mod entity_name {
        use super::*;

        #[test]
        fn serde_rejects_empty_names() {
            let result: Result<EntityName, _> = serde_json::from_str(r#""  ""#);
            assert!(result.is_err());

            let name: EntityName = serde_json::from_str(r#"" Call Lightning ""#).unwrap();
            assert_eq!(name.as_str(), "Call Lightning");
        }
    }
}
