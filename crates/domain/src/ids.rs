use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn to_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|_| DomainError::invalid_id(format!("{}: {}", stringify!($name), s)))
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Persisted characters
define_id!(CharacterId);

// Reference data
define_id!(RoteId);
define_id!(MeritId);
define_id!(ResourceId);
define_id!(MageGroupId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_from_their_display_form() {
        let id = RoteId::new();
        let parsed: RoteId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn malformed_ids_are_rejected() {
        let err = "not-a-uuid".parse::<CharacterId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
        assert!(err.to_string().contains("CharacterId"));
    }

    #[test]
    fn ids_serialize_as_bare_uuid_strings() {
        let uuid = Uuid::nil();
        let json = serde_json::to_string(&MeritId::from_uuid(uuid)).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
