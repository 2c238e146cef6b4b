//! Static lookup tables for the game's closed vocabularies.
//!
//! Every table is a closed enum with an `ALL` slice, a display `name()`, and a
//! forgiving `FromStr` that ignores case, spaces, hyphens and underscores, so
//! "Martial Arts", "martial-arts" and "martialArts" all resolve to the same
//! ability.

/// Defines a catalog enum with its display names and optional parse aliases.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every entry, in table order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Display name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Alternate names accepted when parsing.
            pub fn aliases(self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),*]),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = $crate::catalog::normalize_key(s);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|entry| {
                        $crate::catalog::normalize_key(entry.name()) == wanted
                            || entry
                                .aliases()
                                .iter()
                                .any(|alias| $crate::catalog::normalize_key(alias) == wanted)
                    })
                    .ok_or_else(|| {
                        $crate::error::DomainError::parse(format!(
                            "Unknown {}: {}",
                            stringify!($name),
                            s
                        ))
                    })
            }
        }
    };
}

mod abilities;
mod attributes;
mod backgrounds;
mod spheres;
mod traditions;

pub use abilities::{Ability, AbilityCategory};
pub use attributes::{Attribute, AttributeCategory};
pub use backgrounds::Background;
pub use spheres::Sphere;
pub use traditions::{Affiliation, Tradition};

/// Lowercases and strips everything that is not alphanumeric.
pub(crate) fn normalize_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
