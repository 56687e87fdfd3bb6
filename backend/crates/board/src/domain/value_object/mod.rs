//! Value Objects
//!
//! Closed vocabularies of the marketplace. Every label is stored and
//! exchanged verbatim (Chinese UI labels), so each type parses from and
//! serializes to its label.

use thiserror::Error;

/// A label that is not part of a closed vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("未知{kind}: {value}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownLabel {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Declares a closed, ordered vocabulary of labelled variants.
///
/// Generates `ALL`, `label()`, `parse()`, `FromStr`, `Display` and
/// label-based serde impls.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in presentation order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The stored/displayed label
            #[inline]
            pub const fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Parse a label (surrounding whitespace ignored)
            pub fn parse(raw: &str) -> Option<Self> {
                let raw = raw.trim();
                Self::ALL.iter().copied().find(|v| v.label() == raw)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::value_object::UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| $crate::domain::value_object::UnknownLabel::new($kind, s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod gender;
pub mod grade;
pub mod identity;
pub mod listing_status;
pub mod region;
pub mod salary;
pub mod subject;
pub mod teach_mode;

pub use gender::Gender;
pub use grade::{Grade, Phase};
pub use identity::Identity;
pub use listing_status::ListingStatus;
pub use region::Region;
pub use salary::SalaryRange;
pub use subject::{Subject, UNIVERSAL_WILDCARD};
pub use teach_mode::TeachMode;

/// Delimiter for multi-value demand fields ("小一、小二")
pub const MULTI_VALUE_DELIMITER: &str = "、";
