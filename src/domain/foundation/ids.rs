//! Strongly-typed identifier value objects.
//!
//! Tracking options are identified by small catalog numbers rather than
//! UUIDs; the newtypes keep a mood id from being passed where a symptom id
//! is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u8);

        impl $name {
            /// Creates an identifier from its catalog number.
            pub const fn new(value: u8) -> Self {
                Self(value)
            }

            /// Returns the catalog number.
            pub fn value(&self) -> u8 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u8>()
                    .map(Self)
                    .map_err(|e| ValidationError::invalid_format($field, e.to_string()))
            }
        }
    };
}

catalog_id!(
    /// Identifier of a trackable symptom.
    SymptomId,
    "symptom_id"
);

catalog_id!(
    /// Identifier of a mood option.
    MoodId,
    "mood_id"
);

catalog_id!(
    /// Identifier of an energy level option.
    EnergyLevelId,
    "energy_level_id"
);
