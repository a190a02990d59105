//! Score value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Percentage, ValidationError};

/// A finite fraction between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0.0);

    /// Highest possible score.
    pub const MAX: Self = Self(1.0);

    /// Creates a Score, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw fraction.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Converts to the percentage used for bar fills.
    pub fn as_percentage(&self) -> Percentage {
        Percentage::from_fraction(self.0)
    }
}

impl TryFrom<f64> for Score {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
