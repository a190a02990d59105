//! Display colour tokens.
//!
//! Colours are opaque to every calculation; they travel alongside phases,
//! metrics and categories so the renderer can paint them.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A `#RRGGBB` colour string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorToken(Cow<'static, str>);

/// Lavender, used whenever a phase colour cannot be resolved.
pub static DEFAULT_PHASE_COLOR: ColorToken = ColorToken::from_static("#C4B5FD");

impl ColorToken {
    /// Wraps a compile-time literal without validation.
    pub const fn from_static(hex: &'static str) -> Self {
        Self(Cow::Borrowed(hex))
    }

    /// Parses and validates a `#RRGGBB` string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ValidationError::invalid_format("color", "missing # prefix"))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                "color",
                format!("expected six hex digits, got '{}'", digits),
            ));
        }
        Ok(Self(Cow::Owned(value)))
    }

    /// Returns the hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends a two-digit alpha channel, e.g. `#8B5CF6` + 0x80 -> `#8B5CF680`.
    pub fn with_alpha(&self, alpha: u8) -> String {
        format!("{}{:02X}", self.0, alpha)
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ColorToken {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ColorToken {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.0.into_owned()
    }
}
