//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the cycle tracking domain.

mod color_token;
mod errors;
mod ids;
mod percentage;
mod score;

pub use color_token::{ColorToken, DEFAULT_PHASE_COLOR};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EnergyLevelId, MoodId, SymptomId};
pub use percentage::Percentage;
pub use score::Score;
