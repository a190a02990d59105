//! Domain layer containing cycle logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `cycle` - Cycle phases, validated cycle state and ring geometry
//! - `tracking` - Symptom, mood and energy selections
//! - `insights` - Insight categories and daily insight cards
//! - `health` - Health metrics and hormone levels
//! - `settings` - User profile and preferences
//! - `dashboard` - Home screen read model

pub mod cycle;
pub mod dashboard;
pub mod foundation;
pub mod health;
pub mod insights;
pub mod settings;
pub mod tracking;
