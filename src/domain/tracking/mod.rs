//! Tracking module - the daily symptom, mood and energy tracker.

mod catalog;
mod daily;
mod selection;

pub use catalog::{EnergyLevel, MoodOption, Symptom, TrackingOptions};
pub use daily::{DailyEntry, DailyTracking, TrackingAction};
pub use selection::{SingleSelection, SymptomSelection};
