//! CycleProgress value object - Linear progress through the cycle.
//!
//! The tracker screen shows the same snapshot as the dashboard ring, but as
//! a progress bar with day labels and the phases listed from today onward.

use serde::Serialize;

use super::CycleState;
use crate::domain::foundation::Percentage;

/// A read-only view of how far through the cycle today is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleProgress {
    current_day: u32,
    total_days: u32,
    percent_complete: Percentage,
    days_remaining: u32,
    current_phase: String,
    phase_order: Vec<String>,
}

impl CycleProgress {
    /// Creates a progress snapshot from a cycle state.
    pub fn from_state(state: &CycleState) -> Self {
        let current_day = state.current_day();
        let total_days = state.total_days();

        let phases = state.phases();
        let start = state.current_phase_index();
        let phase_order = phases[start..]
            .iter()
            .chain(&phases[..start])
            .map(|phase| phase.name().to_string())
            .collect();

        Self {
            current_day,
            total_days,
            percent_complete: Percentage::of(current_day, total_days),
            days_remaining: total_days - current_day,
            current_phase: state.current_phase().name().to_string(),
            phase_order,
        }
    }

    /// Fill of the progress bar (floor of `day * 100 / total`).
    pub fn percent_complete(&self) -> Percentage {
        self.percent_complete
    }

    /// Days left after today.
    pub fn days_remaining(&self) -> u32 {
        self.days_remaining
    }

    pub fn current_phase(&self) -> &str {
        &self.current_phase
    }

    /// Phase names starting with the current phase and wrapping around.
    pub fn phase_order(&self) -> &[String] {
        &self.phase_order
    }

    /// "Day 8"
    pub fn day_label(&self) -> String {
        format!("Day {}", self.current_day)
    }

    /// "28 Day Cycle"
    pub fn length_label(&self) -> String {
        format!("{} Day Cycle", self.total_days)
    }

    pub fn is_last_day(&self) -> bool {
        self.days_remaining == 0
    }
}
