//! CyclePhase - a named, contiguous run of cycle days.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::domain::foundation::ColorToken;

/// A named span of a repeating cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclePhase {
    name: String,
    days: Vec<u32>,
    color: ColorToken,
}

impl CyclePhase {
    /// Creates a phase from an explicit list of day numbers.
    ///
    /// Contiguity is checked when the phase joins a [`CycleState`](super::CycleState);
    /// the geometry functions accept any list and only look at its length.
    pub fn new(name: impl Into<String>, days: Vec<u32>, color: ColorToken) -> Self {
        Self {
            name: name.into(),
            days,
            color,
        }
    }

    /// Creates a phase owning every day in `range`.
    pub fn spanning(name: impl Into<String>, range: RangeInclusive<u32>, color: ColorToken) -> Self {
        Self::new(name, range.collect(), color)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }

    pub fn color(&self) -> &ColorToken {
        &self.color
    }

    /// Number of days in the phase.
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn first_day(&self) -> Option<u32> {
        self.days.first().copied()
    }

    pub fn last_day(&self) -> Option<u32> {
        self.days.last().copied()
    }

    pub fn contains_day(&self, day: u32) -> bool {
        self.days.contains(&day)
    }

    /// True when days are strictly ascending with no holes.
    pub fn is_contiguous(&self) -> bool {
        self.days.windows(2).all(|w| w[0].checked_add(1) == Some(w[1]))
    }
}
