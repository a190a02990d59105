//! DailyTracking - the day's symptom, mood and energy picks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{SingleSelection, SymptomSelection};
use crate::domain::foundation::{EnergyLevelId, MoodId, SymptomId};

/// A user interaction on the tracking screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingAction {
    ToggleSymptom(SymptomId),
    SelectMood(MoodId),
    SelectEnergy(EnergyLevelId),
    Reset,
}

/// Current picks on the tracking screen.
///
/// Ids are not checked against any catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyTracking {
    symptoms: SymptomSelection,
    mood: SingleSelection<MoodId>,
    energy: SingleSelection<EnergyLevelId>,
}

impl DailyTracking {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state after `action`.
    pub fn apply(&self, action: TrackingAction) -> Self {
        match action {
            TrackingAction::ToggleSymptom(id) => Self {
                symptoms: self.symptoms.toggle(id),
                ..self.clone()
            },
            TrackingAction::SelectMood(id) => Self {
                mood: self.mood.select(id),
                ..self.clone()
            },
            TrackingAction::SelectEnergy(id) => Self {
                energy: self.energy.select(id),
                ..self.clone()
            },
            TrackingAction::Reset => Self::default(),
        }
    }

    pub fn symptoms(&self) -> &SymptomSelection {
        &self.symptoms
    }

    pub fn mood(&self) -> SingleSelection<MoodId> {
        self.mood
    }

    pub fn energy(&self) -> SingleSelection<EnergyLevelId> {
        self.energy
    }

    /// True when nothing has been picked.
    pub fn is_blank(&self) -> bool {
        self.symptoms.is_empty() && self.mood.is_empty() && self.energy.is_empty()
    }

    /// Snapshot of today's picks, ready to hand to whatever stores it.
    pub fn entry(&self, date: NaiveDate) -> DailyEntry {
        DailyEntry {
            date,
            symptoms: self.symptoms.ids().to_vec(),
            mood: self.mood.selected(),
            energy: self.energy.selected(),
        }
    }
}

/// Serializable record of one day's tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub symptoms: Vec<SymptomId>,
    pub mood: Option<MoodId>,
    pub energy: Option<EnergyLevelId>,
}
