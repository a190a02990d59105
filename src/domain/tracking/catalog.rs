//! Options offered on the tracking screen.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ColorToken, EnergyLevelId, MoodId, SymptomId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodOption {
    pub id: MoodId,
    pub emoji: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyLevel {
    pub id: EnergyLevelId,
    pub label: String,
    pub color: ColorToken,
}

/// Everything a user can pick on the tracking screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingOptions {
    pub symptoms: Vec<Symptom>,
    pub moods: Vec<MoodOption>,
    pub energy_levels: Vec<EnergyLevel>,
}

impl TrackingOptions {
    pub fn symptom(&self, id: SymptomId) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    pub fn mood(&self, id: MoodId) -> Option<&MoodOption> {
        self.moods.iter().find(|m| m.id == id)
    }

    pub fn energy_level(&self, id: EnergyLevelId) -> Option<&EnergyLevel> {
        self.energy_levels.iter().find(|e| e.id == id)
    }
}
