//! CycleState - validated snapshot of the tracked cycle.

use serde::Serialize;
use std::collections::BTreeMap;

use super::errors::{ensure_day_in_cycle, ensure_total_days, CycleError};
use super::geometry::{self, PhaseSegment, RingGeometry, RingPoint};
use super::CyclePhase;
use crate::domain::foundation::ColorToken;

/// The tracked cycle: its length, its phases and where today falls.
///
/// Construction checks that the phases partition `[1, total_days]` and that
/// the current day lies inside the cycle. The current phase is always derived
/// from the current day, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleState {
    current_day: u32,
    total_days: u32,
    phases: Vec<CyclePhase>,
    #[serde(skip)]
    current_phase_index: usize,
}

impl CycleState {
    /// Builds a cycle snapshot.
    ///
    /// # Errors
    ///
    /// - `InvalidTotalDays` if `total_days` is zero
    /// - `DayOutOfRange` if `current_day` is outside `[1, total_days]`
    /// - `MalformedPartition` if a phase is not contiguous, a day is claimed
    ///   twice, a day lies outside the cycle, or a day is left unclaimed
    pub fn new(
        current_day: u32,
        total_days: u32,
        phases: Vec<CyclePhase>,
    ) -> Result<Self, CycleError> {
        ensure_total_days(total_days)?;
        ensure_day_in_cycle(current_day, total_days)?;
        validate_partition(&phases, total_days)?;

        let current_phase_index = phases
            .iter()
            .position(|phase| phase.contains_day(current_day))
            .ok_or_else(|| {
                CycleError::malformed(format!("no phase contains day {}", current_day))
            })?;

        Ok(Self {
            current_day,
            total_days,
            phases,
            current_phase_index,
        })
    }

    /// Same phases, different day.
    pub fn with_current_day(&self, current_day: u32) -> Result<Self, CycleError> {
        Self::new(current_day, self.total_days, self.phases.clone())
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn phases(&self) -> &[CyclePhase] {
        &self.phases
    }

    /// The phase that owns the current day.
    pub fn current_phase(&self) -> &CyclePhase {
        &self.phases[self.current_phase_index]
    }

    /// Index of the current phase within [`phases`](Self::phases).
    pub fn current_phase_index(&self) -> usize {
        self.current_phase_index
    }

    /// The phase that owns `day`, if `day` is inside the cycle.
    pub fn phase_for_day(&self, day: u32) -> Option<&CyclePhase> {
        self.phases.iter().find(|phase| phase.contains_day(day))
    }

    pub fn current_phase_color(&self) -> &ColorToken {
        geometry::resolve_phase_color(&self.phases, self.current_phase().name())
    }

    pub fn progress_angle(&self) -> f64 {
        // current_day and total_days were validated at construction
        f64::from(self.current_day) / f64::from(self.total_days) * geometry::FULL_TURN_DEGREES
    }

    pub fn segments(&self) -> Vec<PhaseSegment> {
        // total_days > 0 is guaranteed, so this never takes the error path
        geometry::phase_segments(&self.phases, self.total_days).unwrap_or_default()
    }

    pub fn indicator_position(&self, ring: &RingGeometry) -> RingPoint {
        geometry::point_on_ring(self.progress_angle(), ring.radius, ring.center_offset)
    }
}

fn validate_partition(phases: &[CyclePhase], total_days: u32) -> Result<(), CycleError> {
    let mut owners: BTreeMap<u32, &str> = BTreeMap::new();

    for phase in phases {
        if !phase.is_contiguous() {
            return Err(CycleError::malformed(format!(
                "phase '{}' is not a contiguous ascending run of days",
                phase.name()
            )));
        }
        for &day in phase.days() {
            if day == 0 || day > total_days {
                return Err(CycleError::malformed(format!(
                    "phase '{}' claims day {} outside 1..={}",
                    phase.name(),
                    day,
                    total_days
                )));
            }
            if let Some(previous) = owners.insert(day, phase.name()) {
                return Err(CycleError::malformed(format!(
                    "day {} is claimed by both '{}' and '{}'",
                    day,
                    previous,
                    phase.name()
                )));
            }
        }
    }

    // every claimed day is in range and unique, so a short count means a gap
    if owners.len() != total_days as usize {
        let gap = (1..=total_days)
            .find(|day| !owners.contains_key(day))
            .unwrap_or(total_days);
        return Err(CycleError::malformed(format!(
            "day {} is not covered by any phase",
            gap
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> ColorToken {
        ColorToken::from_static("#C4B5FD")
    }

    fn standard_phases() -> Vec<CyclePhase> {
        vec![
            CyclePhase::spanning("Menstrual", 1..=5, ColorToken::from_static("#F9A8D4")),
            CyclePhase::spanning("Follicular", 6..=13, ColorToken::from_static("#C4B5FD")),
            CyclePhase::spanning("Ovulation", 14..=15, ColorToken::from_static("#A5B4FC")),
            CyclePhase::spanning("Luteal", 16..=28, ColorToken::from_static("#818CF8")),
        ]
    }

    #[test]
    fn derives_current_phase_from_day() {
        let state = CycleState::new(8, 28, standard_phases()).unwrap();
        assert_eq!(state.current_phase().name(), "Follicular");
        assert_eq!(state.current_phase_index(), 1);
        assert_eq!(state.current_phase_color().as_str(), "#C4B5FD");
    }

    #[test]
    fn phase_boundaries_belong_to_the_right_phase() {
        let state = CycleState::new(5, 28, standard_phases()).unwrap();
        assert_eq!(state.current_phase().name(), "Menstrual");
        let state = state.with_current_day(14).unwrap();
        assert_eq!(state.current_phase().name(), "Ovulation");
        let state = state.with_current_day(28).unwrap();
        assert_eq!(state.current_phase().name(), "Luteal");
    }

    #[test]
    fn rejects_zero_length_cycle() {
        assert_eq!(
            CycleState::new(1, 0, vec![]),
            Err(CycleError::InvalidTotalDays { total_days: 0 })
        );
    }

    #[test]
    fn rejects_day_outside_cycle() {
        assert_eq!(
            CycleState::new(29, 28, standard_phases()),
            Err(CycleError::DayOutOfRange { day: 29, total_days: 28 })
        );
        assert!(CycleState::new(0, 28, standard_phases()).is_err());
    }

    #[test]
    fn rejects_gap_in_partition() {
        let phases = vec![
            CyclePhase::spanning("A", 1..=5, color()),
            CyclePhase::spanning("B", 7..=10, color()),
        ];
        let err = CycleState::new(1, 10, phases).unwrap_err();
        assert_eq!(err, CycleError::malformed("day 6 is not covered by any phase"));
    }

    #[test]
    fn rejects_overlapping_phases() {
        let phases = vec![
            CyclePhase::spanning("A", 1..=5, color()),
            CyclePhase::spanning("B", 5..=10, color()),
        ];
        let err = CycleState::new(1, 10, phases).unwrap_err();
        assert_eq!(err, CycleError::malformed("day 5 is claimed by both 'A' and 'B'"));
    }

    #[test]
    fn rejects_non_contiguous_phase() {
        let phases = vec![
            CyclePhase::new("A", vec![1, 3], color()),
            CyclePhase::new("B", vec![2, 4], color()),
        ];
        assert!(matches!(
            CycleState::new(1, 4, phases),
            Err(CycleError::MalformedPartition { .. })
        ));
    }

    #[test]
    fn rejects_day_beyond_cycle_length() {
        let phases = vec![CyclePhase::spanning("A", 1..=12, color())];
        assert!(matches!(
            CycleState::new(1, 10, phases),
            Err(CycleError::MalformedPartition { .. })
        ));
    }

    #[test]
    fn accepts_empty_phase_in_partition() {
        let phases = vec![
            CyclePhase::spanning("A", 1..=5, color()),
            CyclePhase::new("Empty", vec![], color()),
            CyclePhase::spanning("B", 6..=10, color()),
        ];
        let state = CycleState::new(6, 10, phases).unwrap();
        assert_eq!(state.current_phase().name(), "B");
        assert_eq!(state.segments().len(), 3);
    }

    #[test]
    fn phases_need_not_be_listed_in_day_order() {
        let phases = vec![
            CyclePhase::spanning("Late", 6..=10, color()),
            CyclePhase::spanning("Early", 1..=5, color()),
        ];
        let state = CycleState::new(2, 10, phases).unwrap();
        assert_eq!(state.current_phase().name(), "Early");
    }

    #[test]
    fn geometry_helpers_match_free_functions() {
        let state = CycleState::new(8, 28, standard_phases()).unwrap();
        let ring = RingGeometry::default();

        assert_eq!(state.progress_angle(), geometry::progress_angle(8, 28).unwrap());
        assert_eq!(
            state.indicator_position(&ring),
            geometry::indicator_position(8, 28, ring.radius, ring.center_offset).unwrap()
        );
        assert_eq!(
            state.segments(),
            geometry::phase_segments(state.phases(), 28).unwrap()
        );
    }

    #[test]
    fn phase_for_day_looks_up_any_day() {
        let state = CycleState::new(8, 28, standard_phases()).unwrap();
        assert_eq!(state.phase_for_day(15).map(CyclePhase::name), Some("Ovulation"));
        assert!(state.phase_for_day(0).is_none());
        assert!(state.phase_for_day(29).is_none());
    }

    #[test]
    fn serializes_without_internal_index() {
        let state = CycleState::new(8, 28, standard_phases()).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["currentDay"], 8);
        assert_eq!(json["totalDays"], 28);
        assert!(json.get("currentPhaseIndex").is_none());
    }
}
