use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::domain::cycle::{CycleProgress, CycleState, PhaseSegment, RingGeometry, RingPoint};
use crate::domain::foundation::{ColorToken, Percentage};
use crate::domain::health::{HealthSnapshot, HormoneLevel};
use crate::domain::insights::DailyInsight;

/// The home screen - everything the dashboard renders in one read model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    /// "Good morning, Sarah"
    pub greeting: String,
    /// "Monday, June 10"
    pub date_label: String,

    /// Segmented progress ring
    pub cycle: CycleRingView,

    /// Linear progress summary
    pub progress: CycleProgress,

    /// Today's Health card
    pub metrics: Vec<MetricBar>,

    pub daily_insights: Vec<DailyInsight>,

    pub hormones: Vec<HormoneLevel>,
}

/// Everything needed to draw the phase ring.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleRingView {
    pub current_day: u32,
    pub total_days: u32,
    pub current_phase: String,
    pub segments: Vec<PhaseSegment>,
    /// Centre of the indicator dot
    pub indicator: RingPoint,
    /// Top-left corner of the indicator dot
    pub indicator_box: RingPoint,
    pub indicator_color: ColorToken,
    pub legend: Vec<LegendEntry>,
}

impl CycleRingView {
    pub fn build(state: &CycleState, ring: &RingGeometry) -> Self {
        let current_phase = state.current_phase().name().to_string();
        let indicator = state.indicator_position(ring);

        let legend = state
            .phases()
            .iter()
            .map(|phase| LegendEntry {
                name: phase.name().to_string(),
                color: phase.color().clone(),
                is_current: phase.name() == current_phase,
            })
            .collect();

        Self {
            current_day: state.current_day(),
            total_days: state.total_days(),
            segments: state.segments(),
            indicator,
            indicator_box: ring.indicator_box(indicator),
            indicator_color: state.current_phase_color().clone(),
            current_phase,
            legend,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub name: String,
    pub color: ColorToken,
    pub is_current: bool,
}

/// A metric flattened for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricBar {
    pub name: String,
    pub display_value: String,
    pub color: ColorToken,
    pub fill: Percentage,
}

impl MetricBar {
    pub fn from_snapshot(snapshot: &HealthSnapshot) -> Vec<Self> {
        snapshot
            .metrics()
            .iter()
            .map(|metric| MetricBar {
                name: metric.name.clone(),
                display_value: metric.display_value(),
                color: metric.color.clone(),
                fill: metric.bar_fill(),
            })
            .collect()
    }
}

/// Time-of-day salutation.
pub fn greeting(now: NaiveDateTime, first_name: &str) -> String {
    let salutation = match now.hour() {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    };
    if first_name.is_empty() {
        salutation.to_string()
    } else {
        format!("{}, {}", salutation, first_name)
    }
}

/// "Monday, June 10"
pub fn date_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
