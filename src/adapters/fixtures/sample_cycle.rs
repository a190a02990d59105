//! Sample cycle data provider.
//!
//! Serves a 28-day cycle anchored so that the anchor date is day 8
//! (Follicular), with one fixed set of health readings for every day.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use once_cell::sync::Lazy;

use crate::domain::cycle::{CyclePhase, CycleState};
use crate::domain::foundation::{ColorToken, Percentage, Score};
use crate::domain::health::{HealthMetric, HealthSnapshot, HormoneLevel, MetricValue};
use crate::ports::{CycleDataProvider, ProviderError};

const SAMPLE_CYCLE_LENGTH: u32 = 28;
const SAMPLE_ANCHOR_DAY: u32 = 8;

static SAMPLE_PHASES: Lazy<Vec<CyclePhase>> = Lazy::new(|| {
    vec![
        CyclePhase::spanning("Menstrual", 1..=5, ColorToken::from_static("#F9A8D4")),
        CyclePhase::spanning("Follicular", 6..=13, ColorToken::from_static("#C4B5FD")),
        CyclePhase::spanning("Ovulation", 14..=15, ColorToken::from_static("#A5B4FC")),
        CyclePhase::spanning("Luteal", 16..=28, ColorToken::from_static("#818CF8")),
    ]
});

// (name, value, unit, color, score)
const SAMPLE_METRICS: [(&str, SampleValue, &str, &str, f64); 5] = [
    ("Heart Rate", SampleValue::Number(68.0), "bpm", "#F43F5E", 0.85),
    ("Sleep", SampleValue::Number(7.5), "hrs", "#8B5CF6", 0.75),
    ("Steps", SampleValue::Number(8432.0), "", "#10B981", 0.65),
    ("Energy", SampleValue::Text("Medium"), "", "#F59E0B", 0.5),
    ("Hydration", SampleValue::Number(2.1), "L", "#0EA5E9", 0.7),
];

const SAMPLE_HORMONES: [(&str, u8, &str); 3] = [
    ("Estrogen", 60, "#EC4899"),
    ("Progesterone", 20, "#8B5CF6"),
    ("Testosterone", 40, "#10B981"),
];

#[derive(Clone, Copy)]
enum SampleValue {
    Number(f64),
    Text(&'static str),
}

/// Provider that repeats one sample cycle forever around an anchor date.
#[derive(Debug, Clone)]
pub struct SampleCycleDataProvider {
    cycle_start: NaiveDate,
    earliest: Option<NaiveDate>,
}

impl SampleCycleDataProvider {
    /// `anchor` falls on day 8 of its cycle. Within a week of
    /// `NaiveDate::MIN` the cycle starts at `NaiveDate::MIN` instead.
    pub fn anchored_at(anchor: NaiveDate) -> Self {
        let cycle_start = anchor
            .checked_sub_signed(Duration::days(i64::from(SAMPLE_ANCHOR_DAY - 1)))
            .unwrap_or(NaiveDate::MIN);
        Self {
            cycle_start,
            earliest: None,
        }
    }

    /// Refuse dates before `earliest`, as a provider with a history
    /// horizon would.
    pub fn with_history_from(mut self, earliest: NaiveDate) -> Self {
        self.earliest = Some(earliest);
        self
    }

    /// 1-based day of the cycle `date` falls on.
    pub fn cycle_day(&self, date: NaiveDate) -> u32 {
        let offset = (date - self.cycle_start)
            .num_days()
            .rem_euclid(i64::from(SAMPLE_CYCLE_LENGTH));
        // rem_euclid keeps offset in 0..SAMPLE_CYCLE_LENGTH
        offset as u32 + 1
    }

    fn ensure_known(&self, date: NaiveDate) -> Result<(), ProviderError> {
        match self.earliest {
            Some(earliest) if date < earliest => Err(ProviderError::NoData(date)),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CycleDataProvider for SampleCycleDataProvider {
    async fn cycle_state(&self, date: NaiveDate) -> Result<CycleState, ProviderError> {
        self.ensure_known(date)?;
        let day = self.cycle_day(date);
        tracing::debug!(%date, day, total_days = SAMPLE_CYCLE_LENGTH, "serving sample cycle");
        Ok(CycleState::new(day, SAMPLE_CYCLE_LENGTH, SAMPLE_PHASES.clone())?)
    }

    async fn health_snapshot(&self, date: NaiveDate) -> Result<HealthSnapshot, ProviderError> {
        self.ensure_known(date)?;
        let metrics = SAMPLE_METRICS
            .iter()
            .map(|(name, value, unit, color, score)| -> Result<_, ProviderError> {
                Ok(HealthMetric {
                    name: (*name).to_string(),
                    value: match value {
                        SampleValue::Number(n) => MetricValue::Number(*n),
                        SampleValue::Text(t) => MetricValue::Text((*t).to_string()),
                    },
                    unit: (!unit.is_empty()).then(|| (*unit).to_string()),
                    color: ColorToken::parse(*color)?,
                    score: Score::try_new(*score)?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(HealthSnapshot::new(metrics))
    }

    async fn hormone_levels(&self, date: NaiveDate) -> Result<Vec<HormoneLevel>, ProviderError> {
        self.ensure_known(date)?;
        SAMPLE_HORMONES
            .iter()
            .map(|(name, level, color)| -> Result<_, ProviderError> {
                Ok(HormoneLevel {
                    name: (*name).to_string(),
                    level: Percentage::try_new(*level)?,
                    color: ColorToken::parse(*color)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn provider() -> SampleCycleDataProvider {
        SampleCycleDataProvider::anchored_at(june(10))
    }

    #[test]
    fn anchor_date_is_day_eight() {
        assert_eq!(provider().cycle_day(june(10)), 8);
    }

    #[test]
    fn cycle_day_wraps_in_both_directions() {
        let provider = provider();
        assert_eq!(provider.cycle_day(june(3)), 1);
        assert_eq!(provider.cycle_day(june(2)), 28);
        assert_eq!(provider.cycle_day(june(30)), 28);
        assert_eq!(provider.cycle_day(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()), 1);
    }

    #[test]
    fn anchoring_at_earliest_date_starts_cycle_there() {
        let provider = SampleCycleDataProvider::anchored_at(NaiveDate::MIN);
        assert_eq!(provider.cycle_day(NaiveDate::MIN), 1);

        let second = NaiveDate::MIN.succ_opt().unwrap();
        assert_eq!(SampleCycleDataProvider::anchored_at(second).cycle_day(second), 2);
    }

    #[tokio::test]
    async fn serves_follicular_state_on_anchor() {
        let state = provider().cycle_state(june(10)).await.unwrap();
        assert_eq!(state.current_day(), 8);
        assert_eq!(state.total_days(), 28);
        assert_eq!(state.current_phase().name(), "Follicular");
    }

    #[tokio::test]
    async fn serves_five_health_metrics() {
        let snapshot = provider().health_snapshot(june(10)).await.unwrap();
        assert_eq!(snapshot.metrics().len(), 5);
        assert_eq!(snapshot.get("Heart Rate").unwrap().display_value(), "68 bpm");
        assert_eq!(snapshot.get("Energy").unwrap().display_value(), "Medium");
        assert_eq!(snapshot.get("Steps").unwrap().unit, None);
        assert_eq!(snapshot.scores()["Hydration"].value(), 0.7);
    }

    #[tokio::test]
    async fn serves_hormone_levels() {
        let hormones = provider().hormone_levels(june(10)).await.unwrap();
        let names: Vec<_> = hormones.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Estrogen", "Progesterone", "Testosterone"]);
        assert_eq!(hormones[0].level.value(), 60);
    }

    #[tokio::test]
    async fn refuses_dates_before_history() {
        let provider = provider().with_history_from(june(1));
        assert_eq!(
            provider.cycle_state(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()).await,
            Err(ProviderError::NoData(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()))
        );
        assert!(provider.health_snapshot(june(1)).await.is_ok());
    }
}
