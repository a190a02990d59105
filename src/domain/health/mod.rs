//! Health module - daily metrics and hormone levels.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{ColorToken, Percentage, Score};

/// Reading of a metric: a number or a qualitative label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Text(t) => f.write_str(t),
        }
    }
}

/// One bar on the "Today's Health" card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub name: String,
    pub value: MetricValue,
    pub unit: Option<String>,
    pub color: ColorToken,
    pub score: Score,
}

impl HealthMetric {
    /// Value with its unit: "68 bpm", "7.5 hrs", "Medium".
    pub fn display_value(&self) -> String {
        match self.unit.as_deref() {
            Some(unit) if !unit.is_empty() => format!("{} {}", self.value, unit),
            _ => self.value.to_string(),
        }
    }

    /// Width of the score bar.
    pub fn bar_fill(&self) -> Percentage {
        self.score.as_percentage()
    }
}

/// The day's metrics, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthSnapshot {
    metrics: Vec<HealthMetric>,
}

impl HealthSnapshot {
    pub fn new(metrics: Vec<HealthMetric>) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &[HealthMetric] {
        &self.metrics
    }

    pub fn get(&self, name: &str) -> Option<&HealthMetric> {
        self.metrics.iter().find(|m| m.name == name)
    }

    /// Metric name to score.
    pub fn scores(&self) -> BTreeMap<&str, Score> {
        self.metrics
            .iter()
            .map(|m| (m.name.as_str(), m.score))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// Relative level of a hormone, drawn as a filled bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HormoneLevel {
    pub name: String,
    pub level: Percentage,
    pub color: ColorToken,
}
