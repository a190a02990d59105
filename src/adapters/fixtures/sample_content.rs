//! Sample content catalog: insight categories, daily tips, tracking options and
//! settings menu sections.

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::domain::foundation::{ColorToken, EnergyLevelId, MoodId, SymptomId};
use crate::domain::insights::{DailyInsight, InsightCategory, InsightCategoryKey};
use crate::domain::settings::{SettingsItem, SettingsSection};
use crate::domain::tracking::{EnergyLevel, MoodOption, Symptom, TrackingOptions};
use crate::ports::{ContentCatalog, ProviderError};

static CATEGORIES: Lazy<Vec<InsightCategory>> = Lazy::new(|| {
    vec![
        category(
            InsightCategoryKey::Physical,
            "Physical Activity",
            ("#10B981", "#059669"),
            [
                "Your activity levels are 20% higher during the follicular phase.",
                "Consider high-intensity workouts for the next 5 days to maximize energy.",
                "Your recovery time is optimal right now - a good time for strength training.",
            ],
        ),
        category(
            InsightCategoryKey::Nutrition,
            "Nutrition",
            ("#F59E0B", "#D97706"),
            [
                "Iron-rich foods are especially beneficial during your menstrual phase.",
                "Your body may crave more carbohydrates during the luteal phase.",
                "Consider increasing magnesium intake to help with PMS symptoms.",
            ],
        ),
        category(
            InsightCategoryKey::Sleep,
            "Sleep",
            ("#6366F1", "#4F46E5"),
            [
                "Your sleep quality decreases by 15% during the luteal phase.",
                "Try going to bed 30 minutes earlier during your luteal phase.",
                "Your deep sleep cycles are most efficient during the follicular phase.",
            ],
        ),
        category(
            InsightCategoryKey::Mood,
            "Mood",
            ("#EC4899", "#DB2777"),
            [
                "Anxiety tends to peak 2-3 days before your period starts.",
                "Mindfulness practices have shown to reduce your PMS symptoms by 30%.",
                "Your mood is typically most stable during the follicular phase.",
            ],
        ),
        category(
            InsightCategoryKey::Cycle,
            "Cycle",
            ("#8B5CF6", "#7C3AED"),
            [
                "Your cycle has been consistent at 28-30 days for the past 3 months.",
                "Your PMS symptoms typically begin 5 days before your period.",
                "Your ovulation usually occurs between days 14-15 of your cycle.",
            ],
        ),
        category(
            InsightCategoryKey::Energy,
            "Energy",
            ("#F43F5E", "#E11D48"),
            [
                "Your energy levels peak during the follicular phase.",
                "You typically experience an energy dip 2 days before your period.",
                "Afternoon fatigue is most common during your luteal phase.",
            ],
        ),
    ]
});

static TRACKING_OPTIONS: Lazy<TrackingOptions> = Lazy::new(|| TrackingOptions {
    symptoms: ["Cramps", "Headache", "Fatigue", "Bloating", "Mood Swings"]
        .into_iter()
        .zip(1u8..)
        .map(|(name, id)| Symptom {
            id: SymptomId::new(id),
            name: name.to_string(),
        })
        .collect(),
    moods: [
        ("😊", "Happy"),
        ("😐", "Neutral"),
        ("😔", "Sad"),
        ("😡", "Irritable"),
        ("😴", "Tired"),
    ]
    .into_iter()
    .zip(1u8..)
    .map(|((emoji, label), id)| MoodOption {
        id: MoodId::new(id),
        emoji: emoji.to_string(),
        label: label.to_string(),
    })
    .collect(),
    energy_levels: [("Low", "#F87171"), ("Medium", "#FBBF24"), ("High", "#34D399")]
        .into_iter()
        .zip(1u8..)
        .map(|((label, color), id)| EnergyLevel {
            id: EnergyLevelId::new(id),
            label: label.to_string(),
            color: ColorToken::from_static(color),
        })
        .collect(),
});

static SETTINGS_SECTIONS: Lazy<Vec<SettingsSection>> = Lazy::new(|| {
    vec![
        SettingsSection::new(
            "Account",
            vec![
                SettingsItem::new("Personal Information"),
                SettingsItem::new("Privacy & Security"),
            ],
        ),
        SettingsSection::new(
            "Connected Devices",
            vec![SettingsItem::new("Wearable Devices").with_description("Apple Watch, Oura Ring")],
        ),
        SettingsSection::new(
            "Support",
            vec![
                SettingsItem::new("Help & Support"),
                SettingsItem::new("About Buddy").with_description("Version 1.0.0"),
            ],
        ),
    ]
});

fn category(
    key: InsightCategoryKey,
    name: &str,
    (from, to): (&'static str, &'static str),
    insights: [&str; 3],
) -> InsightCategory {
    InsightCategory {
        key,
        name: name.to_string(),
        gradient: (ColorToken::from_static(from), ColorToken::from_static(to)),
        insights: insights.iter().map(|s| s.to_string()).collect(),
    }
}

fn tip(title: &str, body: &str) -> DailyInsight {
    DailyInsight {
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Catalog backed by the app's built-in copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleContentCatalog;

impl SampleContentCatalog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentCatalog for SampleContentCatalog {
    async fn insight_categories(&self) -> Result<Vec<InsightCategory>, ProviderError> {
        Ok(CATEGORIES.clone())
    }

    async fn daily_insights(&self, phase_name: &str) -> Result<Vec<DailyInsight>, ProviderError> {
        let tips = match phase_name {
            "Follicular" => vec![
                tip(
                    "Hydration Reminder",
                    "During your follicular phase, staying well-hydrated can help with \
                     energy levels. Aim for 2.5-3 liters today.",
                ),
                tip(
                    "Workout Suggestion",
                    "Your energy is typically higher during this phase. Consider strength \
                     training or high-intensity workouts today.",
                ),
            ],
            _ => {
                tracing::debug!(phase = phase_name, "no daily insights for phase");
                vec![]
            }
        };
        Ok(tips)
    }

    async fn tracking_options(&self) -> Result<TrackingOptions, ProviderError> {
        Ok(TRACKING_OPTIONS.clone())
    }

    async fn settings_sections(&self) -> Result<Vec<SettingsSection>, ProviderError> {
        Ok(SETTINGS_SECTIONS.clone())
    }
}
