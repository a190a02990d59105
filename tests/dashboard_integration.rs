//! Integration tests wiring the sample adapters through the query handlers.
//!
//! These tests verify:
//! 1. The dashboard read model for the sample cycle
//! 2. Its JSON shape (camelCase, as the screens consume it)
//! 3. Insights, tracking and settings queries over the same adapters

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use cycle_companion::adapters::{
    SampleContentCatalog, SampleCycleDataProvider, SampleProfileReader,
};
use cycle_companion::application::{
    DashboardError, GetDashboardHandler, GetDashboardQuery, GetInsightCategoryHandler,
    GetInsightCategoryQuery, GetSettingsHandler, GetTrackingOptionsHandler,
};
use cycle_companion::config::RingConfig;
use cycle_companion::domain::cycle::RingGeometry;
use cycle_companion::domain::foundation::{EnergyLevelId, MoodId, SymptomId};
use cycle_companion::domain::insights::{InsightBrowser, InsightCategoryKey};
use cycle_companion::domain::tracking::{DailyTracking, TrackingAction};
use cycle_companion::ports::ProviderError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn june_10_at(hour: u32) -> NaiveDateTime {
    june(10).and_hms_opt(hour, 30, 0).unwrap()
}

fn dashboard_handler(ring: RingGeometry) -> GetDashboardHandler {
    GetDashboardHandler::new(
        Arc::new(SampleCycleDataProvider::anchored_at(june(10)).with_history_from(june(1))),
        Arc::new(SampleContentCatalog::new()),
        Arc::new(SampleProfileReader::default()),
        ring,
    )
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn dashboard_for_sample_day_eight() {
    let overview = dashboard_handler(RingGeometry::default())
        .handle(GetDashboardQuery { now: june_10_at(8) })
        .await
        .unwrap();

    assert_eq!(overview.greeting, "Good morning, Sarah");
    assert_eq!(overview.date_label, "Monday, June 10");

    let ring = &overview.cycle;
    assert_eq!(ring.current_day, 8);
    assert_eq!(ring.total_days, 28);
    assert_eq!(ring.current_phase, "Follicular");

    let bounds: Vec<(f64, f64)> = ring
        .segments
        .iter()
        .map(|s| (s.start_angle, s.end_angle))
        .collect();
    let expected = [
        (0.0, 64.29),
        (64.29, 167.14),
        (167.14, 192.86),
        (192.86, 360.0),
    ];
    for ((start, end), (want_start, want_end)) in bounds.iter().zip(expected) {
        assert!((start - want_start).abs() < 0.01, "start {}", start);
        assert!((end - want_end).abs() < 0.01, "end {}", end);
    }

    assert!((ring.indicator.x - 177.74).abs() < 0.1);
    assert!((ring.indicator.y - 110.03).abs() < 0.1);
    assert!((ring.indicator_box.x - 169.74).abs() < 0.1);
    assert_eq!(ring.indicator_color.as_str(), "#C4B5FD");

    let current: Vec<_> = ring.legend.iter().filter(|l| l.is_current).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].name, "Follicular");

    assert_eq!(overview.progress.percent_complete().value(), 28);
    assert_eq!(overview.progress.days_remaining(), 20);
    assert_eq!(overview.metrics.len(), 5);
    assert_eq!(overview.metrics[0].display_value, "68 bpm");
    assert_eq!(overview.metrics[0].fill.value(), 85);
    assert_eq!(overview.daily_insights.len(), 2);
    assert_eq!(overview.hormones.len(), 3);
}

#[tokio::test]
async fn dashboard_serializes_as_camel_case_json() {
    let overview = dashboard_handler(RingGeometry::default())
        .handle(GetDashboardQuery { now: june_10_at(19) })
        .await
        .unwrap();

    let json = serde_json::to_value(&overview).unwrap();
    assert_eq!(json["greeting"], "Good evening, Sarah");
    assert_eq!(json["dateLabel"], "Monday, June 10");
    assert_eq!(json["cycle"]["currentPhase"], "Follicular");
    assert_eq!(json["cycle"]["segments"][1]["dayCount"], 8);
    assert_eq!(json["cycle"]["indicatorColor"], "#C4B5FD");
    assert_eq!(json["progress"]["daysRemaining"], 20);
    assert_eq!(json["dailyInsights"][0]["title"], "Hydration Reminder");
}

#[tokio::test]
async fn dashboard_follows_configured_ring() {
    let ring = RingConfig {
        radius: 50.0,
        center_offset: 60.0,
        indicator_size: 10.0,
    };
    let overview = dashboard_handler(ring.into_geometry())
        .handle(GetDashboardQuery { now: june_10_at(13) })
        .await
        .unwrap();

    let point = overview.cycle.indicator;
    let distance = ((point.x - 60.0).powi(2) + (point.y - 60.0).powi(2)).sqrt();
    assert!((distance - 50.0).abs() < 1e-9);
    assert_eq!(overview.greeting, "Good afternoon, Sarah");
}

#[tokio::test]
async fn dashboard_later_in_cycle_has_no_follicular_tips() {
    let now = june(20).and_hms_opt(9, 0, 0).unwrap();
    let overview = dashboard_handler(RingGeometry::default())
        .handle(GetDashboardQuery { now })
        .await
        .unwrap();

    assert_eq!(overview.cycle.current_day, 18);
    assert_eq!(overview.cycle.current_phase, "Luteal");
    assert_eq!(overview.cycle.indicator_color.as_str(), "#818CF8");
    assert!(overview.daily_insights.is_empty());
}

#[tokio::test]
async fn dashboard_before_history_reports_no_data() {
    let now = NaiveDate::from_ymd_opt(2024, 5, 20)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let result = dashboard_handler(RingGeometry::default())
        .handle(GetDashboardQuery { now })
        .await;

    assert!(matches!(
        result,
        Err(DashboardError::Provider(ProviderError::NoData(_)))
    ));
}

// =============================================================================
// Insights, tracking and settings
// =============================================================================

#[tokio::test]
async fn browsing_an_insight_category() {
    let handler = GetInsightCategoryHandler::new(Arc::new(SampleContentCatalog::new()));
    let browser = InsightBrowser::new().open(InsightCategoryKey::Nutrition);

    let key = browser.open_category().unwrap();
    let detail = handler.handle(GetInsightCategoryQuery { key }).await.unwrap();

    assert_eq!(detail.category.name, "Nutrition");
    assert_eq!(detail.category.accent().as_str(), "#F59E0B");
    assert_eq!(detail.patterns_title, "Your Nutrition Patterns");
    assert_eq!(detail.category.insights.len(), 3);
    assert!(!browser.close().is_open());
}

#[tokio::test]
async fn tracking_a_day_with_catalog_options() {
    let handler = GetTrackingOptionsHandler::new(Arc::new(SampleContentCatalog::new()));
    let options = handler.handle().await.unwrap();

    let cramps = options.symptoms[0].id;
    let tracking = DailyTracking::new()
        .apply(TrackingAction::ToggleSymptom(cramps))
        .apply(TrackingAction::ToggleSymptom(SymptomId::new(3)))
        .apply(TrackingAction::ToggleSymptom(cramps))
        .apply(TrackingAction::SelectMood(MoodId::new(1)))
        .apply(TrackingAction::SelectEnergy(EnergyLevelId::new(2)));

    let entry = tracking.entry(june(10));
    assert_eq!(entry.symptoms, vec![SymptomId::new(3)]);
    assert_eq!(options.mood(entry.mood.unwrap()).unwrap().label, "Happy");
    assert_eq!(
        options.energy_level(entry.energy.unwrap()).unwrap().color.as_str(),
        "#FBBF24"
    );

    assert!(tracking.apply(TrackingAction::Reset).is_blank());
}

#[tokio::test]
async fn settings_for_sample_user() {
    let handler = GetSettingsHandler::new(
        Arc::new(SampleProfileReader::default()),
        Arc::new(SampleContentCatalog::new()),
    );
    let view = handler.handle().await.unwrap();

    assert_eq!(view.initials, "SJ");
    assert_eq!(view.profile.display_name, "Sarah Johnson");
    assert!(view.preferences.notifications_enabled);
    assert!(!view.preferences.dark_mode);

    let titles: Vec<_> = view.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Account", "Connected Devices", "Support"]);
    let wearables = view.sections[1].item("Wearable Devices").unwrap();
    assert_eq!(wearables.description.as_deref(), Some("Apple Watch, Oura Ring"));
}
