//! Application handlers.
//!
//! Query handlers that read from the ports and build screen read models.

pub mod dashboard;
pub mod insights;
pub mod settings;
pub mod tracking;

pub use dashboard::{DashboardError, GetDashboardHandler, GetDashboardQuery, GetDashboardResult};
pub use insights::{
    GetInsightCategoryHandler, GetInsightCategoryQuery, InsightCategoryDetail, InsightsError,
};
pub use settings::{GetSettingsHandler, SettingsView};
pub use tracking::{GetTrackingOptionsHandler, GetTrackingOptionsResult};
