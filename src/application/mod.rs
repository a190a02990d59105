//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every screen is read-only, so only query handlers live here.

pub mod handlers;

pub use handlers::{
    DashboardError, GetDashboardHandler, GetDashboardQuery, GetDashboardResult,
    GetInsightCategoryHandler, GetInsightCategoryQuery, GetSettingsHandler,
    GetTrackingOptionsHandler, GetTrackingOptionsResult, InsightCategoryDetail, InsightsError,
    SettingsView,
};
