//! Dashboard query handlers.
//!
//! Read-only handler assembling the home screen from the data ports.

mod get_dashboard;

pub use get_dashboard::{
    DashboardError, GetDashboardHandler, GetDashboardQuery, GetDashboardResult,
};
