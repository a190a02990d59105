//! GetDashboardHandler - Query handler for the home screen.
//!
//! Reads the day's cycle snapshot, health readings and profile from the
//! ports and assembles them into a `DashboardOverview`.

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::domain::cycle::{CycleProgress, RingGeometry};
use crate::domain::dashboard::{date_label, greeting, CycleRingView, DashboardOverview, MetricBar};
use crate::domain::foundation::DomainError;
use crate::ports::{ContentCatalog, CycleDataProvider, ProfileReader, ProviderError};

/// Query for the dashboard as of a moment in local time.
#[derive(Debug, Clone, Copy)]
pub struct GetDashboardQuery {
    /// Drives the greeting, the date label and which day's data is read.
    pub now: NaiveDateTime,
}

/// Result of a successful dashboard query.
pub type GetDashboardResult = DashboardOverview;

/// Errors from building the dashboard.
///
/// A provider that cannot produce a valid cycle reports it as
/// `ProviderError::InvalidData`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<DashboardError> for DomainError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Provider(e) => e.into(),
        }
    }
}

/// Handler for the dashboard overview.
pub struct GetDashboardHandler {
    cycle_data: Arc<dyn CycleDataProvider>,
    content: Arc<dyn ContentCatalog>,
    profiles: Arc<dyn ProfileReader>,
    ring: RingGeometry,
}

impl GetDashboardHandler {
    pub fn new(
        cycle_data: Arc<dyn CycleDataProvider>,
        content: Arc<dyn ContentCatalog>,
        profiles: Arc<dyn ProfileReader>,
        ring: RingGeometry,
    ) -> Self {
        Self {
            cycle_data,
            content,
            profiles,
            ring,
        }
    }

    pub async fn handle(
        &self,
        query: GetDashboardQuery,
    ) -> Result<GetDashboardResult, DashboardError> {
        let today = query.now.date();

        let state = self.cycle_data.cycle_state(today).await?;
        let phase = state.current_phase().name().to_string();
        tracing::debug!(
            %today,
            day = state.current_day(),
            total_days = state.total_days(),
            phase = %phase,
            "loaded cycle state"
        );

        let snapshot = self.cycle_data.health_snapshot(today).await?;
        let hormones = self.cycle_data.hormone_levels(today).await?;
        let profile = self.profiles.profile().await?;
        let daily_insights = self.content.daily_insights(&phase).await?;

        if snapshot.is_empty() {
            tracing::warn!(%today, "no health metrics for today");
        }

        let overview = DashboardOverview {
            greeting: greeting(query.now, profile.first_name()),
            date_label: date_label(today),
            cycle: CycleRingView::build(&state, &self.ring),
            progress: CycleProgress::from_state(&state),
            metrics: MetricBar::from_snapshot(&snapshot),
            daily_insights,
            hormones,
        };

        tracing::info!(
            day = overview.cycle.current_day,
            phase = %phase,
            metrics = overview.metrics.len(),
            "dashboard overview built"
        );
        Ok(overview)
    }
}
