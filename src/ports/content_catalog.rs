//! Content Catalog Port - insight copy, tracking options and settings menu.

use async_trait::async_trait;

use super::ProviderError;
use crate::domain::insights::{DailyInsight, InsightCategory, InsightCategoryKey};
use crate::domain::settings::SettingsSection;
use crate::domain::tracking::TrackingOptions;

/// Port for the app's editorial content
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// All insight categories in display order.
    async fn insight_categories(&self) -> Result<Vec<InsightCategory>, ProviderError>;

    /// A single category, or `None` if the catalog has no such category.
    async fn insight_category(
        &self,
        key: InsightCategoryKey,
    ) -> Result<Option<InsightCategory>, ProviderError> {
        let categories = self.insight_categories().await?;
        Ok(categories.into_iter().find(|c| c.key == key))
    }

    /// Dashboard tips for the named phase. Unknown phases yield no tips.
    async fn daily_insights(&self, phase_name: &str) -> Result<Vec<DailyInsight>, ProviderError>;

    /// Symptoms, moods and energy levels offered on the tracking screen.
    async fn tracking_options(&self) -> Result<TrackingOptions, ProviderError>;

    /// Menu sections listed under the preference switches, in display order.
    async fn settings_sections(&self) -> Result<Vec<SettingsSection>, ProviderError>;
}
