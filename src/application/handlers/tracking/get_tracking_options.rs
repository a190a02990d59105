//! GetTrackingOptionsHandler - Query handler for the tracking screen's choices.

use std::sync::Arc;

use crate::domain::tracking::TrackingOptions;
use crate::ports::{ContentCatalog, ProviderError};

pub type GetTrackingOptionsResult = TrackingOptions;

/// Handler returning the symptoms, moods and energy levels a user can log.
pub struct GetTrackingOptionsHandler {
    content: Arc<dyn ContentCatalog>,
}

impl GetTrackingOptionsHandler {
    pub fn new(content: Arc<dyn ContentCatalog>) -> Self {
        Self { content }
    }

    pub async fn handle(&self) -> Result<GetTrackingOptionsResult, ProviderError> {
        let options = self.content.tracking_options().await?;
        tracing::debug!(
            symptoms = options.symptoms.len(),
            moods = options.moods.len(),
            energy_levels = options.energy_levels.len(),
            "loaded tracking options"
        );
        Ok(options)
    }
}
