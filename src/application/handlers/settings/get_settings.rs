//! GetSettingsHandler - Query handler for the settings screen.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::settings::{Preferences, SettingsSection, UserProfile};
use crate::ports::{ContentCatalog, ProfileReader, ProviderError};

/// Profile card, preference switches and the menu sections below them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub profile: UserProfile,
    /// Avatar text, e.g. "SJ"
    pub initials: String,
    pub preferences: Preferences,
    pub sections: Vec<SettingsSection>,
}

pub struct GetSettingsHandler {
    profiles: Arc<dyn ProfileReader>,
    content: Arc<dyn ContentCatalog>,
}

impl GetSettingsHandler {
    pub fn new(profiles: Arc<dyn ProfileReader>, content: Arc<dyn ContentCatalog>) -> Self {
        Self { profiles, content }
    }

    pub async fn handle(&self) -> Result<SettingsView, ProviderError> {
        let profile = self.profiles.profile().await?;
        let preferences = self.profiles.preferences().await?;
        let sections = self.content.settings_sections().await?;

        tracing::debug!(sections = sections.len(), "settings view built");
        Ok(SettingsView {
            initials: profile.initials(),
            profile,
            preferences,
            sections,
        })
    }
}
