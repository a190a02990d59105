use async_trait::async_trait;

use crate::domain::settings::{Preferences, UserProfile};
use crate::ports::{ProfileReader, ProviderError};

/// Fixed profile for demos and tests.
#[derive(Debug, Clone)]
pub struct SampleProfileReader {
    profile: UserProfile,
    preferences: Preferences,
}

impl SampleProfileReader {
    pub fn new(profile: UserProfile, preferences: Preferences) -> Self {
        Self {
            profile,
            preferences,
        }
    }
}

impl Default for SampleProfileReader {
    fn default() -> Self {
        Self::new(
            UserProfile::new("Sarah Johnson", "sarah.johnson@example.com"),
            Preferences::default(),
        )
    }
}

#[async_trait]
impl ProfileReader for SampleProfileReader {
    async fn profile(&self) -> Result<UserProfile, ProviderError> {
        Ok(self.profile.clone())
    }

    async fn preferences(&self) -> Result<Preferences, ProviderError> {
        Ok(self.preferences)
    }
}
