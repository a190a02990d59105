use async_trait::async_trait;

use super::ProviderError;
use crate::domain::settings::{Preferences, UserProfile};

/// Read-only port for the signed-in user's profile and preferences
#[async_trait]
pub trait ProfileReader: Send + Sync {
    async fn profile(&self) -> Result<UserProfile, ProviderError>;

    async fn preferences(&self) -> Result<Preferences, ProviderError>;
}
