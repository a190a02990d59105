//! Settings module - user profile, preference toggles and the static menu sections.

use serde::{Deserialize, Serialize};

/// The signed-in user as shown on the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
}

impl UserProfile {
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
        }
    }

    /// First letters of the first two words, upper-cased: "Sarah Johnson" -> "SJ".
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }
}

/// Preference switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub notifications_enabled: bool,
    pub dark_mode: bool,
}

impl Preferences {
    pub fn toggle_notifications(&self) -> Self {
        Self {
            notifications_enabled: !self.notifications_enabled,
            ..*self
        }
    }

    pub fn toggle_dark_mode(&self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..*self
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            dark_mode: false,
        }
    }
}

/// One row of a settings menu section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsItem {
    pub label: String,
    /// Secondary line under the label, e.g. "Version 1.0.0"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SettingsItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A titled group of rows such as "Account" or "Support".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSection {
    pub title: String,
    pub items: Vec<SettingsItem>,
}

impl SettingsSection {
    pub fn new(title: impl Into<String>, items: Vec<SettingsItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn item(&self, label: &str) -> Option<&SettingsItem> {
        self.items.iter().find(|item| item.label == label)
    }
}
