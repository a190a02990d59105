//! Settings query handlers.

mod get_settings;

pub use get_settings::{GetSettingsHandler, SettingsView};
