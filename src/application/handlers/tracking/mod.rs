//! Tracking query handlers.

mod get_tracking_options;

pub use get_tracking_options::{GetTrackingOptionsHandler, GetTrackingOptionsResult};
