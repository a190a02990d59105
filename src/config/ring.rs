//! Progress ring drawing configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::cycle::RingGeometry;

/// Dimensions of the dashboard progress ring, in pixels
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct RingConfig {
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Distance from the drawing origin to the ring centre
    #[serde(default = "default_center_offset")]
    pub center_offset: f64,

    /// Diameter of the current-day indicator dot
    #[serde(default = "default_indicator_size")]
    pub indicator_size: f64,
}

impl RingConfig {
    pub fn into_geometry(self) -> RingGeometry {
        RingGeometry::new(self.radius, self.center_offset, self.indicator_size)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("radius", self.radius),
            ("center_offset", self.center_offset),
            ("indicator_size", self.indicator_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidRingDimension { field, value });
            }
        }

        let diameter = self.radius * 2.0;
        if self.indicator_size > diameter {
            return Err(ValidationError::IndicatorTooLarge {
                indicator_size: self.indicator_size,
                diameter,
            });
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            center_offset: default_center_offset(),
            indicator_size: default_indicator_size(),
        }
    }
}

fn default_radius() -> f64 {
    90.0
}

fn default_center_offset() -> f64 {
    90.0
}

fn default_indicator_size() -> f64 {
    16.0
}
