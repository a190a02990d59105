//! Cycle phase ring geometry.
//!
//! Pure functions that lay a cycle out on a 360° ring: one arc per phase,
//! sized by its share of the cycle's days, plus the point on the ring that
//! marks the current day. Angles are measured clockwise in degrees with 0°
//! at the top of the ring; renderer coordinates put 0° at the right, so
//! point conversion rotates by a quarter turn.
//!
//! Nothing here holds state. Identical inputs always give identical
//! outputs, so results may be cached by input tuple.

use serde::{Deserialize, Serialize};

use super::errors::{ensure_day_in_cycle, ensure_total_days, CycleError};
use super::CyclePhase;
use crate::domain::foundation::{ColorToken, DEFAULT_PHASE_COLOR};

/// Degrees in a full ring.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Offset between ring angles (0° = top) and renderer angles (0° = right).
pub const QUARTER_TURN_DEGREES: f64 = 90.0;

/// The arc a phase occupies on the ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSegment {
    pub name: String,
    pub color: ColorToken,
    pub day_count: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PhaseSegment {
    /// Angular width of the arc.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Rotation a renderer applies to a top-anchored arc so it starts at `start_angle`.
    pub fn rotation(&self) -> f64 {
        self.start_angle - QUARTER_TURN_DEGREES
    }

    /// Which quarter-edges of a bordered circle this arc paints.
    ///
    /// The top edge is always painted; each further edge is added once the
    /// sweep passes another quarter turn.
    pub fn edge_coverage(&self) -> EdgeCoverage {
        let sweep = self.sweep();
        EdgeCoverage {
            top: true,
            right: sweep > QUARTER_TURN_DEGREES,
            bottom: sweep > 2.0 * QUARTER_TURN_DEGREES,
            left: sweep > 3.0 * QUARTER_TURN_DEGREES,
        }
    }
}

/// Painted edges of a segment drawn as a rotated circle border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeCoverage {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

/// A point in renderer space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingPoint {
    pub x: f64,
    pub y: f64,
}

impl RingPoint {
    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &RingPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Dimensions of the rendered ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingGeometry {
    pub radius: f64,
    pub center_offset: f64,
    pub indicator_size: f64,
}

impl RingGeometry {
    pub fn new(radius: f64, center_offset: f64, indicator_size: f64) -> Self {
        Self {
            radius,
            center_offset,
            indicator_size,
        }
    }

    /// Top-left corner of the indicator dot centred on `point`.
    pub fn indicator_box(&self, point: RingPoint) -> RingPoint {
        let half = self.indicator_size / 2.0;
        RingPoint {
            x: point.x - half,
            y: point.y - half,
        }
    }
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self::new(90.0, 90.0, 16.0)
    }
}

/// Angle of `day` around the ring: `(day / total_days) * 360`.
///
/// # Errors
///
/// `InvalidTotalDays` when `total_days` is zero, `DayOutOfRange` when `day`
/// falls outside `[1, total_days]`.
pub fn progress_angle(day: u32, total_days: u32) -> Result<f64, CycleError> {
    ensure_day_in_cycle(day, total_days)?;
    Ok(f64::from(day) / f64::from(total_days) * FULL_TURN_DEGREES)
}

/// Lays phases out around the ring in the order given.
///
/// Each phase gets `(days / total_days) * 360` degrees starting where the
/// previous one ended. A phase with no days yields a zero-width segment.
/// When the phases partition `[1, total_days]` the last segment ends at 360°
/// up to floating-point rounding.
///
/// # Errors
///
/// `InvalidTotalDays` when `total_days` is zero.
pub fn phase_segments(
    phases: &[CyclePhase],
    total_days: u32,
) -> Result<Vec<PhaseSegment>, CycleError> {
    ensure_total_days(total_days)?;

    let total = f64::from(total_days);
    let mut start_angle = 0.0;
    let segments = phases
        .iter()
        .map(|phase| {
            let angle_size = phase.day_count() as f64 / total * FULL_TURN_DEGREES;
            let segment = PhaseSegment {
                name: phase.name().to_string(),
                color: phase.color().clone(),
                day_count: phase.day_count(),
                start_angle,
                end_angle: start_angle + angle_size,
            };
            start_angle += angle_size;
            segment
        })
        .collect();

    Ok(segments)
}

/// Converts a ring angle to a renderer-space point on a circle of `radius`
/// whose centre sits at `(center_offset, center_offset)`.
///
/// Angles are periodic: 0° and 360° land on the same point up to trig rounding.
pub fn point_on_ring(angle_degrees: f64, radius: f64, center_offset: f64) -> RingPoint {
    let radians = (angle_degrees - QUARTER_TURN_DEGREES).to_radians();
    RingPoint {
        x: radius * radians.cos() + center_offset,
        y: radius * radians.sin() + center_offset,
    }
}

/// Position of the current-day indicator on the ring.
///
/// # Errors
///
/// Same as [`progress_angle`].
pub fn indicator_position(
    day: u32,
    total_days: u32,
    radius: f64,
    center_offset: f64,
) -> Result<RingPoint, CycleError> {
    let angle = progress_angle(day, total_days)?;
    Ok(point_on_ring(angle, radius, center_offset))
}

/// Colour of the phase called `name`, or lavender when no phase matches.
pub fn resolve_phase_color<'a>(phases: &'a [CyclePhase], name: &str) -> &'a ColorToken {
    phases
        .iter()
        .find(|phase| phase.name() == name)
        .map(CyclePhase::color)
        .unwrap_or(&DEFAULT_PHASE_COLOR)
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
