//! Cycle module - phases, the validated cycle snapshot and ring geometry.
//!
//! - `CyclePhase` - a named run of days with a display colour
//! - `CycleState` - the tracked cycle; derives the current phase from the current day
//! - `geometry` - pure angle and point calculations for the phase ring
//! - `CycleProgress` - progress-bar view of the same snapshot

mod errors;
pub mod geometry;
mod phase;
mod progress;
mod state;

pub use errors::CycleError;
pub use geometry::{
    indicator_position, phase_segments, point_on_ring, progress_angle, resolve_phase_color,
    EdgeCoverage, PhaseSegment, RingGeometry, RingPoint,
};
pub use phase::CyclePhase;
pub use progress::CycleProgress;
pub use state::CycleState;
