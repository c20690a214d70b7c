//! Shared utilities: easing curves and frame cadence timing.

pub mod easing;
pub mod frame_timing;
