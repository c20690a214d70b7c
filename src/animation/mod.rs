//! Time-based animation of vertex positions toward a delegate layout.
//!
//! [`SmoothLayout`] is the piece the renderer talks to. [`prerelax`] and
//! [`Relaxer`] drive iterative delegates, and [`Clock`] abstracts the
//! timestamp source so animations can be replayed deterministically.

mod cell;
mod clock;
mod relaxer;
mod smooth;

pub use clock::{Clock, ManualClock, SystemClock};
pub use relaxer::{prerelax, Relaxer};
pub use smooth::SmoothLayout;
