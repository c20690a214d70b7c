//! Delegate layouts: the contract the animator consumes, plus two
//! implementations.
//!
//! A [`Layout`] answers "where should this vertex be" for a fixed graph. It
//! may also be an [`IterativeLayout`], in which case someone else (a
//! [`Relaxer`](crate::animation::Relaxer) or the one-time warm-up) advances it
//! and the answers change between calls.

mod force;
mod static_layout;

use std::fmt::Debug;
use std::hash::Hash;

pub use force::{ForceLayout, ForceParams};
use glam::Vec2;
pub use static_layout::StaticLayout;

/// Opaque vertex handle supplied by the graph model.
pub trait VertexId: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// Produces a target position for every vertex of one bound graph.
pub trait Layout<V: VertexId>: Send + Sync {
    /// Snapshot of the vertices currently in the graph.
    fn vertices(&self) -> Vec<V>;

    /// Target position of a vertex, `None` if the layout cannot place it.
    fn target(&self, vertex: &V) -> Option<Vec2>;

    /// Width and height of the layout area.
    fn size(&self) -> Vec2;

    /// Reset the layout to its starting configuration.
    fn initialize(&self) {}

    /// Incremental relaxation capability, if the layout has one.
    fn as_iterative(&self) -> Option<&dyn IterativeLayout> {
        None
    }
}

/// A layout that converges over repeated steps.
pub trait IterativeLayout: Send + Sync {
    /// Run one relaxation step.
    fn step(&self);

    /// Whether further steps would change nothing.
    fn done(&self) -> bool;
}
