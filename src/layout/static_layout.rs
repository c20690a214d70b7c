use std::sync::{PoisonError, RwLock};

use glam::Vec2;
use rustc_hash::FxHashMap;

use super::{Layout, VertexId};

/// Layout whose targets are set from outside (e.g. by the editor when a
/// vertex is dragged or a graph is loaded with stored coordinates).
#[derive(Debug)]
pub struct StaticLayout<V> {
    size: Vec2,
    targets: RwLock<FxHashMap<V, Vec2>>,
}

impl<V: VertexId> StaticLayout<V> {
    /// Empty layout covering `size`.
    #[must_use]
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            targets: RwLock::new(FxHashMap::default()),
        }
    }

    /// Layout pre-populated with the given targets.
    #[must_use]
    pub fn with_targets(
        size: Vec2,
        targets: impl IntoIterator<Item = (V, Vec2)>,
    ) -> Self {
        Self {
            size,
            targets: RwLock::new(targets.into_iter().collect()),
        }
    }

    /// Place (or move) a vertex. Adds it to the graph if it was absent.
    pub fn set_location(&self, vertex: V, position: Vec2) {
        let _ = self
            .targets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(vertex, position);
    }

    /// Remove a vertex, returning its last target.
    pub fn remove(&self, vertex: &V) -> Option<Vec2> {
        self.targets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(vertex)
    }

    /// Whether the vertex is part of the graph.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.targets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(vertex)
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: VertexId> Layout<V> for StaticLayout<V> {
    fn vertices(&self) -> Vec<V> {
        self.targets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    fn target(&self, vertex: &V) -> Option<Vec2> {
        self.targets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(vertex)
            .copied()
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}
