//! Fruchterman–Reingold force-directed layout.

use std::sync::{Mutex, MutexGuard, PoisonError};

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use super::{IterativeLayout, Layout, VertexId};

const EPSILON: f32 = 1e-4;

/// Tuning for [`ForceLayout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    /// Steps after which the layout reports done.
    pub max_iterations: usize,
    /// Scales the ideal edge length used for attraction.
    pub attraction_multiplier: f32,
    /// Scales the ideal edge length used for repulsion.
    pub repulsion_multiplier: f32,
    /// Seed for initial placement of vertices added without a position.
    pub seed: u64,
}

impl Default for ForceParams {
    fn default() -> Self {
        Self {
            max_iterations: 700,
            attraction_multiplier: 0.75,
            repulsion_multiplier: 0.75,
            seed: 0x5eed,
        }
    }
}

struct ForceState<V> {
    positions: FxHashMap<V, Vec2>,
    edges: Vec<(V, V)>,
    temperature: f32,
    iteration: usize,
    rng: StdRng,
}

/// Iterative spring-electrical layout over an undirected edge list.
///
/// All vertices repel each other, edges pull their endpoints together, and
/// the maximum displacement per step (the temperature) cools down until the
/// layout freezes.
pub struct ForceLayout<V> {
    size: Vec2,
    params: ForceParams,
    state: Mutex<ForceState<V>>,
}

impl<V: VertexId> ForceLayout<V> {
    /// Empty layout covering `size` (at least one unit in each axis).
    #[must_use]
    pub fn new(size: Vec2, params: ForceParams) -> Self {
        let size = size.max(Vec2::ONE);
        Self {
            size,
            params,
            state: Mutex::new(ForceState {
                positions: FxHashMap::default(),
                edges: Vec::new(),
                temperature: size.x / 10.0,
                iteration: 0,
                rng: StdRng::seed_from_u64(params.seed),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ForceState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a vertex at a pseudo-random point inside the area.
    pub fn add_vertex(&self, vertex: V) {
        let mut state = self.lock();
        let position = Vec2::new(
            state.rng.random::<f32>() * self.size.x,
            state.rng.random::<f32>() * self.size.y,
        );
        let _ = state.positions.insert(vertex, position);
    }

    /// Add (or move) a vertex to an explicit point, clamped to the area.
    pub fn add_vertex_at(&self, vertex: V, position: Vec2) {
        let _ = self
            .lock()
            .positions
            .insert(vertex, position.clamp(Vec2::ZERO, self.size));
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex(&self, vertex: &V) {
        let mut state = self.lock();
        if state.positions.remove(vertex).is_some() {
            state.edges.retain(|(a, b)| a != vertex && b != vertex);
        }
    }

    /// Connect two vertices. Self-loops and unknown endpoints are ignored.
    pub fn add_edge(&self, a: V, b: V) {
        let mut state = self.lock();
        if a != b
            && state.positions.contains_key(&a)
            && state.positions.contains_key(&b)
        {
            state.edges.push((a, b));
        }
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.lock().edges.len()
    }

    /// Steps taken since the last [`initialize`](Layout::initialize).
    #[must_use]
    pub fn iteration(&self) -> usize {
        self.lock().iteration
    }

    fn is_frozen(&self, state: &ForceState<V>) -> bool {
        state.iteration >= self.params.max_iterations
            || state.temperature < 1.0 / self.size.max_element()
    }
}

impl<V: VertexId> Layout<V> for ForceLayout<V> {
    fn vertices(&self) -> Vec<V> {
        self.lock().positions.keys().cloned().collect()
    }

    fn target(&self, vertex: &V) -> Option<Vec2> {
        self.lock().positions.get(vertex).copied()
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn initialize(&self) {
        let mut state = self.lock();
        state.iteration = 0;
        state.temperature = self.size.x / 10.0;
    }

    fn as_iterative(&self) -> Option<&dyn IterativeLayout> {
        Some(self)
    }
}

impl<V: VertexId> IterativeLayout for ForceLayout<V> {
    fn step(&self) {
        let mut state = self.lock();
        if self.is_frozen(&state) {
            return;
        }

        let (ids, mut pos): (Vec<V>, Vec<Vec2>) = state
            .positions
            .iter()
            .map(|(v, p)| (v.clone(), *p))
            .unzip();
        let n = pos.len();

        if n > 0 {
            let edges: Vec<(usize, usize)> = {
                let index: FxHashMap<&V, usize> =
                    ids.iter().enumerate().map(|(i, v)| (v, i)).collect();
                state
                    .edges
                    .iter()
                    .filter_map(|(a, b)| {
                        Some((*index.get(a)?, *index.get(b)?))
                    })
                    .collect()
            };

            let k = (self.size.x * self.size.y / n as f32).sqrt();
            let k_attract = k * self.params.attraction_multiplier;
            let k_repulse = k * self.params.repulsion_multiplier;
            let mut disp = vec![Vec2::ZERO; n];

            for i in 0..n {
                for j in (i + 1)..n {
                    let delta = pos[i] - pos[j];
                    let dist = delta.length();
                    // Coincident vertices get pushed apart along x.
                    let dir = if dist < EPSILON { Vec2::X } else { delta / dist };
                    let push =
                        dir * (k_repulse * k_repulse / dist.max(EPSILON));
                    disp[i] += push;
                    disp[j] -= push;
                }
            }

            for &(a, b) in &edges {
                let delta = pos[a] - pos[b];
                let dist = delta.length();
                if dist < EPSILON {
                    continue;
                }
                let pull = delta / dist * (dist * dist / k_attract);
                disp[a] -= pull;
                disp[b] += pull;
            }

            for (p, d) in pos.iter_mut().zip(&disp) {
                let len = d.length();
                if len > EPSILON {
                    *p += *d / len * len.min(state.temperature);
                }
                *p = p.clamp(Vec2::ZERO, self.size);
            }

            for (v, p) in ids.into_iter().zip(pos) {
                let _ = state.positions.insert(v, p);
            }
        }

        state.iteration += 1;
        let progress = state.iteration as f32 / self.params.max_iterations as f32;
        state.temperature *= (1.0 - progress).max(0.0);
    }

    fn done(&self) -> bool {
        self.is_frozen(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(max_iterations: usize) -> ForceParams {
        ForceParams {
            max_iterations,
            ..ForceParams::default()
        }
    }

    #[test]
    fn edge_pulls_endpoints_together() {
        let layout = ForceLayout::new(Vec2::new(200.0, 100.0), params(50));
        layout.add_vertex_at("a", Vec2::new(10.0, 50.0));
        layout.add_vertex_at("b", Vec2::new(190.0, 50.0));
        layout.add_edge("a", "b");

        layout.step();

        let a = layout.target(&"a").unwrap();
        let b = layout.target(&"b").unwrap();
        assert!(a.distance(b) < 180.0, "distance {}", a.distance(b));
    }

    #[test]
    fn coincident_vertices_separate() {
        let layout = ForceLayout::new(Vec2::new(100.0, 100.0), params(50));
        layout.add_vertex_at(1_u32, Vec2::splat(50.0));
        layout.add_vertex_at(2_u32, Vec2::splat(50.0));

        layout.step();

        let a = layout.target(&1).unwrap();
        let b = layout.target(&2).unwrap();
        assert!(a.distance(b) > 1.0);
    }

    #[test]
    fn positions_stay_inside_area() {
        let size = Vec2::new(120.0, 80.0);
        let layout = ForceLayout::new(size, params(100));
        for v in 0..12_u32 {
            layout.add_vertex(v);
        }
        for v in 0..11_u32 {
            layout.add_edge(v, v + 1);
        }
        while !layout.done() {
            layout.step();
        }
        for v in layout.vertices() {
            let p = layout.target(&v).unwrap();
            assert!(p.cmpge(Vec2::ZERO).all() && p.cmple(size).all(), "{p}");
        }
    }

    #[test]
    fn freezes_after_max_iterations_and_initialize_thaws() {
        let layout = ForceLayout::new(Vec2::new(100.0, 100.0), params(5));
        layout.add_vertex("x");
        for _ in 0..5 {
            layout.step();
        }
        assert!(layout.done());

        let frozen = layout.target(&"x");
        layout.step();
        assert_eq!(layout.target(&"x"), frozen);

        layout.initialize();
        assert!(!layout.done());
        assert_eq!(layout.iteration(), 0);
    }

    #[test]
    fn edges_follow_vertex_lifecycle() {
        let layout = ForceLayout::new(Vec2::new(10.0, 10.0), params(5));
        layout.add_vertex("a");
        layout.add_vertex("b");
        layout.add_edge("a", "b");
        layout.add_edge("a", "a");
        layout.add_edge("a", "ghost");
        assert_eq!(layout.edge_count(), 1);

        layout.remove_vertex(&"b");
        assert_eq!(layout.edge_count(), 0);
        assert_eq!(layout.vertices(), vec!["a"]);
    }

    #[test]
    fn seeded_placement_is_reproducible() {
        let first = ForceLayout::new(Vec2::new(100.0, 100.0), params(5));
        let second = ForceLayout::new(Vec2::new(100.0, 100.0), params(5));
        first.add_vertex(7_u8);
        second.add_vertex(7_u8);
        assert_eq!(first.target(&7), second.target(&7));
    }
}
