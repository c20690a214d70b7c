//! Smooth layout decorator.
//!
//! Wraps a delegate [`Layout`] and keeps its own *displayed* position per
//! vertex. Every [`advance`](SmoothLayout::advance) moves each displayed
//! position a fraction of the way toward the delegate's current target, the
//! fraction growing with the wall-clock time since the previous advance.
//! Renderers read displayed positions with
//! [`position`](SmoothLayout::position) from any thread.

use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard,
    RwLockWriteGuard,
};

use glam::Vec2;
use rustc_hash::FxHashMap;
use web_time::Instant;

use super::cell::PositionCell;
use super::clock::{Clock, SystemClock};
use super::relaxer::prerelax;
use crate::error::QuantoViewError;
use crate::layout::{Layout, VertexId};
use crate::options::{AnimationOptions, MissingTargetPolicy, RelaxOptions};

#[derive(Debug, Default)]
struct StepState {
    /// `None` until the first advance after (re)initialization.
    last_tick: Option<Instant>,
    steps: u64,
}

/// Animates vertices from where they were drawn toward where the delegate
/// layout wants them.
///
/// Share it as `Arc<SmoothLayout<..>>` between the thread that ticks it and
/// the thread that paints.
pub struct SmoothLayout<V, L, C = SystemClock> {
    delegate: Arc<L>,
    clock: C,
    options: AnimationOptions,
    relax: RelaxOptions,
    positions: RwLock<FxHashMap<V, PositionCell>>,
    step: Mutex<StepState>,
}

impl<V: VertexId, L: Layout<V>> SmoothLayout<V, L> {
    /// Animator with default options on the wall clock.
    #[must_use]
    pub fn new(delegate: Arc<L>) -> Self {
        Self::with_options(
            delegate,
            &AnimationOptions::default(),
            &RelaxOptions::default(),
        )
    }

    /// Animator with explicit options on the wall clock.
    #[must_use]
    pub fn with_options(
        delegate: Arc<L>,
        options: &AnimationOptions,
        relax: &RelaxOptions,
    ) -> Self {
        Self::with_clock(delegate, options, relax, SystemClock)
    }
}

impl<V: VertexId, L: Layout<V>, C: Clock> SmoothLayout<V, L, C> {
    /// Animator reading time from `clock`.
    ///
    /// Every vertex the delegate can already place starts out displayed at
    /// its target, so positions are defined before the first advance.
    #[must_use]
    pub fn with_clock(
        delegate: Arc<L>,
        options: &AnimationOptions,
        relax: &RelaxOptions,
        clock: C,
    ) -> Self {
        let baseline: FxHashMap<V, PositionCell> = delegate
            .vertices()
            .into_iter()
            .filter_map(|v| {
                let target = delegate.target(&v)?;
                Some((v, PositionCell::new(target)))
            })
            .collect();
        log::debug!("smooth layout starts with {} vertices", baseline.len());

        let mut options = options.clone();
        // NaN and negative rates both mean "do not move".
        options.approach_rate = options.approach_rate.max(0.0);

        Self {
            delegate,
            clock,
            options,
            relax: relax.clone(),
            positions: RwLock::new(baseline),
            step: Mutex::new(StepState::default()),
        }
    }

    /// Reset timing, initialize the delegate and, if it is iterative, warm
    /// it up once. Returns the number of warm-up steps run.
    pub fn initialize(&self) -> usize {
        let mut step = self.lock_step();
        step.last_tick = None;
        self.delegate.initialize();

        self.delegate.as_iterative().map_or(0, |iterative| {
            prerelax(iterative, &self.clock, &self.relax)
        })
    }

    /// One frame tick: move every vertex of the graph toward its target.
    ///
    /// Returns `Ok(true)` if at least one vertex was still a pixel or more
    /// away from its target at the start of the step.
    ///
    /// # Errors
    ///
    /// Returns [`QuantoViewError::MissingTarget`] when the delegate lists a
    /// vertex it cannot place and the policy is
    /// [`MissingTargetPolicy::Fail`]. A failed step moves nothing and is not
    /// recorded, so the next step measures time from the last successful one.
    pub fn advance(&self) -> Result<bool, QuantoViewError> {
        let mut step = self.lock_step();
        let now = self.clock.now();
        let last = step.last_tick.unwrap_or(now);
        let rate = self.rate_for(now, last);

        let targets = self.resolve_targets()?;
        let mut moved = false;
        for (vertex, target) in targets {
            moved |= self.tick_vertex(vertex, target, rate);
        }

        step.last_tick = Some(now.max(last));
        step.steps += 1;
        Ok(moved)
    }

    /// The animation never reports itself finished: targets can keep moving
    /// under a live relaxation, so callers decide when to stop ticking.
    #[must_use]
    pub fn is_done(&self) -> bool {
        false
    }

    /// Displayed position of a vertex, or `None` if it was never seen.
    #[must_use]
    pub fn position(&self, vertex: &V) -> Option<Vec2> {
        self.read_positions().get(vertex).map(PositionCell::load)
    }

    /// Snapshot of every displayed position.
    #[must_use]
    pub fn positions(&self) -> Vec<(V, Vec2)> {
        self.read_positions()
            .iter()
            .map(|(v, cell)| (v.clone(), cell.load()))
            .collect()
    }

    /// The wrapped layout.
    #[must_use]
    pub fn delegate(&self) -> &Arc<L> {
        &self.delegate
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    /// Number of completed advances.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.lock_step().steps
    }

    fn rate_for(&self, now: Instant, last: Instant) -> f32 {
        let elapsed_ms =
            (now.saturating_duration_since(last).as_secs_f64() * 1000.0) as f32;
        let t = (elapsed_ms * self.options.approach_rate).clamp(0.0, 1.0);
        self.options.easing.evaluate(t)
    }

    /// Read every target before any displayed position is touched, so a
    /// failing step leaves the animation exactly as it was.
    fn resolve_targets(&self) -> Result<Vec<(V, Vec2)>, QuantoViewError> {
        let vertices = self.delegate.vertices();
        let mut targets = Vec::with_capacity(vertices.len());
        for vertex in vertices {
            if let Some(target) = self.delegate.target(&vertex) {
                targets.push((vertex, target));
                continue;
            }
            match self.options.missing_target {
                MissingTargetPolicy::Skip => {
                    log::debug!("no target for {vertex:?}, skipping");
                }
                MissingTargetPolicy::Fail => {
                    return Err(QuantoViewError::MissingTarget(format!(
                        "{vertex:?}"
                    )));
                }
            }
        }
        Ok(targets)
    }

    fn tick_vertex(&self, vertex: V, target: Vec2, rate: f32) -> bool {
        if let Some(cell) = self.read_positions().get(&vertex) {
            return approach(cell, target, rate);
        }

        log::trace!("{vertex:?} enters at {target}");
        let _ = self
            .write_positions()
            .entry(vertex)
            .or_insert_with(|| PositionCell::new(target));
        false
    }

    fn lock_step(&self) -> MutexGuard<'_, StepState> {
        self.step.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_positions(&self) -> RwLockReadGuard<'_, FxHashMap<V, PositionCell>> {
        self.positions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_positions(
        &self,
    ) -> RwLockWriteGuard<'_, FxHashMap<V, PositionCell>> {
        self.positions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Move one displayed position toward `target`. Returns whether the vertex
/// still had a gap of a pixel or more.
fn approach(cell: &PositionCell, target: Vec2, rate: f32) -> bool {
    let source = cell.load();
    let delta = target - source;

    if delta.trunc() == Vec2::ZERO {
        cell.store(target);
        return false;
    }

    cell.store(if rate >= 1.0 {
        target
    } else {
        source + delta * rate
    });
    true
}

/// The animator is itself a layout whose "targets" are the displayed
/// positions, so it can stand in wherever a layout is painted.
impl<V: VertexId, L: Layout<V>, C: Clock> Layout<V> for SmoothLayout<V, L, C> {
    fn vertices(&self) -> Vec<V> {
        self.delegate.vertices()
    }

    fn target(&self, vertex: &V) -> Option<Vec2> {
        self.position(vertex)
    }

    fn size(&self) -> Vec2 {
        self.delegate.size()
    }

    fn initialize(&self) {
        let _ = Self::initialize(self);
    }
}
