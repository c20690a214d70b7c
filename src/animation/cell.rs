use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;

/// A displayed position stored as one 64-bit word: x bits high, y bits low.
///
/// Readers on another thread see either the old or the new pair, never a
/// mix of the two.
#[derive(Debug)]
pub(crate) struct PositionCell(AtomicU64);

impl PositionCell {
    pub(crate) fn new(position: Vec2) -> Self {
        Self(AtomicU64::new(pack(position)))
    }

    pub(crate) fn load(&self) -> Vec2 {
        unpack(self.0.load(Ordering::Acquire))
    }

    pub(crate) fn store(&self, position: Vec2) {
        self.0.store(pack(position), Ordering::Release);
    }
}

fn pack(p: Vec2) -> u64 {
    (u64::from(p.x.to_bits()) << 32) | u64::from(p.y.to_bits())
}

fn unpack(bits: u64) -> Vec2 {
    Vec2::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
}
