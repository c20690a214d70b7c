//! Easing curves applied to the per-step approach rate.
//!
//! Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`, so
//! an eased rate still never overshoots the target and a saturated rate still
//! snaps.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum EasingFunction {
    /// Rate used as-is.
    #[default]
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite curve: `c1·3t(1-t)² + c2·3(1-t)t² + t³`.
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Cubic Hermite with c1=0.33, c2=1.0 for a natural ease-out feel.
    pub const EASE_OUT: Self = Self::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            Self::Linear => t,
            Self::QuadraticIn => t * t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::SqrtOut => t.sqrt(),
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 5] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::SqrtOut,
        EasingFunction::EASE_OUT,
    ];

    #[test]
    fn every_curve_saturates_at_one() {
        for easing in ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.evaluate(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.evaluate(7.5), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn every_curve_stays_in_unit_range() {
        for easing in ALL {
            for i in 0..=100 {
                let v = easing.evaluate(i as f32 / 100.0);
                assert!((0.0..=1.0).contains(&v), "{easing:?} at {i}: {v}");
            }
        }
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(EasingFunction::Linear.evaluate(-0.5), 0.0);
        assert_eq!(EasingFunction::EASE_OUT.evaluate(-0.5), 0.0);
    }

    #[test]
    fn quadratic_midpoints() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
        assert!((EasingFunction::SqrtOut.evaluate(0.25) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_out_leads_linear_early() {
        assert!(EasingFunction::EASE_OUT.evaluate(0.25) > 0.25);
    }

    #[test]
    fn default_is_linear() {
        assert_eq!(EasingFunction::default(), EasingFunction::Linear);
    }
}
