use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// What `advance()` does when the delegate lists a vertex it has no target
/// for.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MissingTargetPolicy {
    /// Leave the vertex where it is for this step.
    #[default]
    Skip,
    /// Abort the step with [`QuantoViewError::MissingTarget`].
    ///
    /// [`QuantoViewError::MissingTarget`]: crate::error::QuantoViewError::MissingTarget
    Fail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Position animator parameters.
pub struct AnimationOptions {
    /// Fraction of the remaining gap closed per elapsed millisecond.
    #[schemars(title = "Approach Rate", range(min = 0.0, max = 0.05), extend("step" = 0.0001))]
    pub approach_rate: f32,
    /// Curve applied to the clamped per-step rate.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Handling of vertices the delegate cannot place.
    #[schemars(skip)]
    pub missing_target: MissingTargetPolicy,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            approach_rate: 0.0001,
            easing: EasingFunction::Linear,
            missing_target: MissingTargetPolicy::Skip,
        }
    }
}
