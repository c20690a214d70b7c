use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Relaxation", inline)]
#[serde(default)]
/// Warm-up and background relaxation of iterative layouts.
pub struct RelaxOptions {
    /// Wall-clock budget of the one-time warm-up, in milliseconds.
    #[schemars(title = "Prerelax Budget (ms)", range(min = 0, max = 5000))]
    pub prerelax_ms: u64,
    /// Hard cap on warm-up steps, whatever the clock says.
    #[schemars(skip)]
    pub prerelax_max_steps: usize,
    /// Pause between background relaxation steps, in milliseconds.
    #[schemars(title = "Relax Interval (ms)", range(min = 1, max = 200))]
    pub interval_ms: u64,
}

impl Default for RelaxOptions {
    fn default() -> Self {
        Self {
            prerelax_ms: 500,
            prerelax_max_steps: 10_000,
            interval_ms: 10,
        }
    }
}
