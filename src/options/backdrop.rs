use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Backdrop", inline)]
#[serde(default)]
/// Page rectangle drawn behind the graph.
pub struct BackdropOptions {
    /// RGB fill of the page.
    pub page_background: [f32; 3],
    /// RGB outline of the page.
    pub border: [f32; 3],
}

impl Default for BackdropOptions {
    fn default() -> Self {
        Self {
            page_background: [1.0, 1.0, 1.0],
            border: [0.0, 0.0, 0.0],
        }
    }
}
