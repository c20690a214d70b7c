use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::paint::VertexKind;

/// Fill colors per quantum-graph vertex kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Vertex Colors", inline)]
#[serde(default)]
pub struct VertexColorOptions {
    /// RGB fill for red (Z) spiders.
    pub red: [f32; 3],
    /// RGB fill for green (X) spiders.
    pub green: [f32; 3],
    /// RGB fill for Hadamard boxes.
    pub hadamard: [f32; 3],
    /// RGB fill for boundaries and anything else.
    pub other: [f32; 3],
}

impl Default for VertexColorOptions {
    fn default() -> Self {
        Self {
            red: [1.0, 0.0, 0.0],
            green: [0.0, 1.0, 0.0],
            hadamard: [1.0, 1.0, 0.0],
            other: [0.75, 0.75, 0.75],
        }
    }
}

impl VertexColorOptions {
    /// Fill color for a vertex kind.
    #[must_use]
    pub fn color_for(&self, kind: VertexKind) -> [f32; 3] {
        match kind {
            VertexKind::Red => self.red,
            VertexKind::Green => self.green,
            VertexKind::Hadamard => self.hadamard,
            VertexKind::Boundary => self.other,
        }
    }
}
