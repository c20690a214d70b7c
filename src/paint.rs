//! Paint descriptions for the renderer: vertex fills and the page backdrop.

use glam::Vec2;

use crate::options::{BackdropOptions, VertexColorOptions};

/// Quantum-graph vertex type, as far as coloring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexKind {
    /// Red (Z) spider.
    Red,
    /// Green (X) spider.
    Green,
    /// Hadamard box.
    Hadamard,
    /// Boundary vertex.
    Boundary,
}

impl VertexKind {
    /// Fill color for this kind under the given palette.
    #[must_use]
    pub fn color(self, palette: &VertexColorOptions) -> [f32; 3] {
        palette.color_for(self)
    }
}

/// Filled and outlined page rectangle in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    /// Top-left corner (always the layout origin).
    pub min: Vec2,
    /// Bottom-right corner (the layout size).
    pub max: Vec2,
    /// RGB fill.
    pub fill: [f32; 3],
    /// RGB outline.
    pub stroke: [f32; 3],
}

impl Backdrop {
    /// Backdrop covering a layout of the given size.
    #[must_use]
    pub fn new(size: Vec2, options: &BackdropOptions) -> Self {
        Self {
            min: Vec2::ZERO,
            max: size.max(Vec2::ZERO),
            fill: options.page_background,
            stroke: options.border,
        }
    }

    /// Width and height of the page.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Whether a layout-space point lies on the page (edges included).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
