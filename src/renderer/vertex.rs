//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte distance between consecutive vertices
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Raw bytes for upload to a vertex buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for scene elements
pub mod colors {
    use super::Color;

    /// Canvas clear color
    pub const BACKGROUND: Color = Color::BLACK;
    /// Letterbox color around the canvas
    pub const LETTERBOX: Color = Color::WHITE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);

        let verts = [Vertex::new(1.0, 2.0, [0.5, 0.5, 0.5, 1.0]); 3];
        assert_eq!(as_bytes(&verts).len(), 3 * Vertex::STRIDE);
    }
}
