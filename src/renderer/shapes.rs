//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::sim::{Color, Rect};

/// Minimum segments for a recognizable disk
pub const MIN_DISK_SEGMENTS: u32 = 3;

/// Filled disk as a fan of `segments` triangles
pub fn disk(center: Vec2, radius: f32, segments: u32, color: Color) -> Vec<Vertex> {
    let segments = segments.max(MIN_DISK_SEGMENTS);
    let color = color.to_array();
    let mut vertices = Vec::with_capacity(segments as usize * 3);

    let point = |i: u32| {
        let theta = i as f32 / segments as f32 * TAU;
        center + Vec2::new(theta.cos(), theta.sin()) * radius
    };

    for i in 0..segments {
        let a = point(i);
        let b = point(i + 1);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Filled axis-aligned rectangle (two triangles)
pub fn rect(rect: &Rect, color: Color) -> Vec<Vertex> {
    let color = color.to_array();
    let (min, max) = (rect.min, rect.max);
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_vertices_on_circle() {
        let center = Vec2::new(70.0, 40.0);
        let verts = disk(center, 10.0, 32, Color::WHITE);
        assert_eq!(verts.len(), 32 * 3);

        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [center.x, center.y]);
            for v in &tri[1..] {
                let d = Vec2::from(v.position) - center;
                assert!((d.length() - 10.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_disk_segment_floor() {
        assert_eq!(disk(Vec2::ZERO, 1.0, 0, Color::WHITE).len(), 9);
    }

    #[test]
    fn test_rect_covers_corners() {
        let r = Rect::new(-1.0, -2.0, 3.0, 4.0);
        let verts = rect(&r, Color::WHITE);
        assert_eq!(verts.len(), 6);
        for corner in [[-1.0, -2.0], [3.0, -2.0], [3.0, 4.0], [-1.0, 4.0]] {
            assert!(verts.iter().any(|v| v.position == corner));
        }
        for v in &verts {
            let [x, y] = v.position;
            assert!(x == r.min.x || x == r.max.x);
            assert!(y == r.min.y || y == r.max.y);
        }
    }
}
