//! Triangle tessellation of surface draw calls
//!
//! `ShapeBatch` records every fill as colored triangles in surface pixel
//! coordinates. The GPU pipeline uploads the batch once per frame.

use glam::Vec2;
use std::f32::consts::PI;

use super::surface::{Color, Surface, colors};
use super::vertex::Vertex;

/// Triangle fan segments used for circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// A frame's worth of tessellated fills
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    size: Vec2,
    fill: Color,
    vertices: Vec<Vertex>,
}

impl ShapeBatch {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            fill: [1.0; 4],
            vertices: Vec::new(),
        }
    }

    /// Tessellated vertices (three per triangle)
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    fn push_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let (x2, y2) = (x + width, y + height);
        self.vertices.extend_from_slice(&[
            Vertex::new(x, y, color),
            Vertex::new(x2, y, color),
            Vertex::new(x, y2, color),
            Vertex::new(x, y2, color),
            Vertex::new(x2, y, color),
            Vertex::new(x2, y2, color),
        ]);
    }
}

impl Surface for ShapeBatch {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let covers_all =
            x <= 0.0 && y <= 0.0 && x + width >= self.size.x && y + height >= self.size.y;
        if covers_all {
            // Everything drawn so far is hidden; drop it
            self.vertices.clear();
        } else {
            self.push_rect(x, y, width, height, colors::BACKGROUND);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push_rect(x, y, width, height, self.fill);
    }

    fn fill_path(&mut self, points: &[Vec2]) {
        if points.len() < 3 {
            return;
        }
        let color = self.fill;
        let origin = points[0];
        for pair in points[1..].windows(2) {
            self.vertices.extend_from_slice(&[
                Vertex::at(origin, color),
                Vertex::at(pair[0], color),
                Vertex::at(pair[1], color),
            ]);
        }
    }

    fn fill_arc(&mut self, center: Vec2, radius: f32) {
        let color = self.fill;
        for i in 0..CIRCLE_SEGMENTS {
            let theta1 = (i as f32 / CIRCLE_SEGMENTS as f32) * 2.0 * PI;
            let theta2 = ((i + 1) as f32 / CIRCLE_SEGMENTS as f32) * 2.0 * PI;

            self.vertices.extend_from_slice(&[
                Vertex::at(center, color),
                Vertex::at(center + radius * Vec2::from_angle(theta1), color),
                Vertex::at(center + radius * Vec2::from_angle(theta2), color),
            ]);
        }
    }
}
