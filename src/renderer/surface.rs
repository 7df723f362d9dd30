//! 2D drawing surface consumed by entity rendering
//!
//! Coordinates are surface pixels with the origin at the top-left and y
//! pointing down.

use glam::Vec2;

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// Minimal fill-only drawing API
pub trait Surface {
    /// Surface size in pixels
    fn size(&self) -> Vec2;

    /// Set the color used by subsequent fills
    fn set_fill_color(&mut self, color: Color);

    /// Erase a rectangle back to the background
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill an axis-aligned rectangle whose top-left corner is `(x, y)`
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill a closed convex polygon
    fn fill_path(&mut self, points: &[Vec2]);

    /// Fill a full circle
    fn fill_arc(&mut self, center: Vec2, radius: f32);

    /// Erase the whole surface
    fn clear(&mut self) {
        let size = self.size();
        self.clear_rect(0.0, 0.0, size.x, size.y);
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = [1.0, 0.0, 0.0, 1.0];
    pub const OBSTACLE: Color = [0.5, 0.5, 0.5, 1.0];
    pub const PICKUP: Color = [0.0, 0.5, 0.0, 1.0];
    pub const BACKGROUND: Color = [0.02, 0.02, 0.05, 1.0];
}
