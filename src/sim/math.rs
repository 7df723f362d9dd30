//! Distance and toroidal wrap helpers shared by every moving entity

use glam::Vec2;

/// Anything with a center position and a size (render extent / hit diameter)
pub trait Body {
    fn position(&self) -> Vec2;
    fn size(&self) -> f32;
}

/// Euclidean distance between two bodies' centers
#[inline]
pub fn distance<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> f32 {
    a.position().distance(b.position())
}

/// Wrap a coordinate onto `[min, max)`, reappearing at the opposite edge
#[inline]
pub fn wrap(coord: f32, min: f32, max: f32) -> f32 {
    if coord < min {
        max
    } else if coord >= max {
        min
    } else {
        coord
    }
}

/// Wrap both axes onto a surface of the given size (origin at top-left)
#[inline]
pub fn wrap_position(pos: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(wrap(pos.x, 0.0, bounds.x), wrap(pos.y, 0.0, bounds.y))
}
