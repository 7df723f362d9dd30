//! Player ship, drifting obstacles and pickups

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::math::{Body, distance, wrap_position};
use crate::input::DirectionInput;
use crate::renderer::{Surface, colors};
use crate::tuning::Tuning;

/// True when the two bodies' hit circles overlap
pub fn check_collision<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> bool {
    distance(a, b) < a.size() / 2.0 + b.size() / 2.0
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Player {
    /// A stationary ship at `pos`
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
        }
    }

    /// Accelerate from held directions, apply friction, move, wrap
    pub fn update(&mut self, input: &DirectionInput, bounds: Vec2, tuning: &Tuning) {
        let accel = tuning.player_accel;
        if input.right {
            self.vel.x += accel;
        }
        if input.left {
            self.vel.x -= accel;
        }
        if input.up {
            self.vel.y -= accel;
        }
        if input.down {
            self.vel.y += accel;
        }

        self.vel *= tuning.player_friction;
        self.pos = wrap_position(self.pos + self.vel, bounds);
    }

    /// Upward-pointing triangle centered on the position
    pub fn render(&self, surface: &mut impl Surface) {
        let half = self.size / 2.0;
        surface.set_fill_color(colors::PLAYER);
        surface.fill_path(&[
            Vec2::new(self.pos.x, self.pos.y - half),
            Vec2::new(self.pos.x - half, self.pos.y + half),
            Vec2::new(self.pos.x + half, self.pos.y + half),
        ]);
    }
}

impl Body for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> f32 {
        self.size
    }
}

/// A drifting square the ship must avoid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Obstacle {
    /// Random position over the surface, random size and drift
    pub fn random(rng: &mut impl Rng, bounds: Vec2, tuning: &Tuning) -> Self {
        let speed = tuning.obstacle_max_speed;
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            ),
            vel: Vec2::new(
                rng.random_range(-speed..speed),
                rng.random_range(-speed..speed),
            ),
            size: rng.random_range(tuning.obstacle_min_size..tuning.obstacle_max_size),
        }
    }

    pub fn update(&mut self, bounds: Vec2) {
        self.pos = wrap_position(self.pos + self.vel, bounds);
    }

    /// Square anchored at its top-left corner (collision still treats the
    /// position as the center)
    pub fn render(&self, surface: &mut impl Surface) {
        surface.set_fill_color(colors::OBSTACLE);
        surface.fill_rect(self.pos.x, self.pos.y, self.size, self.size);
    }
}

impl Body for Obstacle {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> f32 {
        self.size
    }
}

/// A stationary item to collect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub size: f32,
}

impl Pickup {
    pub fn random(rng: &mut impl Rng, bounds: Vec2, size: f32) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            ),
            size,
        }
    }

    /// Filled circle of radius `size`
    pub fn render(&self, surface: &mut impl Surface) {
        surface.set_fill_color(colors::PICKUP);
        surface.fill_arc(self.pos, self.size);
    }
}

impl Body for Pickup {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn size(&self) -> f32 {
        self.size
    }
}
