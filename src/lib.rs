//! Drift Pilot - A tiny toroidal arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entities, world state, per-frame tick)
//! - `game_loop`: Running/stopped state machine driven by a frame scheduler
//! - `session`: Session setup, win/loss evaluation and restart
//! - `input`: Held-key state fed by keyboard events
//! - `display`: HUD/overlay sink
//! - `renderer`: Drawing surface abstraction and WebGPU pipeline
//! - `tuning`: Data-driven game balance

pub mod display;
pub mod game_loop;
pub mod input;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use display::{DisplaySink, HudText};
pub use game_loop::{FrameScheduler, GameLoop, LoopPhase, Outcome};
pub use input::{DirectionInput, InputState};
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Drawing surface dimensions (pixels)
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    /// Player ship defaults
    pub const PLAYER_SIZE: f32 = 20.0;
    /// Velocity added per tick per held direction
    pub const PLAYER_ACCEL: f32 = 0.1;
    /// Velocity scale applied every tick
    pub const PLAYER_FRICTION: f32 = 0.9;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 10;
    pub const OBSTACLE_MIN_SIZE: f32 = 20.0;
    pub const OBSTACLE_MAX_SIZE: f32 = 50.0;
    /// Per-axis velocity range is [-OBSTACLE_MAX_SPEED, OBSTACLE_MAX_SPEED)
    pub const OBSTACLE_MAX_SPEED: f32 = 1.0;

    /// Pickup defaults
    pub const PICKUP_SIZE: f32 = 10.0;
    /// Pickups needed to win
    pub const PICKUP_QUOTA: u32 = 5;

    pub const STARTING_LIVES: u32 = 3;
}
