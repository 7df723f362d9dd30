//! Simulation module
//!
//! All gameplay logic lives here. It must stay deterministic:
//! - Seeded RNG only
//! - Stable iteration order (obstacles by slot index)
//! - No platform dependencies; drawing only goes through `renderer::Surface`

pub mod entity;
pub mod math;
pub mod state;
pub mod tick;

pub use entity::{Obstacle, Pickup, Player, check_collision};
pub use math::{Body, distance, wrap, wrap_position};
pub use state::{PickupResolution, World};
pub use tick::{TickReport, tick};
