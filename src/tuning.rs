//! Data-driven game balance
//!
//! Every field falls back to its `consts` default, so a partial JSON document
//! only overrides what it names.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Surface ===
    pub surface_width: f32,
    pub surface_height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_accel: f32,
    pub player_friction: f32,

    // === Obstacles ===
    pub obstacle_count: usize,
    pub obstacle_min_size: f32,
    pub obstacle_max_size: f32,
    pub obstacle_max_speed: f32,

    // === Pickups / scoring ===
    pub pickup_size: f32,
    pub pickup_quota: u32,
    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            player_size: PLAYER_SIZE,
            player_accel: PLAYER_ACCEL,
            player_friction: PLAYER_FRICTION,

            obstacle_count: OBSTACLE_COUNT,
            obstacle_min_size: OBSTACLE_MIN_SIZE,
            obstacle_max_size: OBSTACLE_MAX_SIZE,
            obstacle_max_speed: OBSTACLE_MAX_SPEED,

            pickup_size: PICKUP_SIZE,
            pickup_quota: PICKUP_QUOTA,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "drift_pilot_tuning";

    /// Surface size as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.surface_width, self.surface_height)
    }

    /// Parse tuning from JSON; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::sanitized)
    }

    /// Repair values that would break the game rules
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        repair(&mut self.surface_width, defaults.surface_width);
        repair(&mut self.surface_height, defaults.surface_height);
        repair(&mut self.player_size, defaults.player_size);
        repair(&mut self.pickup_size, defaults.pickup_size);
        repair(&mut self.obstacle_min_size, defaults.obstacle_min_size);
        repair(&mut self.obstacle_max_size, defaults.obstacle_max_size);
        repair(&mut self.obstacle_max_speed, defaults.obstacle_max_speed);
        // Drift is sampled from -speed..speed; the span must stay finite
        if !(2.0 * self.obstacle_max_speed).is_finite() {
            self.obstacle_max_speed = defaults.obstacle_max_speed;
        }

        if !(self.obstacle_max_size > self.obstacle_min_size) {
            self.obstacle_max_size = self.obstacle_min_size + 1.0;
        }
        // A huge minimum absorbs the +1; fall back to the default range
        let span = self.obstacle_max_size - self.obstacle_min_size;
        if !(span > 0.0 && span.is_finite()) {
            self.obstacle_min_size = defaults.obstacle_min_size;
            self.obstacle_max_size = defaults.obstacle_max_size;
        }

        if !self.player_accel.is_finite() {
            self.player_accel = defaults.player_accel;
        }
        if !self.player_friction.is_finite() {
            self.player_friction = defaults.player_friction;
        }
        self.player_friction = self.player_friction.clamp(0.0, 1.0);
        self.pickup_quota = self.pickup_quota.max(1);
        self.starting_lives = self.starting_lives.max(1);

        self
    }

    /// Load tuning overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning overrides from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring invalid tuning overrides: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// Replace anything that is not a positive finite number
fn repair(value: &mut f32, default: f32) {
    if !(value.is_finite() && *value > 0.0) {
        *value = default;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.obstacle_count, 10);
        assert_eq!(tuning.pickup_quota, 5);
        assert_eq!(tuning.starting_lives, 3);
        assert_eq!(tuning.bounds(), Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "obstacle_count": 4, "pickup_quota": 2 }"#).unwrap();
        assert_eq!(tuning.obstacle_count, 4);
        assert_eq!(tuning.pickup_quota, 2);
        assert_eq!(tuning.starting_lives, STARTING_LIVES);
        assert_eq!(tuning.player_size, PLAYER_SIZE);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            surface_width: 1024.0,
            starting_lives: 7,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let tuning = Tuning {
            surface_width: -5.0,
            obstacle_min_size: 40.0,
            obstacle_max_size: 10.0,
            pickup_quota: 0,
            starting_lives: 0,
            player_friction: 1.5,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(tuning.surface_width, SURFACE_WIDTH);
        assert!(tuning.obstacle_max_size > tuning.obstacle_min_size);
        assert_eq!(tuning.pickup_quota, 1);
        assert_eq!(tuning.starting_lives, 1);
        assert_eq!(tuning.player_friction, 1.0);
    }

    #[test]
    fn test_sanitized_rejects_non_finite() {
        let tuning = Tuning::from_json(
            r#"{ "obstacle_max_speed": 1e39, "surface_width": 1e39, "player_size": -1, "pickup_size": 0 }"#,
        )
        .unwrap();

        assert_eq!(tuning.obstacle_max_speed, OBSTACLE_MAX_SPEED);
        assert_eq!(tuning.surface_width, SURFACE_WIDTH);
        assert_eq!(tuning.player_size, PLAYER_SIZE);
        assert_eq!(tuning.pickup_size, PICKUP_SIZE);
    }

    #[test]
    fn test_sanitized_restores_absorbed_size_range() {
        let tuning =
            Tuning::from_json(r#"{ "obstacle_min_size": 3e38, "obstacle_max_size": 1.0 }"#).unwrap();
        assert_eq!(tuning.obstacle_min_size, OBSTACLE_MIN_SIZE);
        assert_eq!(tuning.obstacle_max_size, OBSTACLE_MAX_SIZE);
    }

    #[test]
    fn test_sanitized_keeps_speed_span_finite() {
        let tuning = Tuning::from_json(r#"{ "obstacle_max_speed": 3e38 }"#).unwrap();
        assert_eq!(tuning.obstacle_max_speed, OBSTACLE_MAX_SPEED);
    }
}
