//! World state and entity lifecycle
//!
//! Everything a running session mutates lives here. A restart builds a new
//! `World`; nothing is carried over.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Obstacle, Pickup, Player, check_collision};
use crate::tuning::Tuning;

/// What happened to the pickup this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupResolution {
    /// No pickup touched
    None,
    /// Collected and replaced
    Collected,
    /// Collected the last one; the slot stays empty
    QuotaReached,
}

/// Complete world state (seeded, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Seed the RNG started from
    pub seed: u64,
    /// Surface size; positions wrap onto [0, bounds)
    pub bounds: Vec2,
    pub player: Player,
    /// Constant-size population while the session is active
    pub obstacles: Vec<Obstacle>,
    /// At most one live pickup
    pub pickup: Option<Pickup>,
    pub items_collected: u32,
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub tuning: Tuning,
    /// Full generator state, so a restored world keeps spawning the same way
    rng: Pcg32,
}

impl World {
    /// Player at the center, full obstacle population, one pickup
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let bounds = tuning.bounds();
        let mut world = Self {
            seed,
            bounds,
            player: Player::new(bounds / 2.0, tuning.player_size),
            obstacles: Vec::with_capacity(tuning.obstacle_count),
            pickup: None,
            items_collected: 0,
            lives: tuning.starting_lives,
            time_ticks: 0,
            tuning: tuning.clone(),
            rng: Pcg32::seed_from_u64(seed),
        };

        for _ in 0..tuning.obstacle_count {
            let obstacle = world.spawn_obstacle();
            world.obstacles.push(obstacle);
        }
        world.pickup = Some(world.spawn_pickup());

        world
    }

    /// Fresh obstacle anywhere on the surface
    pub fn spawn_obstacle(&mut self) -> Obstacle {
        Obstacle::random(&mut self.rng, self.bounds, &self.tuning)
    }

    /// Fresh pickup anywhere on the surface
    pub fn spawn_pickup(&mut self) -> Pickup {
        Pickup::random(&mut self.rng, self.bounds, self.tuning.pickup_size)
    }

    /// Indices of obstacles currently touching the player
    pub fn colliding_obstacles(&self) -> Vec<usize> {
        self.obstacles
            .iter()
            .enumerate()
            .filter(|(_, obstacle)| check_collision(&self.player, *obstacle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Each hit costs a life and replaces that obstacle in its slot.
    /// Returns the number of hits.
    pub fn resolve_player_obstacle_collisions(&mut self) -> u32 {
        let hits = self.colliding_obstacles();
        for &index in &hits {
            self.lives = self.lives.saturating_sub(1);
            self.obstacles[index] = self.spawn_obstacle();
            log::debug!("Obstacle {} hit the ship, lives left: {}", index, self.lives);
        }
        hits.len() as u32
    }

    /// Collect the pickup if the player touches it
    pub fn resolve_player_pickup_collision(&mut self) -> PickupResolution {
        let touched = self
            .pickup
            .as_ref()
            .is_some_and(|pickup| check_collision(&self.player, pickup));
        if !touched {
            return PickupResolution::None;
        }

        self.pickup = None;
        self.items_collected += 1;
        log::debug!("Pickup collected ({} total)", self.items_collected);

        if self.items_collected >= self.tuning.pickup_quota {
            PickupResolution::QuotaReached
        } else {
            self.pickup = Some(self.spawn_pickup());
            PickupResolution::Collected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park_far_away(world: &mut World) {
        // Top-left corner region; the player sits at the center
        for obstacle in &mut world.obstacles {
            obstacle.pos = Vec2::new(5.0, 5.0);
            obstacle.vel = Vec2::ZERO;
        }
        if let Some(pickup) = world.pickup.as_mut() {
            pickup.pos = Vec2::new(700.0, 550.0);
        }
    }

    #[test]
    fn test_new_world() {
        let world = World::new(&Tuning::default(), 42);
        assert_eq!(world.lives, 3);
        assert_eq!(world.items_collected, 0);
        assert_eq!(world.obstacles.len(), 10);
        assert!(world.pickup.is_some());
        assert_eq!(world.player.pos, Vec2::new(400.0, 300.0));
        assert_eq!(world.player.vel, Vec2::ZERO);
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = World::new(&Tuning::default(), 99);
        let b = World::new(&Tuning::default(), 99);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.pickup, b.pickup);
    }

    #[test]
    fn test_no_collision_changes_nothing() {
        let mut world = World::new(&Tuning::default(), 1);
        park_far_away(&mut world);
        let before = world.obstacles.clone();

        assert_eq!(world.resolve_player_obstacle_collisions(), 0);
        assert_eq!(world.obstacles, before);
        assert_eq!(world.lives, 3);
    }

    #[test]
    fn test_single_hit_replaces_in_place() {
        let mut world = World::new(&Tuning::default(), 1);
        park_far_away(&mut world);
        world.obstacles[4].pos = world.player.pos;
        let hit = world.obstacles[4].clone();

        assert_eq!(world.resolve_player_obstacle_collisions(), 1);
        assert_eq!(world.lives, 2);
        assert_eq!(world.obstacles.len(), 10);
        assert_ne!(world.obstacles[4], hit);
        // Untouched slots keep their obstacle
        assert_eq!(world.obstacles[3].pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_simultaneous_hits_each_cost_a_life() {
        let mut world = World::new(&Tuning::default(), 1);
        park_far_away(&mut world);
        world.obstacles[0].pos = world.player.pos;
        world.obstacles[9].pos = world.player.pos + Vec2::new(3.0, 0.0);

        assert_eq!(world.resolve_player_obstacle_collisions(), 2);
        assert_eq!(world.lives, 1);
        assert_eq!(world.obstacles.len(), 10);
    }

    #[test]
    fn test_lives_never_underflow() {
        let mut world = World::new(&Tuning::default(), 1);
        park_far_away(&mut world);
        world.lives = 1;
        for obstacle in world.obstacles.iter_mut().take(3) {
            obstacle.pos = Vec2::new(400.0, 300.0);
        }

        assert_eq!(world.resolve_player_obstacle_collisions(), 3);
        assert_eq!(world.lives, 0);
    }

    #[test]
    fn test_pickup_collected_and_replaced() {
        let mut world = World::new(&Tuning::default(), 1);
        park_far_away(&mut world);
        world.pickup.as_mut().unwrap().pos = world.player.pos;

        assert_eq!(
            world.resolve_player_pickup_collision(),
            PickupResolution::Collected
        );
        assert_eq!(world.items_collected, 1);
        assert!(world.pickup.is_some());
    }

    #[test]
    fn test_pickup_quota_leaves_slot_empty() {
        let mut world = World::new(&Tuning::default(), 1);
        park_far_away(&mut world);
        world.items_collected = 4;
        world.pickup.as_mut().unwrap().pos = world.player.pos;

        assert_eq!(
            world.resolve_player_pickup_collision(),
            PickupResolution::QuotaReached
        );
        assert_eq!(world.items_collected, 5);
        assert!(world.pickup.is_none());

        // Nothing left to collect
        assert_eq!(
            world.resolve_player_pickup_collision(),
            PickupResolution::None
        );
    }

    #[test]
    fn test_restored_world_continues_same_spawns() {
        let mut world = World::new(&Tuning::default(), 5);
        let json = serde_json::to_string(&world).unwrap();
        let mut restored: World = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.seed, world.seed);
        assert_eq!(restored.obstacles, world.obstacles);
        assert_eq!(restored.lives, world.lives);
        for _ in 0..3 {
            assert_eq!(restored.spawn_obstacle(), world.spawn_obstacle());
        }
        assert_eq!(restored.spawn_pickup(), world.spawn_pickup());
    }
}
