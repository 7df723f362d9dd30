//! One animation-frame pass over the world
//!
//! Draw order and update order are interleaved exactly as the frame is
//! presented: each entity is drawn at its pre-update position, then moved.

use super::state::{PickupResolution, World};
use crate::input::DirectionInput;
use crate::renderer::Surface;

/// What a tick changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Obstacles that hit the ship this tick
    pub hits: u32,
    pub pickup: PickupResolution,
}

/// Render and advance the world by one frame
pub fn tick(world: &mut World, input: &DirectionInput, surface: &mut impl Surface) -> TickReport {
    world.time_ticks += 1;
    let bounds = world.bounds;

    surface.clear();

    world.player.render(surface);
    world.player.update(input, bounds, &world.tuning);

    for obstacle in &mut world.obstacles {
        obstacle.render(surface);
        obstacle.update(bounds);
    }
    // Hits are collected over the whole population, then replaced by index
    let hits = world.resolve_player_obstacle_collisions();

    if let Some(pickup) = &world.pickup {
        pickup.render(surface);
    }
    let pickup = world.resolve_player_pickup_collision();

    TickReport { hits, pickup }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{ShapeBatch, batch::CIRCLE_SEGMENTS};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn quiet_world(seed: u64) -> World {
        let mut world = World::new(&Tuning::default(), seed);
        for obstacle in &mut world.obstacles {
            obstacle.pos = Vec2::new(5.0, 5.0);
            obstacle.vel = Vec2::ZERO;
        }
        world.pickup.as_mut().unwrap().pos = Vec2::new(700.0, 550.0);
        world
    }

    #[test]
    fn test_tick_draws_every_entity_once() {
        let mut world = quiet_world(3);
        let mut batch = ShapeBatch::new(world.bounds);

        let report = tick(&mut world, &DirectionInput::default(), &mut batch);
        assert_eq!(report.hits, 0);
        assert_eq!(report.pickup, PickupResolution::None);

        // 1 triangle ship + 2 per obstacle + circle fan
        let expected = 1 + 2 * 10 + CIRCLE_SEGMENTS as usize;
        assert_eq!(batch.triangle_count(), expected);

        // The next tick starts from a cleared surface
        tick(&mut world, &DirectionInput::default(), &mut batch);
        assert_eq!(batch.triangle_count(), expected);
        assert_eq!(world.time_ticks, 2);
    }

    #[test]
    fn test_tick_moves_player_from_input() {
        let mut world = quiet_world(3);
        let mut batch = ShapeBatch::new(world.bounds);
        let input = DirectionInput {
            left: true,
            ..Default::default()
        };

        tick(&mut world, &input, &mut batch);
        assert!(world.player.pos.x < 400.0);
        assert_eq!(world.player.pos.y, 300.0);
    }

    #[test]
    fn test_tick_resolves_collisions_after_motion() {
        let mut world = quiet_world(3);
        let mut batch = ShapeBatch::new(world.bounds);
        // Drifts onto the ship during this tick
        world.obstacles[2].pos = Vec2::new(380.0, 300.0);
        world.obstacles[2].vel = Vec2::new(1.0, 0.0);
        world.obstacles[2].size = 20.0;

        let report = tick(&mut world, &DirectionInput::default(), &mut batch);
        assert_eq!(report.hits, 1);
        assert_eq!(world.lives, 2);
        assert_eq!(world.obstacles.len(), 10);
    }

    #[test]
    fn test_tick_collects_pickup() {
        let mut world = quiet_world(3);
        let mut batch = ShapeBatch::new(world.bounds);
        world.pickup.as_mut().unwrap().pos = Vec2::new(402.0, 300.0);

        let report = tick(&mut world, &DirectionInput::default(), &mut batch);
        assert_eq!(report.pickup, PickupResolution::Collected);
        assert_eq!(world.items_collected, 1);
        assert!(world.pickup.is_some());
    }

    #[test]
    fn test_determinism() {
        let mut world1 = World::new(&Tuning::default(), 99999);
        let mut world2 = World::new(&Tuning::default(), 99999);
        let mut batch = ShapeBatch::new(world1.bounds);

        let inputs = [
            DirectionInput {
                up: true,
                ..Default::default()
            },
            DirectionInput {
                right: true,
                down: true,
                ..Default::default()
            },
            DirectionInput::default(),
        ];

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut world1, input, &mut batch);
                tick(&mut world2, input, &mut batch);
            }
        }

        assert_eq!(world1.time_ticks, world2.time_ticks);
        assert_eq!(world1.player, world2.player);
        assert_eq!(world1.obstacles, world2.obstacles);
        assert_eq!(world1.lives, world2.lives);
    }

    fn direction_input() -> impl Strategy<Value = DirectionInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(up, down, left, right)| DirectionInput {
                up,
                down,
                left,
                right,
            },
        )
    }

    proptest! {
        #[test]
        fn population_holds_across_ticks(
            seed in any::<u64>(),
            inputs in prop::collection::vec(direction_input(), 1..300),
        ) {
            let mut world = World::new(&Tuning::default(), seed);
            let mut batch = ShapeBatch::new(world.bounds);
            let quota = world.tuning.pickup_quota;

            for input in &inputs {
                tick(&mut world, input, &mut batch);
                prop_assert_eq!(world.obstacles.len(), 10);
                prop_assert!(world.pickup.is_some() || world.items_collected >= quota);
                prop_assert!(world.lives <= 3);
            }
        }
    }
}
