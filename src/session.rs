//! Session setup, end conditions and restart

use crate::display::{self, DisplaySink};
use crate::game_loop::{FrameScheduler, GameLoop, LoopPhase, Outcome};
use crate::input::DirectionInput;
use crate::renderer::Surface;
use crate::sim::World;
use crate::tuning::Tuning;

/// Win/loss rule. Running out of lives wins over reaching the quota when both
/// happen on the same frame.
pub fn evaluate_outcome(world: &World) -> Option<Outcome> {
    if world.lives == 0 {
        Some(Outcome::Lost)
    } else if world.items_collected >= world.tuning.pickup_quota {
        Some(Outcome::Won)
    } else {
        None
    }
}

/// One game: the world plus the loop driving it
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    world: World,
    game_loop: GameLoop,
    /// Sessions started so far, including the first
    sessions_started: u32,
}

impl Session {
    /// Build the world; nothing is shown or scheduled until `start`
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        let world = World::new(&tuning, seed);
        Self {
            tuning,
            world,
            game_loop: GameLoop::new(),
            sessions_started: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> LoopPhase {
        self.game_loop.phase()
    }

    pub fn frame_pending(&self) -> bool {
        self.game_loop.frame_pending()
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Reset the HUD, hide the overlay and get frames flowing
    pub fn start(&mut self, display: &mut impl DisplaySink, frames: &mut impl FrameScheduler) {
        self.sessions_started += 1;
        display.hide_overlay();
        display.set_items_text(&display::items_text(self.world.items_collected));
        display.set_lives_text(&display::lives_text(self.world.lives));
        self.game_loop.reset();
        self.game_loop.schedule(frames);
        log::info!(
            "Session {} started (seed {})",
            self.sessions_started,
            self.world.seed
        );
    }

    /// Discard the current world entirely and start over
    pub fn restart(
        &mut self,
        seed: u64,
        display: &mut impl DisplaySink,
        frames: &mut impl FrameScheduler,
    ) {
        self.world = World::new(&self.tuning, seed);
        self.start(display, frames);
    }

    /// Handle a frame delivered by the scheduler
    pub fn frame(
        &mut self,
        input: &DirectionInput,
        surface: &mut impl Surface,
        display: &mut impl DisplaySink,
        frames: &mut impl FrameScheduler,
    ) -> LoopPhase {
        self.game_loop
            .run_frame(&mut self.world, input, surface, display, frames)
    }
}
