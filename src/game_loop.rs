//! Running/stopped state machine
//!
//! The loop never schedules itself directly. After a frame it asks the
//! injected `FrameScheduler` for another one, unless the session has ended.
//! At most one frame request is outstanding at any time.

use serde::{Deserialize, Serialize};

use crate::display::{self, DisplaySink};
use crate::input::DirectionInput;
use crate::renderer::Surface;
use crate::session::evaluate_outcome;
use crate::sim::{World, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopPhase {
    Running,
    Stopped(Outcome),
}

impl LoopPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopPhase::Running)
    }
}

/// Host frame-timing source (requestAnimationFrame, a test counter, ...)
pub trait FrameScheduler {
    /// Arrange for exactly one future call to the loop's frame handler
    fn request_frame(&mut self);
}

#[derive(Debug, Clone)]
pub struct GameLoop {
    phase: LoopPhase,
    frame_pending: bool,
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            phase: LoopPhase::Running,
            frame_pending: false,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Back to Running; an outstanding frame request stays valid
    pub fn reset(&mut self) {
        self.phase = LoopPhase::Running;
    }

    /// Request a frame if running and none is outstanding
    pub fn schedule(&mut self, frames: &mut impl FrameScheduler) {
        if self.phase.is_running() && !self.frame_pending {
            self.frame_pending = true;
            frames.request_frame();
        }
    }

    /// Handle one delivered frame
    pub fn run_frame(
        &mut self,
        world: &mut World,
        input: &DirectionInput,
        surface: &mut impl Surface,
        display: &mut impl DisplaySink,
        frames: &mut impl FrameScheduler,
    ) -> LoopPhase {
        self.frame_pending = false;
        if !self.phase.is_running() {
            return self.phase;
        }

        tick(world, input, surface);

        display.set_items_text(&display::items_text(world.items_collected));
        display.set_lives_text(&display::lives_text(world.lives));

        match evaluate_outcome(world) {
            Some(Outcome::Lost) => {
                self.phase = LoopPhase::Stopped(Outcome::Lost);
                log::info!(
                    "Session lost after {} ticks ({} items)",
                    world.time_ticks,
                    world.items_collected
                );
                display.show_overlay(&display::game_over_message(world.items_collected));
            }
            Some(Outcome::Won) => {
                self.phase = LoopPhase::Stopped(Outcome::Won);
                log::info!("Session won after {} ticks", world.time_ticks);
                display.show_overlay(display::VICTORY_MESSAGE);
            }
            None => self.schedule(frames),
        }

        self.phase
    }
}
