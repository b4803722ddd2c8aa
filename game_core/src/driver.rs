//! Frame Driver
//!
//! Runs one tick per host frame while the match is playing and hands the
//! resulting snapshot to the renderer. The host decides when frames happen;
//! the driver only ever asks for the next one.

use crate::components::PaddleIntent;
use crate::game::Game;
use crate::match_state::TransitionResult;
use crate::snapshot::Snapshot;

/// Capability to have `FrameDriver::run_frame` called again on the next frame
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Scheduler for headless runs and tests: counts outstanding requests
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: usize,
    total: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames requested but not yet delivered
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Frames requested over the scheduler's lifetime
    pub fn total_requests(&self) -> usize {
        self.total
    }

    /// Consume one pending request; false when nothing is scheduled
    pub fn take(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.pending += 1;
        self.total += 1;
    }
}

/// Owns the simulation and paces it against the host's frames
pub struct FrameDriver {
    game: Game,
    frame_pending: bool,
}

impl FrameDriver {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            frame_pending: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    /// Whether a frame has been requested and not yet run
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn set_intent(&mut self, intent: PaddleIntent) {
        self.game.push_intent(intent);
    }

    /// Start signal: begins ticking when the match is idle
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) -> TransitionResult {
        let result = self.game.start();
        if result.success() {
            self.schedule(scheduler);
        }
        result
    }

    /// Reset signal: a fresh match waiting for the start signal
    ///
    /// A frame already requested stays outstanding; when it arrives it finds
    /// the match idle and does nothing.
    pub fn reset(&mut self) -> Snapshot {
        self.game.reset();
        self.game.snapshot()
    }

    /// Host frame callback
    ///
    /// Ticks once if the match is playing and asks for another frame unless
    /// the tick ended it. Returns the snapshot to render, or `None` when no
    /// tick ran.
    pub fn run_frame(&mut self, now_ms: u64, scheduler: &mut dyn FrameScheduler) -> Option<Snapshot> {
        self.frame_pending = false;

        if !self.game.match_state.is_playing() {
            return None;
        }

        self.game.tick(now_ms);

        if self.game.match_state.is_playing() {
            self.schedule(scheduler);
        }
        Some(self.game.snapshot())
    }

    fn schedule(&mut self, scheduler: &mut dyn FrameScheduler) {
        // At most one outstanding frame, so ticks never overlap or double up
        if !self.frame_pending {
            self.frame_pending = true;
            scheduler.request_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Phase, SequenceRng};

    fn driver() -> FrameDriver {
        FrameDriver::new(Game::new(Config::new(), Box::new(SequenceRng::constant(0.5))))
    }

    #[test]
    fn test_start_requests_first_frame() {
        let mut driver = driver();
        let mut scheduler = ManualScheduler::new();

        let result = driver.start(&mut scheduler);

        assert!(result.success());
        assert_eq!(scheduler.pending(), 1);
        assert!(driver.frame_pending());
    }

    #[test]
    fn test_each_frame_schedules_the_next() {
        let mut driver = driver();
        let mut scheduler = ManualScheduler::new();
        driver.start(&mut scheduler);

        let mut now = 1_000;
        for _ in 0..10 {
            assert!(scheduler.take());
            let snapshot = driver.run_frame(now, &mut scheduler);
            assert!(snapshot.is_some());
            now += 16;
        }

        assert_eq!(scheduler.pending(), 1);
        assert_eq!(driver.snapshot().tick, 10);
    }

    #[test]
    fn test_second_start_does_not_fork_frames() {
        let mut driver = driver();
        let mut scheduler = ManualScheduler::new();
        driver.start(&mut scheduler);

        let again = driver.start(&mut scheduler);

        assert!(!again.success());
        assert_eq!(scheduler.total_requests(), 1);
    }

    #[test]
    fn test_restart_while_frame_outstanding_keeps_one_chain() {
        let mut driver = driver();
        let mut scheduler = ManualScheduler::new();
        driver.start(&mut scheduler);

        driver.reset();
        driver.start(&mut scheduler);

        assert_eq!(scheduler.pending(), 1, "Outstanding frame is reused");
        assert!(scheduler.take());
        assert!(driver.run_frame(1_000, &mut scheduler).is_some());
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_frame_after_reset_is_ignored() {
        let mut driver = driver();
        let mut scheduler = ManualScheduler::new();
        driver.start(&mut scheduler);
        scheduler.take();

        let snapshot = driver.reset();
        assert_eq!(snapshot.phase, Phase::Idle);

        assert_eq!(driver.run_frame(1_000, &mut scheduler), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_idle_frames_never_tick() {
        let mut driver = driver();
        let mut scheduler = ManualScheduler::new();

        assert_eq!(driver.run_frame(1_000, &mut scheduler), None);
        assert_eq!(scheduler.total_requests(), 0);
        assert_eq!(driver.snapshot().tick, 0);
    }
}
