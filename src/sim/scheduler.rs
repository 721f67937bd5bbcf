//! Generation pacing
//!
//! The host calls [`Scheduler::tick`] once per display refresh with a
//! monotonic timestamp in milliseconds. A step becomes due once the
//! configured interval has elapsed since the last one, so the generation rate
//! depends only on speed, never on the refresh rate.

use crate::{clamp_speed, consts::DEFAULT_SPEED, interval_for_speed};

/// Result of one refresh callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// A generation should be computed now
    pub step_due: bool,
    /// The host should request another refresh callback
    pub rearm: bool,
}

/// Play/pause state plus the last-update timestamp
#[derive(Debug, Clone)]
pub struct Scheduler {
    running: bool,
    last_update: f64,
    speed: u8,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl Scheduler {
    pub fn new(speed: u8) -> Self {
        Self {
            running: false,
            last_update: 0.0,
            speed: clamp_speed(speed),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Milliseconds between generations
    #[inline]
    pub fn interval_ms(&self) -> f64 {
        interval_for_speed(self.speed)
    }

    /// Change speed (clamped to 1..=10). Takes effect on the next tick.
    pub fn set_speed(&mut self, speed: u8) {
        let clamped = clamp_speed(speed);
        if clamped != speed {
            log::warn!("Speed {} out of range, using {}", speed, clamped);
        }
        self.speed = clamped;
    }

    /// Begin running. Returns false if already running.
    pub fn start(&mut self, now: f64) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_update = now;
        log::debug!("Scheduler started at {:.1}ms", now);
        true
    }

    /// Stop running. Returns false if already paused.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        log::debug!("Scheduler paused");
        true
    }

    /// Prepare for a manual single step: pauses if running.
    ///
    /// Returns true if the scheduler had to pause.
    pub fn step_once(&mut self) -> bool {
        self.pause()
    }

    /// Handle one refresh callback at time `now`
    ///
    /// While paused nothing is ever due, so a stale callback that fires after
    /// [`pause`](Self::pause) cannot advance the board.
    pub fn tick(&mut self, now: f64) -> TickOutcome {
        if !self.running {
            return TickOutcome::default();
        }

        let step_due = now - self.last_update >= self.interval_ms();
        if step_due {
            self.last_update = now;
        }
        TickOutcome {
            step_due,
            rearm: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Simulated 60 Hz display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn run_frames(scheduler: &mut Scheduler, start: f64, frames: u32) -> u32 {
        (1..=frames)
            .filter(|i| scheduler.tick(start + *i as f64 * FRAME_MS).step_due)
            .count() as u32
    }

    #[test]
    fn test_interval_mapping() {
        assert_eq!(Scheduler::new(1).interval_ms(), 1000.0);
        assert_eq!(Scheduler::new(4).interval_ms(), 250.0);
        assert_eq!(Scheduler::new(10).interval_ms(), 100.0);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut scheduler = Scheduler::new(0);
        assert_eq!(scheduler.speed(), 1);
        scheduler.set_speed(42);
        assert_eq!(scheduler.speed(), 10);
    }

    #[test]
    fn test_paused_never_steps() {
        let mut scheduler = Scheduler::new(10);
        let outcome = scheduler.tick(10_000.0);
        assert!(!outcome.step_due);
        assert!(!outcome.rearm);
    }

    #[test]
    fn test_step_waits_for_interval() {
        let mut scheduler = Scheduler::new(10);
        scheduler.start(0.0);
        assert!(!scheduler.tick(50.0).step_due);
        assert!(scheduler.tick(100.0).step_due);
        assert!(!scheduler.tick(150.0).step_due);
        assert!(scheduler.tick(200.0).step_due);
    }

    #[test]
    fn test_rate_independent_of_refresh() {
        // One second at 60 Hz and at 144 Hz yields the same number of steps
        let mut slow = Scheduler::new(7);
        slow.start(0.0);
        let at_60 = run_frames(&mut slow, 0.0, 60);

        let mut fast = Scheduler::new(7);
        fast.start(0.0);
        let at_144 = (1..=144)
            .filter(|i| fast.tick(*i as f64 * 1000.0 / 144.0).step_due)
            .count() as u32;

        assert_eq!(at_60, 6);
        assert_eq!(at_144, 6);
    }

    #[test]
    fn test_start_and_pause_idempotent() {
        let mut scheduler = Scheduler::default();
        assert!(scheduler.start(0.0));
        assert!(!scheduler.start(500.0));
        assert!(scheduler.pause());
        assert!(!scheduler.pause());
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_second_start_keeps_timestamp() {
        let mut scheduler = Scheduler::new(10);
        scheduler.start(0.0);
        scheduler.start(90.0);
        assert!(scheduler.tick(100.0).step_due);
    }

    #[test]
    fn test_restart_resets_timestamp() {
        let mut scheduler = Scheduler::new(10);
        scheduler.start(0.0);
        scheduler.pause();
        scheduler.start(1_000.0);
        assert!(!scheduler.tick(1_050.0).step_due);
        assert!(scheduler.tick(1_100.0).step_due);
    }

    #[test]
    fn test_stale_tick_after_pause() {
        let mut scheduler = Scheduler::new(10);
        scheduler.start(0.0);
        scheduler.pause();
        let outcome = scheduler.tick(5_000.0);
        assert_eq!(outcome, TickOutcome::default());
    }

    #[test]
    fn test_step_once_pauses() {
        let mut scheduler = Scheduler::new(3);
        scheduler.start(0.0);
        assert!(scheduler.step_once());
        assert!(!scheduler.is_running());
        assert!(!scheduler.step_once());
    }

    proptest! {
        #[test]
        fn prop_steps_bounded_by_elapsed_time(speed in 1u8..=10, frames in 1u32..600) {
            let mut scheduler = Scheduler::new(speed);
            scheduler.start(0.0);
            let steps = run_frames(&mut scheduler, 0.0, frames);
            let elapsed = frames as f64 * FRAME_MS;
            let max_steps = (elapsed / scheduler.interval_ms() + 1e-9).floor() as u32;
            prop_assert!(steps <= max_steps);
        }
    }
}
