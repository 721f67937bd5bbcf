//! A single simulation session
//!
//! Owns the live grid, the generation counter and the scheduler. Every user
//! action goes through here so independent sessions never share state.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::grid::Grid;
use super::rules;
use super::scheduler::Scheduler;
use crate::error::ValidationError;
use crate::persistence::Snapshot;

/// What happened during one refresh callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// The board advanced one generation and should be redrawn
    pub stepped: bool,
    /// Request another refresh callback
    pub rearm: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    generation: u64,
    scheduler: Scheduler,
}

impl Session {
    /// Create a paused session with an all-dead board
    pub fn new(width: usize, height: usize, speed: u8) -> Self {
        Self {
            grid: Grid::new(width, height),
            generation: 0,
            scheduler: Scheduler::new(speed),
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    #[inline]
    pub fn speed(&self) -> u8 {
        self.scheduler.speed()
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.scheduler.set_speed(speed);
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Start running; no-op if already running
    pub fn start(&mut self, now: f64) -> bool {
        self.scheduler.start(now)
    }

    /// Pause; no-op if already paused
    pub fn pause(&mut self) -> bool {
        self.scheduler.pause()
    }

    /// Play/pause toggle. Returns the new running state.
    pub fn toggle_running(&mut self, now: f64) -> bool {
        if self.scheduler.is_running() {
            self.scheduler.pause();
        } else {
            self.scheduler.start(now);
        }
        self.scheduler.is_running()
    }

    /// Advance exactly one generation, pausing first if running
    pub fn step_once(&mut self) {
        self.scheduler.step_once();
        self.advance();
    }

    /// Drive the session from a display refresh callback
    pub fn frame(&mut self, now: f64) -> FrameOutcome {
        let tick = self.scheduler.tick(now);
        if tick.step_due {
            self.advance();
        }
        FrameOutcome {
            stepped: tick.step_due,
            rearm: tick.rearm,
        }
    }

    fn advance(&mut self) {
        self.grid = rules::step(&self.grid);
        self.generation += 1;
        log::debug!(
            "Generation {} ({} alive)",
            self.generation,
            self.grid.population()
        );
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.scheduler.pause();
        self.grid.clear();
        self.generation = 0;
    }

    /// Refill the board at random and reset the generation counter
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.scheduler.pause();
        self.grid.randomize(rng, density);
        self.generation = 0;
    }

    /// Reallocate the board at new dimensions (all dead, generation 0)
    ///
    /// Returns false if the dimensions did not change.
    pub fn resize(&mut self, width: usize, height: usize) -> bool {
        if self.grid.dimensions() == (width, height) {
            return false;
        }
        self.scheduler.pause();
        log::info!(
            "Resizing board {}x{} -> {}x{}",
            self.grid.width(),
            self.grid.height(),
            width,
            height
        );
        self.grid = Grid::new(width, height);
        self.generation = 0;
        true
    }

    /// Click: flip one cell
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> bool {
        self.grid.toggle(x, y)
    }

    /// Touch or drag: force one cell alive
    pub fn paint_cell(&mut self, x: usize, y: usize) -> bool {
        self.grid.set(x, y, true)
    }

    /// Copy the live board into a named snapshot
    pub fn snapshot(&self, name: &str, date: DateTime<Utc>) -> Result<Snapshot, ValidationError> {
        Snapshot::new(name, self.grid.clone(), self.generation, date)
    }

    /// Replace the live board with a snapshot's contents
    ///
    /// A snapshot taken at different dimensions is rejected and the live board
    /// is left as it was.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), ValidationError> {
        let (width, height) = self.grid.dimensions();
        if snapshot.dimensions() != (width, height) {
            return Err(ValidationError::DimensionMismatch {
                name: snapshot.name().to_string(),
                saved_width: snapshot.width(),
                saved_height: snapshot.height(),
                width,
                height,
            });
        }

        self.scheduler.pause();
        self.grid = snapshot.grid().clone();
        self.generation = snapshot.generation();
        Ok(())
    }
}
