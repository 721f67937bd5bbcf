//! Canvas Life - Conway's Game of Life on a WebGPU canvas
//!
//! Core modules:
//! - `sim`: Toroidal grid, the B3/S23 rule, the generation scheduler and the session
//! - `persistence`: Named board snapshots in a flat key-value store
//! - `platform`: Browser/native platform abstraction (storage, clock)
//! - `renderer`: WebGPU rendering pipeline and canvas layout
//! - `input`: Keyboard shortcuts and pointer-to-cell mapping

pub mod error;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, ErrorKind, Result, ValidationError};
pub use persistence::{Snapshot, SnapshotMeta, SnapshotStore};
pub use settings::Settings;
pub use sim::{Grid, Scheduler, Session};

/// Board configuration constants
pub mod consts {
    /// Slowest selectable speed (generations per second)
    pub const MIN_SPEED: u8 = 1;
    /// Fastest selectable speed (generations per second)
    pub const MAX_SPEED: u8 = 10;
    /// Speed used before the user picks one
    pub const DEFAULT_SPEED: u8 = 5;

    /// Edge length of one cell on screen, in CSS pixels
    pub const DEFAULT_CELL_SIZE: u32 = 10;
    pub const MIN_CELL_SIZE: u32 = 4;
    pub const MAX_CELL_SIZE: u32 = 40;

    /// Fraction of cells alive after randomize
    pub const DEFAULT_RANDOM_DENSITY: f64 = 0.3;

    /// LocalStorage key holding every saved snapshot
    pub const SNAPSHOTS_KEY: &str = "canvas_life_snapshots";
    /// LocalStorage key holding user preferences
    pub const SETTINGS_KEY: &str = "canvas_life_settings";
}

/// Milliseconds between generations for a given speed
#[inline]
pub fn interval_for_speed(speed: u8) -> f64 {
    1000.0 / clamp_speed(speed) as f64
}

/// Clamp a requested speed into the selectable range
#[inline]
pub fn clamp_speed(speed: u8) -> u8 {
    speed.clamp(consts::MIN_SPEED, consts::MAX_SPEED)
}
