//! Simulation module
//!
//! The board, the update rule and the pacing logic live here. Nothing in this
//! module touches the DOM or the GPU:
//! - Host time is passed in, never read
//! - Randomness comes from a caller-supplied RNG

pub mod grid;
pub mod rules;
pub mod scheduler;
pub mod session;

pub use grid::{Grid, patterns};
pub use rules::{neighbor_count, next_state, step};
pub use scheduler::{Scheduler, TickOutcome};
pub use session::{FrameOutcome, Session};
