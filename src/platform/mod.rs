//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic milliseconds)
//! - Storage (LocalStorage on web, memory elsewhere)

pub mod storage;
pub mod time;

#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use time::{Clock, ManualClock, MonotonicClock};
