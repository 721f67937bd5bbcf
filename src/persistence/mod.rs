//! Save/load of named board snapshots
//!
//! Features:
//! - Versionless JSON record per snapshot (`gridWidth`/`gridHeight` camelCase)
//! - Whole-store rewrite on every mutation
//! - Validation of stored records before they reach the live board

pub mod snapshot;
pub mod store;

pub use snapshot::{Snapshot, SnapshotMeta, SnapshotRecord, validate_name};
pub use store::SnapshotStore;
