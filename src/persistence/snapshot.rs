//! Named board snapshots and their persisted record format
//!
//! On disk a snapshot is
//! `{ name, grid: [[0|1, ...], ...], generation, date, gridWidth, gridHeight }`
//! with `grid` stored row by row and `date` in ISO-8601.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::sim::Grid;

/// Trim a user-supplied name, rejecting blank ones
pub fn validate_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(trimmed)
    }
}

/// Persisted form of a snapshot, exactly as it appears in storage
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub name: String,
    pub grid: Vec<Vec<u8>>,
    pub generation: u64,
    pub date: DateTime<Utc>,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl SnapshotRecord {
    /// Listing metadata, read without validating the cell data
    pub fn meta(&self) -> SnapshotMeta {
        SnapshotMeta {
            name: self.name.clone(),
            generation: self.generation,
            date: self.date,
            width: self.grid_width,
            height: self.grid_height,
            population: self
                .grid
                .iter()
                .flatten()
                .filter(|&&value| value == 1)
                .count(),
        }
    }
}

/// A validated, immutable copy of a board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    name: String,
    grid: Grid,
    generation: u64,
    date: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(
        name: &str,
        grid: Grid,
        generation: u64,
        date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name(name)?.to_string(),
            grid,
            generation,
            date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn meta(&self) -> SnapshotMeta {
        SnapshotMeta {
            name: self.name.clone(),
            generation: self.generation,
            date: self.date,
            width: self.width(),
            height: self.height(),
            population: self.grid.population(),
        }
    }

    pub fn to_record(&self) -> SnapshotRecord {
        SnapshotRecord {
            name: self.name.clone(),
            grid: self.grid.to_rows(),
            generation: self.generation,
            date: self.date,
            grid_width: self.width(),
            grid_height: self.height(),
        }
    }
}

impl TryFrom<SnapshotRecord> for Snapshot {
    type Error = ValidationError;

    fn try_from(record: SnapshotRecord) -> Result<Self, Self::Error> {
        let grid = Grid::from_rows(record.grid_width, record.grid_height, &record.grid)
            .map_err(|e| match e {
                ValidationError::Malformed(reason) => {
                    ValidationError::Malformed(format!("\"{}\": {}", record.name, reason))
                }
                other => other,
            })?;
        Self::new(&record.name, grid, record.generation, record.date)
    }
}

/// Summary shown in the saved-boards list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotMeta {
    pub name: String,
    pub generation: u64,
    pub date: DateTime<Utc>,
    pub width: usize,
    pub height: usize,
    pub population: usize,
}
