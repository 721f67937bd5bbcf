//! Toroidal cell grid
//!
//! Cells are stored row-major. Dimensions are fixed for the lifetime of a
//! grid; resizing means allocating a new one.

use rand::Rng;

use crate::consts::DEFAULT_RANDOM_DENSITY;
use crate::error::ValidationError;

/// A width x height board of dead/alive cells
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a grid from 0/1 rows (the persisted record layout)
    ///
    /// Rejects a row count or row length that disagrees with the declared
    /// dimensions, and any value other than 0 or 1. Nothing is allocated
    /// before the rows are checked, so declared dimensions cannot exceed the
    /// data actually present.
    pub fn from_rows(
        width: usize,
        height: usize,
        rows: &[Vec<u8>],
    ) -> Result<Self, ValidationError> {
        if rows.len() != height {
            return Err(ValidationError::Malformed(format!(
                "expected {} rows, found {}",
                height,
                rows.len()
            )));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ValidationError::Malformed(format!(
                "row {} has {} cells, expected {}",
                y,
                row.len(),
                width
            )));
        }

        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &v)| (x, y, v)))
            .map(|(x, y, value)| match value {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(ValidationError::Malformed(format!(
                    "cell ({}, {}) has value {}, expected 0 or 1",
                    x, y, other
                ))),
            })
            .collect::<Result<Vec<bool>, _>>()?;

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Export as 0/1 rows, top row first
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&alive| alive as u8).collect())
            .collect()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True when either dimension is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Cell state; anything outside the grid reads as dead
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Set a cell. Returns false if (x, y) is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flip a cell. Returns false if (x, y) is outside the grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Refill every cell, each alive with probability `density`
    ///
    /// Density is clamped to 0..=1; a non-finite density falls back to
    /// [`DEFAULT_RANDOM_DENSITY`].
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            log::warn!("Density {} is not finite, using {}", density, DEFAULT_RANDOM_DENSITY);
            DEFAULT_RANDOM_DENSITY
        };
        for cell in &mut self.cells {
            *cell = rng.random_bool(density);
        }
    }

    /// Set the cells at `origin + offset` alive, wrapping around the edges
    pub fn place_pattern(&mut self, x: usize, y: usize, offsets: &[(usize, usize)]) {
        if self.is_empty() {
            return;
        }
        for &(dx, dy) in offsets {
            let px = (x + dx) % self.width;
            let py = (y + dy) % self.height;
            self.cells[py * self.width + px] = true;
        }
    }

    /// Coordinates of live cells in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % width, i / width))
    }
}

/// Common patterns, as offsets from the top-left corner
pub mod patterns {
    pub const BLOCK: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
    pub const BLINKER: &[(usize, usize)] = &[(0, 1), (1, 1), (2, 1)];
    pub const GLIDER: &[(usize, usize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 3);
        assert_eq!(grid.dimensions(), (7, 3));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(4, 4);
        assert!(!grid.get(4, 0));
        assert!(!grid.set(0, 4, true));
        assert!(!grid.toggle(10, 10));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_toggle_flips() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.toggle(1, 2));
        assert!(grid.get(1, 2));
        grid.toggle(1, 2);
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn test_rows_round_trip_preserves_layout() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 0, true);
        grid.set(0, 1, true);
        let rows = grid.to_rows();
        assert_eq!(rows, vec![vec![0, 0, 1], vec![1, 0, 0]]);
        assert_eq!(Grid::from_rows(3, 2, &rows).unwrap(), grid);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![0, 1, 0], vec![1, 0]];
        assert!(matches!(
            Grid::from_rows(3, 2, &rows),
            Err(ValidationError::Malformed(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_non_binary() {
        let rows = vec![vec![0, 2]];
        assert!(Grid::from_rows(2, 1, &rows).is_err());
    }

    #[test]
    fn test_from_rows_rejects_row_count() {
        let rows = vec![vec![0, 1]];
        assert!(Grid::from_rows(2, 2, &rows).is_err());
    }

    #[test]
    fn test_from_rows_rejects_oversized_width() {
        let rows = vec![vec![0], vec![0]];
        assert!(matches!(
            Grid::from_rows(usize::MAX, 2, &rows),
            Err(ValidationError::Malformed(_))
        ));
        assert!(Grid::from_rows(1 << 40, 2, &rows).is_err());
    }

    #[test]
    fn test_zero_width_rows() {
        let grid = Grid::new(0, 3);
        let rows = grid.to_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(Grid::from_rows(0, 3, &rows).unwrap(), grid);
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut grid = Grid::new(10, 10);
        grid.randomize(&mut rng, 1.0);
        assert_eq!(grid.population(), 100);
        grid.randomize(&mut rng, 0.0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_randomize_non_finite_density() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut grid = Grid::new(20, 20);
        grid.randomize(&mut rng, f64::NAN);
        let population = grid.population();
        assert!(population > 0 && population < 400);
        grid.randomize(&mut rng, f64::INFINITY);
        assert!(grid.population() < 400);
    }

    #[test]
    fn test_place_pattern_wraps() {
        let mut grid = Grid::new(4, 4);
        grid.place_pattern(3, 3, patterns::BLOCK);
        assert!(grid.get(3, 3));
        assert!(grid.get(0, 3));
        assert!(grid.get(3, 0));
        assert!(grid.get(0, 0));
        assert_eq!(grid.population(), 4);
    }

    #[test]
    fn test_alive_cells_order() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, true);
        grid.set(0, 2, true);
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(2, 0), (0, 2)]);
    }
}
