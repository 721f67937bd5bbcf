//! Conway's rule (B3/S23) on a toroidal grid

use super::grid::Grid;

/// Offsets of the 8 surrounding cells
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Wrap `coord + delta` into `[0, dimension)`
#[inline]
fn wrap(coord: usize, delta: isize, dimension: usize) -> usize {
    let dim = dimension as isize;
    ((coord as isize + delta + dim) % dim) as usize
}

/// Count live neighbors of (x, y), wrapping at the edges
///
/// Returns 0 for an empty grid.
pub fn neighbor_count(grid: &Grid, x: usize, y: usize) -> u8 {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }

    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get(wrap(x, dx, width), wrap(y, dy, height)))
        .count() as u8
}

/// Whether a cell is alive in the next generation
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation
///
/// The input is left untouched so callers can keep the previous board.
pub fn step(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    let mut next = Grid::new(width, height);
    if grid.is_empty() {
        return next;
    }

    for y in 0..height {
        for x in 0..width {
            if next_state(grid.get(x, y), neighbor_count(grid, x, y)) {
                next.set(x, y, true);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::patterns;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(0, -1, 5), 4);
        assert_eq!(wrap(4, 1, 5), 0);
        assert_eq!(wrap(2, 0, 5), 2);
    }

    #[test]
    fn test_neighbor_count_wraps_corner() {
        let mut grid = Grid::new(6, 4);
        grid.set(5, 3, true);
        assert_eq!(neighbor_count(&grid, 0, 0), 1);
    }

    #[test]
    fn test_neighbor_count_full() {
        let mut grid = Grid::new(5, 5);
        grid.randomize(&mut rand_pcg::Pcg32::new(0, 0), 1.0);
        assert_eq!(neighbor_count(&grid, 2, 2), 8);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, true);
        assert_eq!(neighbor_count(&grid, 2, 2), 0);
    }

    #[test]
    fn test_next_state_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_empty_dimensions() {
        let grid = Grid::new(0, 12);
        let next = step(&grid);
        assert_eq!(next.dimensions(), (0, 12));
        assert_eq!(neighbor_count(&grid, 0, 0), 0);

        let grid = Grid::new(9, 0);
        assert_eq!(step(&grid).dimensions(), (9, 0));
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut grid = Grid::new(8, 8);
        grid.set(4, 4, true);
        assert_eq!(step(&grid).population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(4, 4);
        grid.place_pattern(1, 1, patterns::BLOCK);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_block_across_edge_is_still_life() {
        let mut grid = Grid::new(6, 5);
        grid.place_pattern(5, 4, patterns::BLOCK);
        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(5, 5);
        grid.place_pattern(1, 1, patterns::BLINKER);
        let once = step(&grid);
        assert_ne!(once, grid);
        assert!(once.get(2, 1) && once.get(2, 2) && once.get(2, 3));
        assert_eq!(step(&once), grid);
    }

    #[test]
    fn test_glider_returns_after_full_lap() {
        // A glider moves one cell diagonally every 4 generations
        let mut grid = Grid::new(8, 8);
        grid.place_pattern(0, 0, patterns::GLIDER);
        let mut current = grid.clone();
        for _ in 0..32 {
            current = step(&current);
        }
        assert_eq!(current, grid);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let mut grid = Grid::new(5, 5);
        grid.place_pattern(1, 1, patterns::BLINKER);
        let before = grid.clone();
        let _ = step(&grid);
        assert_eq!(grid, before);
    }

    proptest! {
        #[test]
        fn prop_step_preserves_dimensions(w in 0usize..24, h in 0usize..24, seed in any::<u64>()) {
            use rand::SeedableRng;
            let mut rng = rand_pcg::Pcg32::seed_from_u64(seed);
            let mut grid = Grid::new(w, h);
            grid.randomize(&mut rng, 0.4);
            let next = step(&grid);
            prop_assert_eq!(next.dimensions(), (w, h));
        }

        #[test]
        fn prop_dead_grid_is_fixed_point(w in 0usize..32, h in 0usize..32) {
            let grid = Grid::new(w, h);
            prop_assert_eq!(step(&grid), grid);
        }

        #[test]
        fn prop_block_still_life_anywhere(w in 4usize..20, h in 4usize..20, x in 0usize..20, y in 0usize..20) {
            let mut grid = Grid::new(w, h);
            grid.place_pattern(x % w, y % h, patterns::BLOCK);
            prop_assert_eq!(step(&grid), grid);
        }

        #[test]
        fn prop_neighbor_count_in_range(w in 1usize..12, h in 1usize..12, seed in any::<u64>()) {
            use rand::SeedableRng;
            let mut rng = rand_pcg::Pcg32::seed_from_u64(seed);
            let mut grid = Grid::new(w, h);
            grid.randomize(&mut rng, 0.5);
            for y in 0..h {
                for x in 0..w {
                    prop_assert!(neighbor_count(&grid, x, y) <= 8);
                }
            }
        }
    }
}
