//! Shape generation for the board

use glam::Vec2;

use super::layout::CanvasLayout;
use super::vertex::{Palette, Vertex};
use crate::sim::Grid;

/// Gap left around each live cell so neighbors read as separate squares
const CELL_INSET: f32 = 0.5;
/// Grid line thickness in CSS pixels
const LINE_WIDTH: f32 = 1.0;

/// Two triangles covering the rectangle `min..max`
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// One quad per live cell
pub fn live_cells(grid: &Grid, layout: &CanvasLayout, color: [f32; 4]) -> Vec<Vertex> {
    let inset = if layout.cell_size > 3.0 { CELL_INSET } else { 0.0 };
    let mut vertices = Vec::with_capacity(grid.population() * 6);

    for (x, y) in grid.alive_cells() {
        let origin = layout.cell_origin(x, y);
        let min = origin + Vec2::splat(inset);
        let max = origin + Vec2::splat(layout.cell_size - inset);
        vertices.extend_from_slice(&quad(min, max, color));
    }
    vertices
}

/// Thin quads along every cell boundary of a `cols` x `rows` board
pub fn grid_lines(
    cols: usize,
    rows: usize,
    layout: &CanvasLayout,
    color: [f32; 4],
) -> Vec<Vertex> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let size = layout.cell_origin(cols, rows);
    let half = LINE_WIDTH / 2.0;
    let mut vertices = Vec::with_capacity((cols + rows + 2) * 6);

    for i in 0..=cols {
        let x = i as f32 * layout.cell_size;
        vertices.extend_from_slice(&quad(
            Vec2::new(x - half, 0.0),
            Vec2::new(x + half, size.y),
            color,
        ));
    }
    for j in 0..=rows {
        let y = j as f32 * layout.cell_size;
        vertices.extend_from_slice(&quad(
            Vec2::new(0.0, y - half),
            Vec2::new(size.x, y + half),
            color,
        ));
    }
    vertices
}

/// Everything drawn for one frame, in CSS pixels
pub fn board_quads(
    grid: &Grid,
    layout: &CanvasLayout,
    palette: &Palette,
    show_grid_lines: bool,
) -> Vec<Vertex> {
    let mut vertices = live_cells(grid, layout, palette.alive);
    if show_grid_lines {
        vertices.extend(grid_lines(
            grid.width(),
            grid.height(),
            layout,
            palette.grid_line,
        ));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_covers_rect() {
        let v = quad(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [1.0; 4]);
        let xs: Vec<f32> = v.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 1.0 || x == 3.0));
        assert!(ys.iter().all(|&y| y == 2.0 || y == 4.0));
    }

    #[test]
    fn test_one_quad_per_live_cell() {
        let layout = CanvasLayout::new(100.0, 100.0, 10);
        let mut grid = Grid::new(10, 10);
        grid.set(0, 0, true);
        grid.set(9, 9, true);
        grid.set(4, 5, true);
        assert_eq!(live_cells(&grid, &layout, Palette::DARK.alive).len(), 18);
    }

    #[test]
    fn test_cell_quad_position() {
        let layout = CanvasLayout::new(100.0, 100.0, 10);
        let mut grid = Grid::new(10, 10);
        grid.set(2, 3, true);
        let vertices = live_cells(&grid, &layout, Palette::DARK.alive);
        assert_eq!(vertices[0].position, [20.5, 30.5]);
        assert_eq!(vertices[5].position, [29.5, 39.5]);
        assert_eq!(vertices[0].color, Palette::DARK.alive);
    }

    #[test]
    fn test_grid_lines_count() {
        let layout = CanvasLayout::new(40.0, 30.0, 10);
        let color = Palette::DARK.grid_line;
        assert_eq!(grid_lines(4, 3, &layout, color).len(), (5 + 4) * 6);
        assert!(grid_lines(0, 3, &layout, color).is_empty());
    }

    #[test]
    fn test_board_toggles_lines() {
        let layout = CanvasLayout::new(40.0, 30.0, 10);
        let grid = Grid::new(4, 3);
        let palette = Palette::default();
        assert!(board_quads(&grid, &layout, &palette, false).is_empty());
        assert!(!board_quads(&grid, &layout, &palette, true).is_empty());
    }

    #[test]
    fn test_board_uses_palette() {
        let layout = CanvasLayout::new(40.0, 30.0, 10);
        let mut grid = Grid::new(4, 3);
        grid.set(1, 1, true);
        let palette = Palette {
            alive: [1.0, 0.0, 0.0, 1.0],
            grid_line: [0.0, 0.0, 1.0, 0.5],
            background: [0.0; 4],
        };
        let vertices = board_quads(&grid, &layout, &palette, true);
        let (cells, lines) = vertices.split_at(6);
        assert!(cells.iter().all(|v| v.color == palette.alive));
        assert!(lines.iter().all(|v| v.color == palette.grid_line));
    }
}
