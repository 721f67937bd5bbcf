//! Canvas sizing and pixel <-> cell mapping
//!
//! All coordinates are CSS pixels with the origin at the canvas' top-left
//! corner. The board fills as many whole cells as fit; leftover pixels on the
//! right and bottom stay background.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Canvas width in CSS pixels
    pub width: f32,
    /// Canvas height in CSS pixels
    pub height: f32,
    /// Cell edge length in CSS pixels
    pub cell_size: f32,
}

impl CanvasLayout {
    pub fn new(width: f32, height: f32, cell_size: u32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            cell_size: cell_size.max(1) as f32,
        }
    }

    /// Number of whole cells that fit (columns, rows)
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (
            (self.width / self.cell_size).floor() as usize,
            (self.height / self.cell_size).floor() as usize,
        )
    }

    /// Cell under a pixel position, if it lands on the board
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
            return None;
        }
        let (cols, rows) = self.grid_dimensions();
        let x = (px / self.cell_size).floor() as usize;
        let y = (py / self.cell_size).floor() as usize;
        (x < cols && y < rows).then_some((x, y))
    }

    /// Top-left pixel of a cell
    #[inline]
    pub fn cell_origin(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(x as f32, y as f32) * self.cell_size
    }

    /// Pixel extent actually covered by cells
    pub fn board_size(&self) -> Vec2 {
        let (cols, rows) = self.grid_dimensions();
        self.cell_origin(cols, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions_floor() {
        let layout = CanvasLayout::new(805.0, 399.0, 10);
        assert_eq!(layout.grid_dimensions(), (80, 39));
        assert_eq!(layout.board_size(), Vec2::new(800.0, 390.0));
    }

    #[test]
    fn test_cell_at() {
        let layout = CanvasLayout::new(100.0, 50.0, 10);
        assert_eq!(layout.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(layout.cell_at(19.9, 10.0), Some((1, 1)));
        assert_eq!(layout.cell_at(99.9, 49.9), Some((9, 4)));
        assert_eq!(layout.cell_at(100.0, 10.0), None);
        assert_eq!(layout.cell_at(-0.5, 10.0), None);
        assert_eq!(layout.cell_at(f32::NAN, 10.0), None);
    }

    #[test]
    fn test_canvas_smaller_than_cell() {
        let layout = CanvasLayout::new(5.0, 5.0, 10);
        assert_eq!(layout.grid_dimensions(), (0, 0));
        assert_eq!(layout.cell_at(1.0, 1.0), None);
    }

    #[test]
    fn test_zero_cell_size_is_clamped() {
        let layout = CanvasLayout::new(3.0, 2.0, 0);
        assert_eq!(layout.grid_dimensions(), (3, 2));
    }
}
