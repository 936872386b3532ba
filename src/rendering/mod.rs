use crate::domain::Grid;
use macroquad::prelude::*;

/// Two-color cell palette plus the border stroke drawn around every cell
pub struct Palette {
    pub alive: Color,
    pub dead: Color,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color::from_rgba(0, 0, 0, 255),
            dead: Color::from_rgba(0, 128, 0, 255),
            border: Color::from_rgba(0, 0, 0, 255),
        }
    }
}

/// Minimal drawing capability the automaton needs: fill a rectangle
/// with a color and stroke its border. Anything satisfying this can
/// act as the render target.
pub trait DrawSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color);
}

/// Surface backed by macroquad's immediate-mode draw calls
pub struct ScreenSurface;

impl DrawSurface for ScreenSurface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color) {
        draw_rectangle_lines(x, y, w, h, thickness, color);
    }
}

/// Draw every cell of the grid as a filled square with a border stroke,
/// `cell_size` pixels per cell edge. Reads the grid, never mutates it.
pub fn draw_grid(grid: &Grid, cell_size: f32, palette: &Palette, surface: &mut impl DrawSurface) {
    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * cell_size;
        let y = row as f32 * cell_size;
        let fill = if cell.is_alive() {
            palette.alive
        } else {
            palette.dead
        };
        surface.fill_rect(x, y, cell_size, cell_size, fill);
        surface.stroke_rect(x, y, cell_size, cell_size, 1.0, palette.border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    /// Test surface that records every draw call
    #[derive(Default)]
    struct RecordingSurface {
        fills: Vec<(f32, f32, Color)>,
        strokes: usize,
    }

    impl DrawSurface for RecordingSurface {
        fn fill_rect(&mut self, x: f32, y: f32, _w: f32, _h: f32, color: Color) {
            self.fills.push((x, y, color));
        }

        fn stroke_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32, _t: f32, _color: Color) {
            self.strokes += 1;
        }
    }

    #[test]
    fn test_every_cell_is_filled_and_stroked() {
        let grid = Grid::new(3, 4).unwrap();
        let mut surface = RecordingSurface::default();
        draw_grid(&grid, 10.0, &Palette::default(), &mut surface);
        assert_eq!(surface.fills.len(), 12);
        assert_eq!(surface.strokes, 12);
    }

    #[test]
    fn test_alive_and_dead_use_their_palette_colors() {
        let palette = Palette::default();
        let mut grid = Grid::new(1, 2).unwrap();
        grid.set(0, 1, Cell::Alive).unwrap();

        let mut surface = RecordingSurface::default();
        draw_grid(&grid, 8.0, &palette, &mut surface);

        let (x0, _, dead_color) = surface.fills[0];
        let (x1, _, alive_color) = surface.fills[1];
        assert_eq!(x0, 0.0);
        assert_eq!(x1, 8.0);
        assert_eq!(dead_color, palette.dead);
        assert_eq!(alive_color, palette.alive);
    }

    #[test]
    fn test_cells_are_placed_at_cell_size_granularity() {
        let grid = Grid::new(2, 2).unwrap();
        let mut surface = RecordingSurface::default();
        draw_grid(&grid, 5.0, &Palette::default(), &mut surface);

        let positions: Vec<(f32, f32)> = surface.fills.iter().map(|&(x, y, _)| (x, y)).collect();
        assert_eq!(
            positions,
            vec![(0.0, 0.0), (5.0, 0.0), (0.0, 5.0), (5.0, 5.0)]
        );
    }
}
