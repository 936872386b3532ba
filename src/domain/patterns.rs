use super::{Cell, Grid};

/// A named set of live-cell offsets that can be stamped onto a grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub cols: usize,
    /// (row, col) offsets of alive cells relative to the anchor
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a pattern from alive-cell offsets, deriving its extent
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self {
            name,
            rows,
            cols,
            cells,
        }
    }

    /// Stamp the pattern's live cells onto the grid with the anchor at
    /// (row, col). Cells falling outside the grid are dropped, not wrapped.
    pub fn stamp(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in &self.cells {
            let _ = grid.set(row + dr, col + dc, Cell::Alive);
        }
    }
}

/// Preset pattern library
pub mod presets {
    use super::*;

    /// Glider, the smallest spaceship (period 4, moves diagonally)
    pub fn glider() -> Pattern {
        Pattern::new("Glider", vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)])
    }

    /// Lightweight spaceship (period 4, moves horizontally)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            vec![
                (0, 3),
                (1, 4),
                (2, 4),
                (3, 0),
                (3, 4),
                (4, 1),
                (4, 2),
                (4, 3),
            ],
        )
    }

    /// Block, the simplest still life
    pub fn block() -> Pattern {
        Pattern::new("Block", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker, the smallest oscillator (period 2)
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (0, 1), (0, 2)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_is_derived_from_offsets() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        assert_eq!(glider.cells.len(), 5);

        let lwss = presets::lwss();
        assert_eq!((lwss.rows, lwss.cols), (5, 5));
        assert_eq!(lwss.cells.len(), 8);
    }

    #[test]
    fn test_stamp_sets_only_listed_cells() {
        let mut grid = Grid::new(8, 8).unwrap();
        presets::block().stamp(&mut grid, 3, 3);
        assert_eq!(grid.population(), 4);
        assert!(grid.get(3, 3).unwrap().is_alive());
        assert!(grid.get(4, 4).unwrap().is_alive());
        assert!(!grid.get(2, 2).unwrap().is_alive());
    }

    #[test]
    fn test_stamp_drops_cells_past_the_edge() {
        let mut grid = Grid::new(5, 5).unwrap();
        presets::block().stamp(&mut grid, 4, 4);
        assert_eq!(grid.population(), 1);
        assert!(grid.get(4, 4).unwrap().is_alive());
    }
}
