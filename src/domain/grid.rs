use super::{AutomatonError, Cell};
use rand::Rng;
use rayon::prelude::*;

/// Grid holds one generation of the automaton as a row-major matrix.
/// Generations are computed into a fresh buffer and published wholesale;
/// the buffer being read is never mutated mid-pass.
#[derive(Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell dead.
    /// Both dimensions must be positive.
    pub fn new(rows: usize, cols: usize) -> Result<Self, AutomatonError> {
        if rows == 0 || cols == 0 {
            return Err(AutomatonError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert a cell address to its index in the row-major buffer
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at address, or None when the address is out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Set a single cell directly. Out-of-range addresses are rejected.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), AutomatonError> {
        if row >= self.rows || col >= self.cols {
            return Err(AutomatonError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Count live cells in the Moore neighborhood.
    /// Positions outside the grid count as dead; the edges do not wrap.
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1i64..=1)
            .flat_map(|dr| (-1i64..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let nr = usize::try_from(row as i64 + dr).ok()?;
                let nc = usize::try_from(col as i64 + dc).ok()?;
                self.get(nr, nc)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation into a new grid (serial).
    /// Every cell is evaluated against the same prior-generation snapshot.
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.evolve(self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Row-parallel next generation using rayon.
    /// Each worker reads only the prior generation and produces its own
    /// disjoint slice of the output buffer; the result is published only
    /// once every row is complete.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..self.cols).map(move |col| {
                    let current = self.cells[self.index(row, col)];
                    current.evolve(self.live_neighbors(row, col))
                })
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Make each cell independently alive with probability `p`
    pub fn randomize(&mut self, p: f32, rng: &mut impl Rng) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random::<f32>() < p {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their addresses
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.index(row, col)]))
    }
}
