use crate::domain::{AutomatonError, Cell, Grid, Seed, StepMode, presets};
use crate::rendering::{self, DrawSurface, Palette};

/// GridAutomaton owns the current generation and advances it under the
/// Game of Life rule. It has two externally visible states: before the
/// first successful `initialize` there is no grid and every other
/// operation fails with `NotInitialized`; afterwards it is ready and
/// stays ready until dropped.
///
/// Scheduling lives outside: callers decide when to step and when to
/// render.
pub struct GridAutomaton {
    grid: Option<Grid>,
    step_mode: StepMode,
    generation: u64,
}

impl GridAutomaton {
    /// Create an uninitialized automaton
    pub fn new() -> Self {
        Self {
            grid: None,
            step_mode: StepMode::default(),
            generation: 0,
        }
    }

    /// Select how generations are computed
    pub fn set_step_mode(&mut self, mode: StepMode) {
        self.step_mode = mode;
    }

    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    /// Build a fresh all-dead grid of the given dimensions, apply the
    /// seed, and make it current. Replaces any existing grid and resets
    /// the generation counter.
    pub fn initialize(
        &mut self,
        rows: usize,
        cols: usize,
        seed: &Seed,
    ) -> Result<(), AutomatonError> {
        let mut grid = Grid::new(rows, cols)?;
        seed.apply(&mut grid, &mut rand::rng());
        self.grid = Some(grid);
        self.generation = 0;
        Ok(())
    }

    fn current(&self) -> Result<&Grid, AutomatonError> {
        self.grid.as_ref().ok_or(AutomatonError::NotInitialized)
    }

    fn current_mut(&mut self) -> Result<&mut Grid, AutomatonError> {
        self.grid.as_mut().ok_or(AutomatonError::NotInitialized)
    }

    /// Advance one generation. The next grid is computed in full from a
    /// snapshot of the current one, then swapped in; the half-built
    /// generation is never observable.
    pub fn step(&mut self) -> Result<(), AutomatonError> {
        let grid = self.current()?;
        let next = match self.step_mode {
            StepMode::Serial => grid.step(),
            StepMode::ParallelRows => grid.step_parallel(),
        };
        self.grid = Some(next);
        self.generation += 1;
        Ok(())
    }

    /// Set a single cell directly, bypassing the rule.
    /// Out-of-range addresses are rejected with `OutOfBounds`.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), AutomatonError> {
        self.current_mut()?.set(row, col, cell)
    }

    /// Overwrite a glider at the clicked cell: the anchor is cleared and
    /// the five ship cells are set, regardless of what was there before.
    /// Anchors without a one-cell margin on every side are skipped; the
    /// grid is untouched and `Ok(false)` reports the skip.
    pub fn stamp_glider(&mut self, row: usize, col: usize) -> Result<bool, AutomatonError> {
        let grid = self.current_mut()?;
        let (rows, cols) = grid.dimensions();
        if row == 0 || col == 0 || row >= rows - 1 || col >= cols - 1 {
            return Ok(false);
        }
        grid.set(row, col, Cell::Dead)?;
        presets::glider().stamp(grid, row, col);
        Ok(true)
    }

    /// Kill every cell of the current grid
    pub fn clear(&mut self) -> Result<(), AutomatonError> {
        self.current_mut()?.clear();
        Ok(())
    }

    /// Draw the current grid onto the surface, `cell_size` pixels per
    /// cell. Pure read; safe to call between or instead of steps.
    pub fn render(
        &self,
        surface: &mut impl DrawSurface,
        cell_size: f32,
        palette: &Palette,
    ) -> Result<(), AutomatonError> {
        rendering::draw_grid(self.current()?, cell_size, palette, surface);
        Ok(())
    }

    /// Number of generations advanced since the last initialization
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_ready(&self) -> bool {
        self.grid.is_some()
    }

    /// Read-only view of the current grid, if any
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }
}

impl Default for GridAutomaton {
    fn default() -> Self {
        Self::new()
    }
}
