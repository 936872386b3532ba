use crate::application::{Geometry, GridAutomaton};
use crate::domain::{AutomatonError, Cell, Seed, StepMode};
use crate::rendering::{DrawSurface, Palette};
use macroquad::logging::{info, warn};

/// Seconds between generations, one step per elapsed interval
pub const TICK_INTERVAL: f32 = 0.1;

/// Grids at least this many cells use the row-parallel step
const PARALLEL_CELL_THRESHOLD: usize = 250_000;

/// Session wires the automaton to the outside world: it tracks the
/// viewport, drives the fixed-interval scheduler, and routes user edits.
/// Errors coming back from the automaton are logged and dropped; none of
/// them are fatal to the loop.
pub struct Session {
    automaton: GridAutomaton,
    geometry: Option<Geometry>,
    palette: Palette,
    is_running: bool,
    tick_timer: f32,
}

impl Session {
    pub fn new() -> Self {
        Self {
            automaton: GridAutomaton::new(),
            geometry: None,
            palette: Palette::default(),
            is_running: true,
            tick_timer: 0.0,
        }
    }

    /// Re-derive geometry when the viewport changed, throwing away the
    /// old grid and reseeding randomly. Dimension changes invalidate all
    /// prior cell state, so this is a full reset.
    pub fn sync_viewport(&mut self, width: f32, height: f32) {
        let geometry = match Geometry::from_viewport(width, height) {
            Ok(geometry) => geometry,
            Err(err) => {
                warn!("ignoring viewport {}x{}: {}", width, height, err);
                return;
            }
        };
        if self.geometry == Some(geometry) {
            return;
        }

        match self
            .automaton
            .initialize(geometry.rows, geometry.cols, &Seed::default())
        {
            Ok(()) => {
                let mode = if geometry.rows * geometry.cols >= PARALLEL_CELL_THRESHOLD {
                    StepMode::ParallelRows
                } else {
                    StepMode::Serial
                };
                self.automaton.set_step_mode(mode);
                self.geometry = Some(geometry);
                self.tick_timer = 0.0;
                info!(
                    "grid reset to {}x{} ({} step)",
                    geometry.rows,
                    geometry.cols,
                    mode.name()
                );
            }
            Err(err) => warn!("grid reset failed: {}", err),
        }
    }

    /// Advance the scheduler by one frame. Runs at most one generation
    /// per call; on very large grids the cadence simply lags behind.
    pub fn tick(&mut self, delta_time: f32) {
        if !self.is_running {
            return;
        }
        self.tick_timer += delta_time;
        if self.tick_timer >= TICK_INTERVAL {
            self.step_once();
            self.tick_timer = 0.0;
        }
    }

    /// Advance exactly one generation, regardless of the timer
    pub fn step_once(&mut self) {
        if let Err(err) = self.automaton.step() {
            warn!("step skipped: {}", err);
        }
    }

    /// Stamp a glider at the clicked pixel. Clicks outside the surface
    /// or too close to the edge do nothing.
    pub fn stamp_at(&mut self, x: f32, y: f32) {
        let Some((row, col)) = self.geometry.as_ref().and_then(|g| g.point_to_cell(x, y)) else {
            return;
        };
        match self.automaton.stamp_glider(row, col) {
            Ok(true) => info!("glider stamped at ({}, {})", row, col),
            Ok(false) => {}
            Err(err) => warn!("glider stamp failed: {}", err),
        }
    }

    /// Directly edit the cell under the pixel
    pub fn paint_at(&mut self, x: f32, y: f32, cell: Cell) {
        let Some((row, col)) = self.geometry.as_ref().and_then(|g| g.point_to_cell(x, y)) else {
            return;
        };
        if let Err(err) = self.automaton.set_cell(row, col, cell) {
            warn!("paint failed: {}", err);
        }
    }

    /// Replace the grid contents with a fresh seed, keeping the geometry
    pub fn reseed(&mut self, seed: &Seed) {
        let Some(geometry) = self.geometry else {
            warn!("reseed skipped: {}", AutomatonError::NotInitialized);
            return;
        };
        match self.automaton.initialize(geometry.rows, geometry.cols, seed) {
            Ok(()) => info!("reseeded ({})", seed.label()),
            Err(err) => warn!("reseed failed: {}", err),
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        if let Err(err) = self.automaton.clear() {
            warn!("clear skipped: {}", err);
        }
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        info!("{}", if self.is_running { "running" } else { "paused" });
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.automaton.generation()
    }

    /// Draw the current grid
    pub fn render(&self, surface: &mut impl DrawSurface) {
        let Some(geometry) = self.geometry else {
            return;
        };
        if let Err(err) = self
            .automaton
            .render(surface, geometry.cell_size, &self.palette)
        {
            warn!("render skipped: {}", err);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.sync_viewport(1000.0, 600.0);
        session
    }

    #[test]
    fn test_sync_viewport_builds_the_grid() {
        let session = ready_session();
        let geometry = session.geometry().unwrap();
        assert_eq!((geometry.rows, geometry.cols), (60, 100));
    }

    #[test]
    fn test_unchanged_viewport_keeps_the_grid() {
        let mut session = ready_session();
        session.clear();
        session.paint_at(55.0, 55.0, Cell::Alive);
        // Same viewport, no reset: the painted cell survives.
        session.sync_viewport(1000.0, 600.0);
        assert_eq!(session.automaton.grid().unwrap().population(), 1);
    }

    #[test]
    fn test_resize_reseeds() {
        let mut session = ready_session();
        session.clear();
        session.sync_viewport(1000.0, 500.0);
        let geometry = session.geometry().unwrap();
        assert_eq!(geometry.rows, 50);
        // Fresh random seed at density 0.2, not the cleared grid.
        assert!(session.automaton.grid().unwrap().population() > 0);
    }

    #[test]
    fn test_degenerate_viewport_is_ignored() {
        let mut session = ready_session();
        session.sync_viewport(0.0, 0.0);
        assert_eq!(session.geometry().unwrap().rows, 60);
    }

    #[test]
    fn test_tick_steps_on_the_interval() {
        let mut session = ready_session();
        session.tick(TICK_INTERVAL / 2.0);
        assert_eq!(session.generation(), 0);
        session.tick(TICK_INTERVAL / 2.0);
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_tick_does_nothing_while_paused() {
        let mut session = ready_session();
        session.toggle_running();
        session.tick(TICK_INTERVAL * 5.0);
        assert_eq!(session.generation(), 0);
        session.step_once();
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_stamp_at_maps_pixels_to_cells() {
        let mut session = ready_session();
        session.clear();
        // cell_size is 10, so pixel (55, 55) is cell (5, 5)
        session.stamp_at(55.0, 55.0);
        let grid = session.automaton.grid().unwrap();
        assert_eq!(grid.population(), 5);
        assert!(grid.get(5, 6).unwrap().is_alive());
    }

    #[test]
    fn test_stamp_outside_surface_is_ignored() {
        let mut session = ready_session();
        session.clear();
        session.stamp_at(-5.0, 20.0);
        session.stamp_at(20.0, 6000.0);
        assert_eq!(session.automaton.grid().unwrap().population(), 0);
    }

    #[test]
    fn test_operations_before_first_viewport_are_ignored() {
        let mut session = Session::new();
        session.step_once();
        session.clear();
        session.stamp_at(10.0, 10.0);
        session.reseed(&Seed::default());
        assert!(session.geometry().is_none());
        assert_eq!(session.generation(), 0);
    }
}
