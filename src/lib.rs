// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Orchestration, geometry, and scheduling
pub mod application;

// Infrastructure layer - Rendering and input glue
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{AutomatonError, Cell, Grid, Pattern, Seed, StepMode, presets};
pub use application::{Geometry, GridAutomaton, Session, TARGET_COLS, TICK_INTERVAL};
pub use rendering::{DrawSurface, Palette, ScreenSurface};
