mod cell;
mod error;
mod grid;
mod patterns;
mod seed;
mod step_mode;

pub use cell::Cell;
pub use error::AutomatonError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use seed::{DEFAULT_SEED_DENSITY, Seed};
pub use step_mode::StepMode;
