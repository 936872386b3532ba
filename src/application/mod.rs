mod automaton;
mod geometry;
mod session;

pub use automaton::GridAutomaton;
pub use geometry::{Geometry, TARGET_COLS};
pub use session::{Session, TICK_INTERVAL};
