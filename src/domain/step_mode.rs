//! Step mode for selecting the generation-advance implementation.

/// How the next generation is computed.
/// Both modes evaluate every cell against the same prior-generation
/// snapshot and publish the new buffer only when it is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Single pass over the whole grid
    #[default]
    Serial,
    /// Rows distributed across rayon workers, disjoint output slices
    ParallelRows,
}

impl StepMode {
    /// Display name for logs and the benchmark table
    pub fn name(&self) -> &'static str {
        match self {
            StepMode::Serial => "serial",
            StepMode::ParallelRows => "parallel-rows",
        }
    }
}
