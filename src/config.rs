use crate::board::SOLVED_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// A board whose heuristic is below this value ends the search.
    pub solved_threshold: u32,
}

impl SolverConfig {
    pub fn with_threshold(solved_threshold: u32) -> Self {
        Self { solved_threshold }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solved_threshold: SOLVED_THRESHOLD,
        }
    }
}
