//! Best-first solver for the 8-tiles sliding puzzle.

pub mod board;
pub mod config;
pub mod error;
pub mod node;
pub mod search;

pub use board::{Board, Direction, SOLVED_THRESHOLD};
pub use config::SolverConfig;
pub use error::{BoardError, SearchError};
pub use node::{NodeId, SearchNode};
pub use search::{solve, SearchOutcome, SearchStats, SearchTree, SolutionPath};
