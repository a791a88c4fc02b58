use thiserror::Error;

use crate::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 9 digits for the board, got {0}")]
    WrongLength(usize),
    #[error("invalid tile '{ch}' at position {index}, tiles must be 0-8")]
    InvalidDigit { index: usize, ch: char },
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
    #[error("piece {0} is not on the board")]
    PieceNotFound(u8),
    #[error("piece {0} is not next to the blank")]
    NotAdjacent(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("node {0} does not hold a solved board")]
    NotSolved(NodeId),
    #[error("the solution path has already been reconstructed")]
    PathAlreadyReconstructed,
    #[error("no solution path has been reconstructed yet")]
    PathNotReconstructed,
    #[error("no node with id {0}")]
    UnknownNode(NodeId),
}
