use std::cmp::Ordering;
use std::fmt;

use crate::board::Board;

/// Index of a node in the search tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A board reached during search, linked back to the node it was generated
/// from. `solution_child` is only filled in once a goal has been found.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    parent: Option<NodeId>,
    solution_child: Option<NodeId>,
}

impl SearchNode {
    /// Takes its own copy of `board`.
    pub fn new(parent: Option<NodeId>, board: &Board) -> Self {
        Self {
            board: board.clone(),
            parent,
            solution_child: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn solution_child(&self) -> Option<NodeId> {
        self.solution_child
    }

    pub(crate) fn set_solution_child(&mut self, child: NodeId) {
        debug_assert!(self.solution_child.is_none());
        self.solution_child = Some(child);
    }

    pub fn cmp_heuristic(&self, other: &Self) -> Ordering {
        self.board.cmp_heuristic(&other.board)
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for SearchNode {}

impl PartialEq<Board> for SearchNode {
    fn eq(&self, other: &Board) -> bool {
        self.board == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_keeps_a_private_copy() {
        let mut board = Board::parse("123456708").unwrap();
        let node = SearchNode::new(None, &board);

        board.move_piece(8).unwrap();
        assert_eq!(node.board().to_string(), "1 2 3\n4 5 6\n7   8\n");
        assert!(node.parent().is_none());
        assert!(node.solution_child().is_none());
    }

    #[test]
    fn comparison_delegates_to_board() {
        let solved = SearchNode::new(None, &Board::solved());
        let near = SearchNode::new(Some(NodeId(0)), &Board::parse("123456708").unwrap());

        assert_eq!(solved.cmp_heuristic(&near), Ordering::Less);
        assert_ne!(solved, near);
        assert_eq!(solved, SearchNode::new(Some(NodeId(3)), &Board::solved()));
        assert!(solved == Board::solved());
    }
}
