//! Best-first search over board configurations.
//!
//! The tree owns every node in an arena; the frontier and the visited map
//! refer to nodes by [`NodeId`]. A board enters the frontier only if its
//! canonical key has not been seen, so each configuration is expanded at most
//! once and the search always terminates.

use log::{debug, info, trace};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use crate::board::Board;
use crate::config::SolverConfig;
use crate::error::SearchError;
use crate::node::{NodeId, SearchNode};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped off the frontier.
    pub expanded: usize,
    /// Distinct boards inserted into the visited map, root included.
    pub discovered: usize,
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Boards from the starting position to the goal, both included.
    Solved { path: Vec<Board>, stats: SearchStats },
    /// Every reachable board was expanded without reaching the goal.
    Exhausted { best: Board, stats: SearchStats },
}

impl SearchOutcome {
    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Solved { stats, .. } | SearchOutcome::Exhausted { stats, .. } => *stats,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved { .. })
    }
}

/// `BinaryHeap` is a max-heap; the `Reverse` key pops the lowest heuristic
/// first, oldest insertion first among equals.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<(u32, u64)>,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

pub struct SearchTree {
    nodes: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
    visited: HashMap<u32, NodeId>,
    root: NodeId,
    current: NodeId,
    insertions: u64,
    expanded: usize,
    path_reconstructed: bool,
    config: SolverConfig,
}

impl SearchTree {
    pub fn new(root: &Board) -> Self {
        Self::with_config(root, SolverConfig::default())
    }

    /// Seeds the frontier and the visited map with `root`, which also becomes
    /// the current node.
    pub fn with_config(root: &Board, config: SolverConfig) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            visited: HashMap::new(),
            root: NodeId(0),
            current: NodeId(0),
            insertions: 0,
            expanded: 0,
            path_reconstructed: false,
            config,
        };
        tree.insert(None, root);
        tree
    }

    fn insert(&mut self, parent: Option<NodeId>, board: &Board) -> Option<NodeId> {
        let key = board.canonical_key();
        if self.visited.contains_key(&key) {
            return None;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode::new(parent, board));
        self.visited.insert(key, id);
        self.frontier.push(FrontierEntry {
            key: Reverse((board.heuristic(), self.insertions)),
            node: id,
        });
        self.insertions += 1;
        Some(id)
    }

    /// Applies each move in `moves` to a copy of the current board and stores
    /// the boards not seen before. Returns how many were new.
    pub fn expand_frontier(&mut self, moves: &[usize]) -> usize {
        let parent = self.current;
        let mut added = 0;

        for &index in moves {
            let mut board = self.nodes[parent.0].board().clone();
            board.slide(index);

            match self.insert(Some(parent), &board) {
                Some(id) => {
                    trace!("{} -> {} (h={})", parent, id, board.heuristic());
                    added += 1;
                }
                None => trace!("{}: duplicate successor {}", parent, board.canonical_key()),
            }
        }

        added
    }

    /// Removes the most promising node from the frontier and makes it
    /// current. `None` means the frontier is empty and the search is over.
    pub fn pop_best(&mut self) -> Option<NodeId> {
        let entry = self.frontier.pop()?;
        self.current = entry.node;
        self.expanded += 1;
        trace!(
            "popped {} (h={}), {} left in frontier",
            entry.node,
            self.nodes[entry.node.0].board().heuristic(),
            self.frontier.len()
        );
        Some(entry.node)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn current_id(&self) -> NodeId {
        self.current
    }

    pub fn current(&self) -> &SearchNode {
        &self.nodes[self.current.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn is_current_solved(&self) -> bool {
        self.current()
            .board()
            .is_solved_within(self.config.solved_threshold)
    }

    /// The node that first reached the board with this canonical key.
    pub fn visited(&self, key: u32) -> Option<NodeId> {
        self.visited.get(&key).copied()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.expanded,
            discovered: self.visited.len(),
        }
    }

    /// Links every node between the root and `goal` to its successor on the
    /// way to `goal`. Allowed once, and only for a solved node.
    pub fn reconstruct_path(&mut self, goal: NodeId) -> Result<(), SearchError> {
        if self.path_reconstructed {
            return Err(SearchError::PathAlreadyReconstructed);
        }
        let node = self.node(goal).ok_or(SearchError::UnknownNode(goal))?;
        if !node.board().is_solved_within(self.config.solved_threshold) {
            return Err(SearchError::NotSolved(goal));
        }

        let mut child = goal;
        while let Some(parent) = self.nodes[child.0].parent() {
            self.nodes[parent.0].set_solution_child(child);
            child = parent;
        }

        self.path_reconstructed = true;
        Ok(())
    }

    /// Walks the reconstructed path forward from the root.
    pub fn solution_path(&self) -> Result<SolutionPath<'_>, SearchError> {
        if !self.path_reconstructed {
            return Err(SearchError::PathNotReconstructed);
        }
        Ok(SolutionPath {
            tree: self,
            next: Some(self.root),
        })
    }
}

/// Boards along the solution, root first. Stops at the first board with a
/// zero heuristic, or at the goal when the threshold admits more.
pub struct SolutionPath<'a> {
    tree: &'a SearchTree,
    next: Option<NodeId>,
}

impl<'a> Iterator for SolutionPath<'a> {
    type Item = &'a Board;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next.take()?;
        let node = &self.tree.nodes[id.0];
        if node.board().heuristic() != 0 {
            self.next = node.solution_child();
        }
        Some(node.board())
    }
}

/// Runs the search from `board` until a solved board is popped or the
/// frontier runs dry, keeping the lowest-heuristic board seen along the way.
pub fn solve(board: &Board, config: &SolverConfig) -> Result<SearchOutcome, SearchError> {
    let mut tree = SearchTree::with_config(board, *config);
    let mut best = tree.root();

    while !tree.is_current_solved() {
        let moves = tree.current().board().possible_moves();
        tree.expand_frontier(&moves);

        match tree.pop_best() {
            Some(id) => {
                if tree.current().board().heuristic() < tree.nodes[best.0].board().heuristic() {
                    debug!("new best board {} (h={})", id, tree.current().board().heuristic());
                    best = id;
                }
            }
            None => {
                let stats = tree.stats();
                info!(
                    "search exhausted after expanding {} of {} boards",
                    stats.expanded, stats.discovered
                );
                return Ok(SearchOutcome::Exhausted {
                    best: tree.nodes[best.0].board().clone(),
                    stats,
                });
            }
        }
    }

    let goal = tree.current_id();
    tree.reconstruct_path(goal)?;
    let path: Vec<Board> = tree.solution_path()?.cloned().collect();
    let stats = tree.stats();
    info!(
        "solved in {} moves after expanding {} boards",
        path.len() - 1,
        stats.expanded
    );

    Ok(SearchOutcome::Solved { path, stats })
}
