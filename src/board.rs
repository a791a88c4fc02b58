use rand::{thread_rng, Rng};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;
pub const BLANK: u8 = 0;

/// Boards whose heuristic is below this count as solved.
///
/// The heuristic of a permutation is always even, so `< 2` and `== 0` accept
/// the same boards; the threshold stays explicit so either reading can be
/// configured.
pub const SOLVED_THRESHOLD: u32 = 2;

/// Neighbour of the blank, in the order successors are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Cell next to `index` in this direction, if it is on the grid.
    pub fn neighbor(&self, index: usize) -> Option<usize> {
        let (dr, dc) = self.as_offset();

        let row = (index / SIZE) as isize + dr;
        let col = (index % SIZE) as isize + dc;

        if row >= 0 && row < SIZE as isize && col >= 0 && col < SIZE as isize {
            Some(row as usize * SIZE + col as usize)
        } else {
            None
        }
    }
}

/// One 3x3 configuration. Index `i` is row `i / 3`, column `i % 3`.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [u8; CELLS],
    heuristic: u32,
}

impl Board {
    /// Parses `initial` when given, otherwise places the tiles at random.
    pub fn new(initial: Option<&str>) -> Result<Self, BoardError> {
        match initial {
            Some(digits) => Self::parse(digits),
            None => Ok(Self::random(&mut thread_rng())),
        }
    }

    pub fn solved() -> Self {
        Self::from_cells([1, 2, 3, 4, 5, 6, 7, 8, BLANK])
    }

    pub fn parse(digits: &str) -> Result<Self, BoardError> {
        let count = digits.chars().count();
        if count != CELLS {
            return Err(BoardError::WrongLength(count));
        }

        let mut cells = [BLANK; CELLS];
        let mut seen = [false; CELLS];

        for (index, ch) in digits.chars().enumerate() {
            let piece = match ch.to_digit(10) {
                Some(d) if (d as usize) < CELLS => d as u8,
                _ => return Err(BoardError::InvalidDigit { index, ch }),
            };
            if seen[piece as usize] {
                return Err(BoardError::DuplicateTile(piece));
            }
            seen[piece as usize] = true;
            cells[index] = piece;
        }

        Ok(Self::from_cells(cells))
    }

    /// Drops tiles 1..=8 one at a time onto random empty cells, retrying
    /// whenever the chosen cell is taken. The cell left over is the blank.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [BLANK; CELLS];

        for piece in 1..CELLS as u8 {
            loop {
                let location = rng.gen_range(0..CELLS);
                if cells[location] == BLANK {
                    cells[location] = piece;
                    break;
                }
            }
        }

        Self::from_cells(cells)
    }

    fn from_cells(cells: [u8; CELLS]) -> Self {
        let mut board = Self {
            cells,
            heuristic: 0,
        };
        board.heuristic = board.manhattan_distance();
        board
    }

    pub fn piece_at(&self, index: usize) -> u8 {
        self.cells[index]
    }

    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    pub fn index_of(&self, piece: u8) -> Option<usize> {
        self.cells.iter().position(|&p| p == piece)
    }

    pub fn blank_index(&self) -> usize {
        // Every board is a permutation of 0..9, so the blank is always present.
        self.index_of(BLANK).unwrap_or_default()
    }

    /// Slides `piece` into the blank. Fails unless the piece sits next to it.
    pub fn move_piece(&mut self, piece: u8) -> Result<(), BoardError> {
        let from = self
            .index_of(piece)
            .filter(|_| piece != BLANK)
            .ok_or(BoardError::PieceNotFound(piece))?;

        if !self.possible_moves().contains(&from) {
            return Err(BoardError::NotAdjacent(piece));
        }

        self.slide(from);
        Ok(())
    }

    /// Swaps the cell at `from` with the blank. `from` must come from
    /// `possible_moves`.
    pub(crate) fn slide(&mut self, from: usize) {
        let to = self.blank_index();
        self.cells.swap(from, to);
        self.heuristic = self.manhattan_distance();
    }

    /// Indices of the cells adjacent to the blank.
    pub fn possible_moves(&self) -> Vec<usize> {
        let blank = self.blank_index();
        Direction::ALL
            .iter()
            .filter_map(|dir| dir.neighbor(blank))
            .collect()
    }

    pub fn heuristic(&self) -> u32 {
        self.heuristic
    }

    pub fn is_solved(&self) -> bool {
        self.is_solved_within(SOLVED_THRESHOLD)
    }

    pub fn is_solved_within(&self, threshold: u32) -> bool {
        self.heuristic < threshold
    }

    /// The tiles read as a base-10 number, cell 0 in the units place.
    pub fn canonical_key(&self) -> u32 {
        self.cells
            .iter()
            .rev()
            .fold(0, |key, &piece| key * 10 + piece as u32)
    }

    /// Boards rank by heuristic alone.
    pub fn cmp_heuristic(&self, other: &Self) -> Ordering {
        self.heuristic.cmp(&other.heuristic)
    }

    /// Whether the goal is reachable at all. On a 3-wide board that is the
    /// case exactly when the tile inversion count is even.
    pub fn is_solvable(&self) -> bool {
        Self::count_inversions(&self.cells) % 2 == 0
    }

    fn count_inversions(cells: &[u8]) -> usize {
        cells
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != BLANK)
            .map(|(i, &val)| {
                cells[i + 1..]
                    .iter()
                    .filter(|&&next| next != BLANK && next < val)
                    .count()
            })
            .sum()
    }

    // Sums over the blank as well; its home is the bottom-right cell.
    fn manhattan_distance(&self) -> u32 {
        let mut distance = 0;
        for (index, &piece) in self.cells.iter().enumerate() {
            let target = if piece == BLANK {
                CELLS - 1
            } else {
                piece as usize - 1
            };
            distance += (index / SIZE).abs_diff(target / SIZE);
            distance += (index % SIZE).abs_diff(target % SIZE);
        }
        distance as u32
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIZE) {
            let line: Vec<String> = row
                .iter()
                .map(|&piece| {
                    if piece == BLANK {
                        " ".to_string()
                    } else {
                        piece.to_string()
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
