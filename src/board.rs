use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::moves::Move;

/// Number of cells on a `size`×`size` board. Sizes below 1 are rejected.
fn cell_count(size: usize) -> Result<usize> {
    let invalid = |reason: &str| PuzzleError::InvalidBoard {
        size,
        reason: reason.to_string(),
    };
    if size == 0 {
        return Err(invalid("size must be at least 1"));
    }
    size.checked_mul(size)
        .filter(|&cells| u32::try_from(cells).is_ok())
        .ok_or_else(|| invalid("size is too large"))
}

/// An immutable n×n arrangement of tiles, stored row-major. `0` is the blank.
///
/// Boards compare and hash by layout only, so two boards reached through
/// different histories are the same key in a visited set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank_row: usize,
    blank_col: usize,
}

impl Board {
    /// Builds a board from row-major tiles, which must be a permutation of
    /// `0..size*size`.
    pub fn new(tiles: Vec<u32>, size: usize) -> Result<Self> {
        let invalid = |reason: String| PuzzleError::InvalidBoard { size, reason };

        let cells = cell_count(size)?;
        if tiles.len() != cells {
            return Err(invalid(format!(
                "expected {} tiles, got {}",
                cells,
                tiles.len()
            )));
        }

        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or_else(|| invalid(format!("tile {} is outside 0..{}", tile, cells)))?;
            if *slot {
                return Err(invalid(format!("tile {} appears more than once", tile)));
            }
            *slot = true;
        }

        // A full permutation always contains the blank.
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .ok_or(PuzzleError::CorruptBoard)?;

        Ok(Self {
            size,
            tiles,
            blank_row: blank / size,
            blank_col: blank % size,
        })
    }

    /// The solved board: tiles `1..n²` in order with the blank last.
    pub fn goal(size: usize) -> Result<Self> {
        let cells = cell_count(size)?;
        let tiles = (0..cells).map(|k| ((k + 1) % cells) as u32).collect();
        Self::new(tiles, size)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.tiles.chunks(self.size)
    }

    /// Scans the tiles for the blank.
    pub fn locate_blank(&self) -> Result<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == 0)
            .map(|idx| (idx / self.size, idx % self.size))
            .ok_or(PuzzleError::CorruptBoard)
    }

    /// Blank position tracked alongside the tiles.
    pub(crate) fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    pub fn is_goal(&self) -> bool {
        let cells = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(k, &tile)| tile as usize == (k + 1) % cells)
    }

    /// Where the blank would land after `movement`, or `None` if it would
    /// leave the grid.
    pub(crate) fn blank_target(&self, movement: Move) -> Option<(usize, usize)> {
        let (dr, dc) = movement.as_offset();

        let new_row = self.blank_row as isize + dr;
        let new_col = self.blank_col as isize + dc;
        let bound = self.size as isize;

        if new_row >= 0 && new_row < bound && new_col >= 0 && new_col < bound {
            Some((new_row as usize, new_col as usize))
        } else {
            None
        }
    }

    /// Swaps the blank with its neighbor in `movement`. Only grid edges are
    /// enforced here; see [`crate::moves::apply_move`] for the search rules.
    pub fn slide(&self, movement: Move) -> Option<Board> {
        let (new_row, new_col) = self.blank_target(movement)?;

        let mut tiles = self.tiles.clone();
        tiles.swap(
            self.blank_row * self.size + self.blank_col,
            new_row * self.size + new_col,
        );

        Some(Board {
            size: self.size,
            tiles,
            blank_row: new_row,
            blank_col: new_col,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.tiles.len().saturating_sub(1).to_string().len();
        for row in self.rows() {
            for &val in row {
                write!(f, "{:>width$} ", val, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A board together with where the blank sat before the last move.
///
/// `prev_blank` is `None` for a starting state. It exists only so the move
/// generator can refuse to undo the previous move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    board: Board,
    prev_blank: Option<(usize, usize)>,
}

impl State {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            prev_blank: None,
        }
    }

    pub(crate) fn with_prev_blank(board: Board, prev_blank: (usize, usize)) -> Self {
        Self {
            board,
            prev_blank: Some(prev_blank),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn prev_blank(&self) -> Option<(usize, usize)> {
        self.prev_blank
    }

    pub fn size(&self) -> usize {
        self.board.size
    }

    pub fn is_goal(&self) -> bool {
        self.board.is_goal()
    }
}
