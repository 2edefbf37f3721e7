use std::fmt;

use serde::Serialize;

use crate::board::State;

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Up,
    Down,
    Right,
    Left,
}

impl Move {
    /// Every direction in generation order. All strategies expand successors
    /// in this order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Right, Move::Left];

    /// `(row, col)` displacement of the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
            Move::Left => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Right => "right",
            Move::Left => "left",
        };
        write!(f, "{}", s)
    }
}

/// Whether `movement` keeps the blank on the grid and does not send it back
/// to where it was before the last move.
pub fn is_legal(state: &State, movement: Move) -> bool {
    match state.board().blank_target(movement) {
        Some(target) => state.prev_blank() != Some(target),
        None => false,
    }
}

pub fn legal_moves(state: &State) -> Vec<Move> {
    Move::ALL
        .into_iter()
        .filter(|&movement| is_legal(state, movement))
        .collect()
}

/// Produces the successor reached by `movement`, or `None` if the move is
/// not legal from `state`.
pub fn apply_move(state: &State, movement: Move) -> Option<State> {
    if !is_legal(state, movement) {
        return None;
    }
    let from = state.board().blank();
    let board = state.board().slide(movement)?;
    Some(State::with_prev_blank(board, from))
}

/// Legal successors of `state` paired with the move that produced them.
pub fn successors(state: &State) -> impl Iterator<Item = (Move, State)> + '_ {
    Move::ALL
        .into_iter()
        .filter_map(move |movement| apply_move(state, movement).map(|next| (movement, next)))
}
