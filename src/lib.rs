//! # npuzzle: generalized sliding-tile solver
//!
//! Solves the n×n sliding puzzle: slide the blank (`0`) around until tiles
//! read `1, 2, …, n²−1` in row-major order with the blank last.
//!
//! ## Pieces
//!
//! | Module | Role |
//! |--------|------|
//! | [`board`] | Immutable [`Board`] and search [`State`] (board + previous blank) |
//! | [`moves`] | [`Move`] directions, legal-move generation with the no-reversal rule |
//! | [`solvability`] | Inversion parity test, random solvable boards |
//! | [`heuristic`] | Manhattan, Hamming, Euclidean and Chebyshev estimators |
//! | [`search`] | A*, BFS, DFS and IDDFS behind [`search()`] |
//! | [`report`] | Move log and benchmark records |
//!
//! ```
//! use npuzzle::{search, Board, Heuristic, State, Strategy};
//!
//! let tiles = vec![2, 5, 3, 1, 0, 6, 4, 7, 8];
//! assert!(npuzzle::is_solvable(&tiles, 3));
//!
//! let initial = State::new(Board::new(tiles, 3)?);
//! let result = search(Strategy::AStar(Heuristic::Manhattan), &initial)?;
//! assert_eq!(result.path.len(), 6);
//! assert!(result.state.is_goal());
//! # Ok::<(), npuzzle::PuzzleError>(())
//! ```

pub mod board;
pub mod error;
pub mod heuristic;
pub mod moves;
pub mod report;
pub mod search;
pub mod solvability;

pub use board::{Board, State};
pub use error::{PuzzleError, Result};
pub use heuristic::{GoalPositions, Heuristic};
pub use moves::{apply_move, legal_moves, Move};
pub use search::{search, Path, SearchResult, Step, Strategy};
pub use solvability::{count_inversions, is_solvable, random_solvable};
