use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("invalid {size}x{size} board: {reason}")]
    InvalidBoard { size: usize, reason: String },
    #[error("board has no blank tile")]
    CorruptBoard,
    #[error("search space exhausted without reaching the goal")]
    NoSolution,
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
