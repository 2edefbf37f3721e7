use std::fmt;

use serde::Serialize;

use crate::board::Board;

/// Goal cell of every tile for one puzzle size. Index `t` holds tile `t`'s
/// target; index 0 (the blank) is unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalPositions {
    size: usize,
    cells: Vec<(usize, usize)>,
}

impl GoalPositions {
    pub fn new(size: usize) -> Self {
        let cells = (0..size * size)
            .map(|tile| match tile {
                0 => (size.saturating_sub(1), size.saturating_sub(1)),
                t => ((t - 1) / size, (t - 1) % size),
            })
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn of(&self, tile: u32) -> (usize, usize) {
        self.cells[tile as usize]
    }

    /// `(|Δrow|, |Δcol|)` for every non-blank tile on `board`.
    fn displacements<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = (usize, usize)> + 'a {
        let size = board.size();
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(move |(idx, &tile)| {
                let (goal_row, goal_col) = self.of(tile);
                (
                    (idx / size).abs_diff(goal_row),
                    (idx % size).abs_diff(goal_col),
                )
            })
    }
}

/// Distance estimators for A*. All four are admissible and consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    Manhattan,
    Hamming,
    Euclidean,
    Chebyshev,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Hamming,
        Heuristic::Euclidean,
        Heuristic::Chebyshev,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan Distance",
            Heuristic::Hamming => "Hamming Distance",
            Heuristic::Euclidean => "Euclidean Distance",
            Heuristic::Chebyshev => "Chebyshev Distance",
        }
    }

    pub fn estimate(&self, board: &Board, goals: &GoalPositions) -> f64 {
        debug_assert_eq!(board.size(), goals.size());
        let deltas = goals.displacements(board);

        match self {
            Heuristic::Manhattan => deltas.map(|(dr, dc)| (dr + dc) as f64).sum(),
            Heuristic::Hamming => deltas.filter(|&(dr, dc)| dr + dc > 0).count() as f64,
            Heuristic::Euclidean => deltas
                .map(|(dr, dc)| ((dr * dr + dc * dc) as f64).sqrt())
                .sum(),
            Heuristic::Chebyshev => deltas.map(|(dr, dc)| dr.max(dc) as f64).sum(),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
