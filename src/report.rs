//! Output formats for finished searches: a plain-text move log and
//! per-run benchmark records.

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;

use crate::board::Board;
use crate::heuristic::Heuristic;
use crate::search::{Path, SearchResult, Strategy};

fn write_rows<W: Write>(writer: &mut W, board: &Board) -> io::Result<()> {
    for row in board.rows() {
        let line: Vec<String> = row.iter().map(|tile| tile.to_string()).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    Ok(())
}

/// Writes the initial board followed by every move and the board it produced.
pub fn write_move_log<W: Write>(writer: &mut W, initial: &Board, path: &Path) -> io::Result<()> {
    writeln!(writer, "Initial State:")?;
    write_rows(writer, initial)?;
    writeln!(writer)?;

    for (number, step) in path.iter().enumerate() {
        writeln!(writer, "Move: {}", number + 1)?;
        writeln!(writer, "Direction: {}", step.direction)?;
        writeln!(writer, "Resulting State:")?;
        write_rows(writer, step.state.board())?;
        writeln!(writer)?;
    }
    Ok(())
}

/// One strategy run on one puzzle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub puzzle: Vec<u32>,
    pub algorithm: &'static str,
    pub heuristic: Option<Heuristic>,
    pub seconds: f64,
    pub nodes_expanded: usize,
    pub path_moves: usize,
}

impl RunRecord {
    pub fn new(
        puzzle: &Board,
        strategy: Strategy,
        elapsed: Duration,
        result: &SearchResult,
    ) -> Self {
        Self {
            puzzle: puzzle.tiles().to_vec(),
            algorithm: strategy.name(),
            heuristic: strategy.heuristic(),
            seconds: elapsed.as_secs_f64(),
            nodes_expanded: result.nodes_expanded,
            path_moves: result.path.len(),
        }
    }
}

/// Emits records as JSON lines.
pub fn write_records<W: Write>(writer: &mut W, records: &[RunRecord]) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, record)?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::State;
    use crate::search::search;

    fn solved_two_moves() -> (Board, SearchResult) {
        let board = Board::new(vec![1, 2, 3, 4, 5, 6, 0, 7, 8], 3).unwrap();
        let result = search(Strategy::Bfs, &State::new(board.clone())).unwrap();
        (board, result)
    }

    #[test_log::test]
    fn test_move_log_layout() {
        let (board, result) = solved_two_moves();
        let mut out = Vec::new();
        write_move_log(&mut out, &board, &result.path).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = "\
Initial State:
1 2 3
4 5 6
0 7 8

Move: 1
Direction: right
Resulting State:
1 2 3
4 5 6
7 0 8

Move: 2
Direction: right
Resulting State:
1 2 3
4 5 6
7 8 0

";
        assert_eq!(text, expected);
    }

    #[test_log::test]
    fn test_records_as_json_lines() {
        let (board, result) = solved_two_moves();
        let records = vec![
            RunRecord::new(
                &board,
                Strategy::AStar(Heuristic::Chebyshev),
                Duration::from_millis(250),
                &result,
            ),
            RunRecord::new(&board, Strategy::Bfs, Duration::ZERO, &result),
        ];

        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["algorithm"], "A*");
        assert_eq!(first["heuristic"], "chebyshev");
        assert_eq!(first["seconds"], 0.25);
        assert_eq!(first["path_moves"], 2);
        assert_eq!(first["puzzle"], serde_json::json!([1, 2, 3, 4, 5, 6, 0, 7, 8]));

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(second["heuristic"].is_null());
    }
}
