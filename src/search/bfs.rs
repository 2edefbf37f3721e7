use std::collections::VecDeque;

use crate::board::State;
use crate::error::Result;

use super::{explore, Frontier, SearchResult};

/// First in, first out: nodes are expanded by non-decreasing depth.
#[derive(Default)]
struct Queue(VecDeque<usize>);

impl Frontier for Queue {
    fn push(&mut self, node: usize) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop_front()
    }
}

pub(super) fn solve(initial: &State) -> Result<SearchResult> {
    explore::<Queue>(initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test_log::test]
    fn test_shortest_path_on_sample() {
        let initial = State::new(Board::new(vec![2, 7, 5, 0, 8, 4, 3, 1, 6], 3).unwrap());
        let result = solve(&initial).unwrap();
        assert_eq!(result.path.len(), 23);
        assert!(result.state.is_goal());
    }

    #[test_log::test]
    fn test_two_moves_from_goal() {
        let initial = State::new(Board::new(vec![1, 2, 3, 4, 5, 6, 0, 7, 8], 3).unwrap());
        let result = solve(&initial).unwrap();
        let dirs: Vec<_> = result.path.directions().collect();
        assert_eq!(dirs, vec![crate::moves::Move::Right, crate::moves::Move::Right]);
    }
}
