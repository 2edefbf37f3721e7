use crate::board::State;
use crate::error::Result;

use super::{explore, Frontier, SearchResult};

/// Last in, first out: the most recently generated successor is expanded
/// next, so the search dives along one branch before backtracking.
#[derive(Default)]
struct Stack(Vec<usize>);

impl Frontier for Stack {
    fn push(&mut self, node: usize) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }
}

/// Finds some path to the goal with no guarantee on its length.
pub(super) fn solve(initial: &State) -> Result<SearchResult> {
    explore::<Stack>(initial)
}
