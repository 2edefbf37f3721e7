use std::collections::HashSet;

use log::trace;

use crate::board::State;
use crate::error::{PuzzleError, Result};
use crate::moves::successors;

use super::{Path, SearchResult, Step};

/// One depth-limited pass. `on_path` holds exactly the states between the
/// root and the frame currently being explored; siblings never see each
/// other's entries.
struct DepthLimited {
    on_path: HashSet<State>,
    steps: Vec<Step>,
    nodes_expanded: usize,
    cutoff: bool,
}

impl DepthLimited {
    fn new() -> Self {
        Self {
            on_path: HashSet::new(),
            steps: Vec::new(),
            nodes_expanded: 0,
            cutoff: false,
        }
    }

    fn descend(&mut self, state: &State, remaining: usize) -> Option<State> {
        if state.is_goal() {
            return Some(state.clone());
        }
        if remaining == 0 {
            self.cutoff = true;
            return None;
        }

        self.on_path.insert(state.clone());
        for (direction, next) in successors(state) {
            if self.on_path.contains(&next) {
                continue;
            }
            self.nodes_expanded += 1;
            self.steps.push(Step {
                direction,
                state: next.clone(),
            });
            if let Some(goal) = self.descend(&next, remaining - 1) {
                return Some(goal);
            }
            self.steps.pop();
        }
        self.on_path.remove(state);

        None
    }
}

/// Raises the depth limit one step at a time until a pass finds the goal.
/// `nodes_expanded` sums every pass. Stops with `NoSolution` once a pass
/// explores the whole reachable tree without hitting the limit.
pub(super) fn solve(initial: &State) -> Result<SearchResult> {
    let mut nodes_expanded = 0;
    let mut limit = 0;

    loop {
        let mut pass = DepthLimited::new();
        let found = pass.descend(initial, limit);
        nodes_expanded += pass.nodes_expanded;
        trace!(
            "IDDFS depth {} expanded {} nodes ({} total)",
            limit,
            pass.nodes_expanded,
            nodes_expanded
        );

        if let Some(state) = found {
            return Ok(SearchResult {
                state,
                path: Path::from_steps(pass.steps),
                nodes_expanded,
            });
        }
        if !pass.cutoff {
            return Err(PuzzleError::NoSolution);
        }
        limit += 1;
    }
}
