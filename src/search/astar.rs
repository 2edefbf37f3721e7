use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::board::State;
use crate::error::{PuzzleError, Result};
use crate::heuristic::{GoalPositions, Heuristic};
use crate::moves::successors;

use super::{SearchResult, SearchTree};

#[derive(Clone, Debug)]
struct HeapEntry {
    f: f64,
    g: usize,
    seq: usize,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reversed so the max-heap pops the lowest `f`, then the lowest `g`, then
/// the earliest pushed.
impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub(super) fn solve(initial: &State, heuristic: Heuristic) -> Result<SearchResult> {
    let goals = GoalPositions::new(initial.size());
    let mut tree = SearchTree::new(initial.clone());
    let mut open_set = BinaryHeap::new();
    let mut closed_set: HashSet<State> = HashSet::new();
    let mut nodes_expanded = 0;
    let mut seq = 0;

    open_set.push(HeapEntry {
        f: heuristic.estimate(initial.board(), &goals),
        g: 0,
        seq,
        node: SearchTree::ROOT,
    });

    while let Some(current) = open_set.pop() {
        nodes_expanded += 1;

        let state = tree.state(current.node);
        if state.is_goal() {
            return Ok(tree.into_result(current.node, nodes_expanded));
        }
        if closed_set.contains(state) {
            continue;
        }
        let state = state.clone();
        closed_set.insert(state.clone());

        for (movement, next) in successors(&state) {
            if closed_set.contains(&next) {
                continue;
            }
            let g = current.g + 1;
            let f = g as f64 + heuristic.estimate(next.board(), &goals);
            let node = tree.insert(next, current.node, movement);

            seq += 1;
            open_set.push(HeapEntry { f, g, seq, node });
        }
    }

    Err(PuzzleError::NoSolution)
}
