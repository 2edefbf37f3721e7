//! Search strategies over the puzzle's state graph.
//!
//! Every strategy takes an initial [`State`] and returns the goal state, the
//! path that reaches it and how many nodes were expanded. A*, BFS and DFS
//! share one discipline: a popped state is tested for the goal, skipped if it
//! was already expanded, and otherwise expanded into successors that are not
//! yet visited. IDDFS instead keeps a visited set scoped to the current path.

mod astar;
mod bfs;
mod dfs;
mod iddfs;

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::board::State;
use crate::error::{PuzzleError, Result};
use crate::heuristic::Heuristic;
use crate::moves::{apply_move, successors, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    AStar(Heuristic),
    Bfs,
    Dfs,
    Iddfs,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::AStar(_) => "A*",
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Iddfs => "IDDFS",
        }
    }

    pub fn heuristic(&self) -> Option<Heuristic> {
        match self {
            Strategy::AStar(h) => Some(*h),
            _ => None,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AStar(h) => write!(f, "A* with {}", h),
            other => f.write_str(other.name()),
        }
    }
}

/// One move of a solution and the state it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub direction: Move,
    pub state: State,
}

/// Moves leading from an initial state to the goal, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn directions(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().map(|step| step.direction)
    }

    /// Re-applies every move from `initial`, checking each recorded state.
    /// Returns the final state, or `None` if any step does not follow.
    pub fn replay(&self, initial: &State) -> Option<State> {
        let mut current = initial.clone();
        for step in &self.steps {
            let next = apply_move(&current, step.direction)?;
            if next != step.state {
                return None;
            }
            current = next;
        }
        Some(current)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub state: State,
    pub path: Path,
    pub nodes_expanded: usize,
}

/// Runs `strategy` from `initial`. Fails with [`PuzzleError::NoSolution`] if
/// the reachable space is exhausted, which only happens for unsolvable
/// boards.
///
/// DFS and IDDFS have no node budget. On boards larger than 3×3 they can run
/// for a very long time; bounding them is up to the caller.
pub fn search(strategy: Strategy, initial: &State) -> Result<SearchResult> {
    let size = initial.size();
    debug!("{} search started on {}x{} board", strategy, size, size);

    let outcome = match strategy {
        Strategy::AStar(heuristic) => astar::solve(initial, heuristic),
        Strategy::Bfs => bfs::solve(initial),
        Strategy::Dfs => dfs::solve(initial),
        Strategy::Iddfs => iddfs::solve(initial),
    };

    match &outcome {
        Ok(result) => debug!(
            "{} search finished: {} moves, {} nodes expanded",
            strategy,
            result.path.len(),
            result.nodes_expanded
        ),
        Err(err) => debug!("{} search failed: {}", strategy, err),
    }
    outcome
}

/// Arena of discovered states. Each node remembers its parent and the move
/// that reached it, so a path is only materialized once the goal is found.
struct SearchTree {
    nodes: Vec<Node>,
}

struct Node {
    state: State,
    parent: Option<(usize, Move)>,
}

impl SearchTree {
    const ROOT: usize = 0;

    fn new(initial: State) -> Self {
        Self {
            nodes: vec![Node {
                state: initial,
                parent: None,
            }],
        }
    }

    fn insert(&mut self, state: State, parent: usize, movement: Move) -> usize {
        self.nodes.push(Node {
            state,
            parent: Some((parent, movement)),
        });
        self.nodes.len() - 1
    }

    fn state(&self, id: usize) -> &State {
        &self.nodes[id].state
    }

    fn into_result(mut self, goal: usize, nodes_expanded: usize) -> SearchResult {
        let mut steps = Vec::new();
        let mut current = goal;
        while let Some((parent, direction)) = self.nodes[current].parent {
            steps.push(Step {
                direction,
                state: self.nodes[current].state.clone(),
            });
            current = parent;
        }
        steps.reverse();

        let state = self.nodes.swap_remove(goal).state;
        SearchResult {
            state,
            path: Path::from_steps(steps),
            nodes_expanded,
        }
    }
}

/// Order in which discovered nodes are taken back out for expansion.
trait Frontier: Default {
    fn push(&mut self, node: usize);
    fn pop(&mut self) -> Option<usize>;
}

/// Graph search shared by BFS and DFS; only the frontier order differs.
fn explore<F: Frontier>(initial: &State) -> Result<SearchResult> {
    let mut tree = SearchTree::new(initial.clone());
    let mut frontier = F::default();
    let mut visited: HashSet<State> = HashSet::new();
    let mut nodes_expanded = 0;

    frontier.push(SearchTree::ROOT);

    while let Some(node) = frontier.pop() {
        nodes_expanded += 1;

        let state = tree.state(node);
        if state.is_goal() {
            return Ok(tree.into_result(node, nodes_expanded));
        }
        if visited.contains(state) {
            continue;
        }
        let state = state.clone();
        visited.insert(state.clone());

        for (movement, next) in successors(&state) {
            if !visited.contains(&next) {
                let child = tree.insert(next, node, movement);
                frontier.push(child);
            }
        }
    }

    Err(PuzzleError::NoSolution)
}
