//! Property-based tests for the board model, move generator and searches.

use proptest::prelude::*;

use npuzzle::Strategy as Solver;
use npuzzle::{apply_move, is_solvable, legal_moves, search, Board, Heuristic, Move, State};

/// Strategy: a size and a random permutation of its tiles.
fn board_strategy() -> impl Strategy<Value = (usize, Vec<u32>)> {
    (2usize..=5).prop_flat_map(|n| {
        Just((0..(n * n) as u32).collect::<Vec<u32>>())
            .prop_shuffle()
            .prop_map(move |tiles| (n, tiles))
    })
}

/// Strategy: a board scrambled from the goal by a short random walk.
fn scrambled_3x3() -> impl Strategy<Value = (Board, usize)> {
    prop::collection::vec(0usize..4, 0..12).prop_map(|walk| {
        let mut board = Board::goal(3).unwrap();
        let mut taken = 0;
        for idx in walk {
            if let Some(next) = board.slide(Move::ALL[idx]) {
                board = next;
                taken += 1;
            }
        }
        (board, taken)
    })
}

proptest! {
    #[test]
    fn round_trip_through_tiles((n, tiles) in board_strategy()) {
        let board = Board::new(tiles.clone(), n).unwrap();
        prop_assert_eq!(board.tiles(), tiles.as_slice());
        let again = Board::new(board.tiles().to_vec(), n).unwrap();
        prop_assert_eq!(again, board);
    }

    #[test]
    fn slide_then_opposite_restores((n, tiles) in board_strategy()) {
        let board = Board::new(tiles, n).unwrap();
        for movement in Move::ALL {
            if let Some(next) = board.slide(movement) {
                let back = next.slide(movement.opposite());
                prop_assert_eq!(back.as_ref(), Some(&board));
            }
        }
    }

    #[test]
    fn legal_moves_stay_on_grid((n, tiles) in board_strategy(), walk in prop::collection::vec(0usize..4, 0..20)) {
        let mut state = State::new(Board::new(tiles, n).unwrap());
        for idx in walk {
            for movement in legal_moves(&state) {
                let next = apply_move(&state, movement);
                prop_assert!(next.is_some());
                let (row, col) = next.unwrap().board().locate_blank().unwrap();
                prop_assert!(row < n && col < n);
            }
            let movement = Move::ALL[idx];
            if let Some(next) = apply_move(&state, movement) {
                prop_assert_eq!(next.prev_blank(), Some(state.board().locate_blank().unwrap()));
                state = next;
            }
        }
    }

    #[test]
    fn swapping_two_tiles_flips_solvability((n, mut tiles) in board_strategy()) {
        let before = is_solvable(&tiles, n);
        let first = tiles.iter().position(|&t| t != 0).unwrap();
        let second = tiles.iter().rposition(|&t| t != 0).unwrap();
        tiles.swap(first, second);
        prop_assert_ne!(is_solvable(&tiles, n), before);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn scrambles_are_solvable_and_optimal_searches_agree((board, walked) in scrambled_3x3()) {
        prop_assert!(is_solvable(board.tiles(), 3));
        let initial = State::new(board);

        let bfs = search(Solver::Bfs, &initial).unwrap();
        prop_assert!(bfs.path.len() <= walked);

        for h in Heuristic::ALL {
            let a_star = search(Solver::AStar(h), &initial).unwrap();
            prop_assert_eq!(a_star.path.len(), bfs.path.len());
        }

        let iddfs = search(Solver::Iddfs, &initial).unwrap();
        prop_assert_eq!(iddfs.path.len(), bfs.path.len());

        let dfs = search(Solver::Dfs, &initial).unwrap();
        prop_assert!(dfs.path.len() >= bfs.path.len());
        prop_assert_eq!(dfs.path.replay(&initial), Some(dfs.state));
    }
}
