//! Parity test for reachability of the goal, plus a generator of random
//! solvable boards.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::error::Result;

/// Pairs `i < j` of non-blank tiles with `tiles[i] > tiles[j]`.
pub fn count_inversions(tiles: &[u32]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Whether `tiles` can be slid into the goal layout.
///
/// Input that is not a permutation of `0..size*size` is never reachable from
/// the goal and is reported as unsolvable.
pub fn is_solvable(tiles: &[u32], size: usize) -> bool {
    if Board::new(tiles.to_vec(), size).is_err() {
        return false;
    }
    parity_allows(tiles, size)
}

fn parity_allows(tiles: &[u32], size: usize) -> bool {
    let inversions = count_inversions(tiles);

    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        let blank_index = tiles.iter().position(|&t| t == 0).unwrap_or(0);
        let blank_row_from_bottom = size - blank_index / size;
        if blank_row_from_bottom % 2 == 0 {
            inversions % 2 == 1
        } else {
            inversions % 2 == 0
        }
    }
}

impl Board {
    pub fn is_solvable(&self) -> bool {
        parity_allows(self.tiles(), self.size())
    }
}

/// Shuffles tiles until the arrangement passes the parity test. Fails only
/// when `size` cannot describe a board.
pub fn random_solvable<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board> {
    let mut tiles = Board::goal(size)?.tiles().to_vec();

    loop {
        tiles.shuffle(rng);
        if parity_allows(&tiles, size) {
            return Board::new(tiles, size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test_log::test]
    fn test_count_inversions() {
        assert_eq!(count_inversions(&[1, 2, 3, 4, 5, 6, 7, 8, 0]), 0);
        assert_eq!(count_inversions(&[2, 7, 5, 0, 8, 4, 3, 1, 6]), 16);
        assert_eq!(count_inversions(&[8, 6, 7, 2, 5, 4, 0, 3, 1]), 24);
        // The blank never counts.
        assert_eq!(count_inversions(&[0, 2, 1]), 1);
    }

    #[test_log::test]
    fn test_odd_width() {
        assert!(is_solvable(&[2, 7, 5, 0, 8, 4, 3, 1, 6], 3));
        assert!(is_solvable(&[8, 6, 7, 2, 5, 4, 0, 3, 1], 3));
        assert!(!is_solvable(&[2, 1, 3, 4, 5, 6, 7, 8, 0], 3));
    }

    #[test_log::test]
    fn test_even_width() {
        let goal: Vec<u32> = Board::goal(4).unwrap().tiles().to_vec();
        assert!(is_solvable(&goal, 4));
        assert!(is_solvable(
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 15],
            4
        ));
        assert!(is_solvable(
            &[1, 2, 3, 4, 5, 6, 7, 8, 0, 10, 11, 12, 9, 13, 14, 15],
            4
        ));
        assert!(!is_solvable(
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0],
            4
        ));
    }

    #[test_log::test]
    fn test_invalid_input_is_unsolvable() {
        assert!(!is_solvable(&[1, 2, 3], 3));
        assert!(!is_solvable(&[1, 1, 2, 3], 2));
    }

    #[test_log::test]
    fn test_board_method_agrees() {
        let board = Board::new(vec![2, 1, 3, 0], 2).unwrap();
        assert_eq!(board.is_solvable(), is_solvable(board.tiles(), 2));
    }

    #[test_log::test]
    fn test_random_solvable_is_seeded() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..5 {
            let left = random_solvable(4, &mut a).unwrap();
            let right = random_solvable(4, &mut b).unwrap();
            assert_eq!(left, right);
            assert!(left.is_solvable());
        }
    }

    #[test_log::test]
    fn test_random_solvable_rejects_zero_size() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            random_solvable(0, &mut rng),
            Err(crate::PuzzleError::InvalidBoard { size: 0, .. })
        ));
        assert!(!is_solvable(&[], 0));
    }

    #[test_log::test]
    fn test_random_solvable_of_size_one() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_solvable(1, &mut rng).unwrap().is_goal());
    }
}
