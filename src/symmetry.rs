//! The dihedral symmetries of the square board.
//!
//! Lunar Lockout positions that are rotations or reflections of each other
//! take the same number of moves to solve, so the search works on one
//! representative per orbit: the smallest of the eight images.

use pathfinding::directed::bfs::bfs_reach;

use crate::board::{Board, Grid, SIZE};
use crate::error::{Error, Result};

/// Quarter turn. Four of these are the identity.
pub fn rotate<T: Copy>(g: &Grid<T>) -> Grid<T> {
    let mut r = *g;
    for (y, row) in r.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = g[x][SIZE - 1 - y];
        }
    }
    r
}

/// Reflection across the horizontal midline.
pub fn mirror<T: Copy>(g: &Grid<T>) -> Grid<T> {
    let mut r = *g;
    for (y, row) in r.iter_mut().enumerate() {
        *row = g[SIZE - 1 - y];
    }
    r
}

/// All eight images of `g`: its four rotations, then the four rotations of
/// its mirror image. Images repeat when `g` has symmetries of its own.
pub fn images<T: Copy>(g: &Grid<T>) -> [Grid<T>; 8] {
    let mut out = [*g; 8];
    let mirrored = mirror(g);
    for half in 0..2 {
        let mut current = if half == 0 { *g } else { mirrored };
        for k in 0..4 {
            out[half * 4 + k] = current;
            current = rotate(&current);
        }
    }
    out
}

pub fn canonical(b: &Board) -> Board {
    images(b.grid())
        .iter()
        .map(|g| Board::from_grid(*g))
        .min()
        .unwrap_or(*b)
}

/// How many of the eight symmetries leave `b` unchanged.
pub fn stabilizer_order(b: &Board) -> usize {
    images(b.grid()).iter().filter(|g| *g == b.grid()).count()
}

impl Board {
    pub fn canonical(&self) -> Board {
        canonical(self)
    }

    pub fn is_canonical(&self) -> bool {
        canonical(self) == *self
    }
}

/// Size of the group generated by `rotate` and `mirror`, measured on a grid
/// whose cells all carry distinct labels.
pub fn symmetry_group_order() -> usize {
    let mut labelled = [[0u8; SIZE]; SIZE];
    for (y, row) in labelled.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = (y * SIZE + x) as u8;
        }
    }

    bfs_reach(labelled, |g| [mirror(g), rotate(g)]).count()
}

pub fn check_symmetry_group() -> Result<()> {
    match symmetry_group_order() {
        8 => Ok(()),
        n => Err(Error::SymmetryGroup(n)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::parse_board;

    const ASYMMETRIC: &str = "
.r...
.....
...x.
r....
....r
";

    #[test]
    fn group_has_eight_elements() {
        assert_eq!(symmetry_group_order(), 8);
        assert_eq!(check_symmetry_group(), Ok(()));
    }

    #[test]
    fn four_rotations_are_identity() {
        let board = parse_board(ASYMMETRIC).unwrap();
        let g = board.grid();
        assert_eq!(&rotate(&rotate(&rotate(&rotate(g)))), g);
        assert_eq!(&mirror(&mirror(g)), g);
        assert_ne!(&rotate(g), g);
    }

    #[test]
    fn rotate_direction() {
        let board = parse_board("x....\n.....\n.....\n.....\n.....").unwrap();
        let rotated = Board::from_grid(rotate(board.grid()));
        // r[y][x] = s[x][4 - y] moves the top-left corner to the bottom-left
        assert_eq!(rotated.hero(), Some((4, 0)));

        let mirrored = Board::from_grid(mirror(board.grid()));
        assert_eq!(mirrored.hero(), Some((4, 0)));
    }

    #[test]
    fn canonical_is_idempotent_and_invariant() {
        let board = parse_board(ASYMMETRIC).unwrap();
        let c = board.canonical();
        assert_eq!(c.canonical(), c);
        assert!(c.is_canonical());
        assert!(c <= board);

        for image in images(board.grid()) {
            assert_eq!(Board::from_grid(image).canonical(), c);
        }
    }

    #[test]
    fn images_of_asymmetric_board_are_distinct() {
        let board = parse_board(ASYMMETRIC).unwrap();
        let mut all = images(board.grid()).to_vec();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 8);
        assert_eq!(stabilizer_order(&board), 1);
    }

    #[test]
    fn centered_hero_is_fully_symmetric() {
        let board = parse_board(".....\n.....\n..x..\n.....\n.....").unwrap();
        assert_eq!(stabilizer_order(&board), 8);
        assert!(board.is_canonical());
    }
}
