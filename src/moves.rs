use std::collections::BTreeSet;

use smallvec::{Array, SmallVec};

use crate::board::{Board, Cell, SIZE};

/// (row, column) steps: right, up, left, down
const DELTAS: &[(i32, i32)] = &[(0, 1), (-1, 0), (0, -1), (1, 0)];

/// Cells passed when travelling from `from` in direction `delta`, nearest
/// first, up to the board edge.
#[auto_enums::auto_enum(Iterator)]
fn ray(from: (usize, usize), delta: (i32, i32)) -> impl Iterator<Item = (usize, usize)> {
    let (y, x) = from;
    match delta {
        (0, 1) => (x + 1..SIZE).map(move |xx| (y, xx)),
        (0, -1) => (0..x).rev().map(move |xx| (y, xx)),
        (1, 0) => (y + 1..SIZE).map(move |yy| (yy, x)),
        (-1, 0) => (0..y).rev().map(move |yy| (yy, x)),
        _ => unreachable!(),
    }
}

/// Slides the piece at `from` until it bumps into another piece.
///
/// Running off the edge is not a stop: a piece with nothing in its way
/// cannot move in that direction at all. Neither can a piece whose
/// neighbour blocks it straight away.
fn slide(b: &Board, from: (usize, usize), delta: (i32, i32)) -> Option<Board> {
    let mut stop = None;
    for pos in ray(from, delta) {
        if b[pos] != Cell::Empty {
            let to = stop?;
            let mut r = *b;
            r[to] = b[from];
            r[from] = Cell::Empty;
            return Some(r);
        }
        stop = Some(pos);
    }

    None
}

fn perform_moves<const N: usize>(board: &Board, out: &mut SmallVec<[Board; N]>)
where
    [Board; N]: Array<Item = Board>,
{
    for from in board.pieces() {
        for &delta in DELTAS {
            if let Some(next) = slide(board, from, delta) {
                out.push(next);
            }
        }
    }
}

/// Every board one slide away from `b`, exactly as the pieces land (not
/// canonicalized).
pub fn slides(b: &Board) -> SmallVec<[Board; 16]> {
    let mut buffer = SmallVec::new();
    perform_moves(b, &mut buffer);
    buffer
}

/// Canonical boards reachable from `b` with one slide.
///
/// A slide can land on a mirror image of the starting position, so the
/// result may contain `b.canonical()` itself.
pub fn onestep(b: &Board) -> BTreeSet<Board> {
    slides(b).iter().map(Board::canonical).collect()
}
