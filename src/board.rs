use std::{
    fmt::{Display, Write},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::error::{Error, Result};

pub const SIZE: usize = 5;
pub const CELLS: usize = SIZE * SIZE;
pub const CENTER: (usize, usize) = (SIZE / 2, SIZE / 2);

/// every cell but the hero's can hold a robot
pub const MAX_ROBOTS: usize = CELLS - 1;

pub type Grid<T> = [[T; SIZE]; SIZE];

/// Contents of one cell. The declaration order is the rank used when
/// comparing boards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Hero,
    Robot,
}

impl Cell {
    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Hero => 'x',
            Cell::Robot => 'r',
        }
    }

    // problem files name their robots with letters, only the hero is special
    fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'x' => Some(Cell::Hero),
            'a'..='z' => Some(Cell::Robot),
            _ => None,
        }
    }
}

/// A 5×5 Lunar Lockout position.
///
/// The derived ordering is lexicographic over rows, then columns, which is
/// what canonicalization and the sorted vertex list rely on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Board {
    cells: Grid<Cell>,
}

impl Board {
    pub fn from_grid(cells: Grid<Cell>) -> Board {
        Board { cells }
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.cells
    }

    /// Builds a board from a robot bitmask (bit `y * 5 + x`) and the hero's
    /// bit index. The hero bit must not be set in `robots`.
    pub fn from_mask(robots: u32, hero: usize) -> Board {
        debug_assert!(robots & (1 << hero) == 0);

        let mut board = Board::default();
        for ix in 0..CELLS {
            let pos = (ix / SIZE, ix % SIZE);
            if ix == hero {
                board[pos] = Cell::Hero;
            } else if robots & (1 << ix) != 0 {
                board[pos] = Cell::Robot;
            }
        }

        board
    }

    pub fn is_solution(&self) -> bool {
        self[CENTER] == Cell::Hero
    }

    pub fn hero(&self) -> Option<(usize, usize)> {
        self.positions().find(|&pos| self[pos] == Cell::Hero)
    }

    pub fn robot_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == Cell::Robot).count()
    }

    /// Positions of every occupied cell, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions().filter(move |&pos| self[pos] != Cell::Empty)
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| (y, x)))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for row in &self.cells {
            if !first {
                f.write_char('\n')?;
            } else {
                first = false;
            }

            for c in row {
                f.write_char(c.to_char())?;
            }
        }

        Ok(())
    }
}

impl Index<(usize, usize)> for Board {
    type Output = Cell;
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index.0][index.1]
    }
}

impl IndexMut<(usize, usize)> for Board {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.cells[index.0][index.1]
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Board> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        Board::from_rows(&rows)
    }
}

impl Board {
    pub(crate) fn from_rows(rows: &[&str]) -> Result<Board> {
        if rows.len() != SIZE {
            return Err(Error::Board(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut board = Board::default();
        for (y, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != SIZE {
                return Err(Error::Board(format!("row {:?} is not {} cells wide", row, SIZE)));
            }

            for (x, &c) in chars.iter().enumerate() {
                board[(y, x)] = Cell::from_char(c)
                    .ok_or_else(|| Error::Board(format!("unexpected character {:?}", c)))?;
            }
        }

        let heroes = board.cells.iter().flatten().filter(|&&c| c == Cell::Hero).count();
        if heroes != 1 {
            return Err(Error::Board(format!("expected one hero, found {}", heroes)));
        }

        Ok(board)
    }
}

pub fn parse_board(b: &str) -> Result<Board> {
    b.parse()
}
