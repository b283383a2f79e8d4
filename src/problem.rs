//! Puzzle files and single-position solving.
//!
//! A puzzle file lists problems as a header line `problem <nr> <level>`
//! followed by the five board rows. `x` is the hero and any other lowercase
//! letter is a robot. Lines that are neither are ignored, so comments and
//! blank lines can go anywhere outside a board.

use pathfinding::directed::bfs::bfs;

use crate::{
    board::{Board, SIZE},
    error::{Error, Result},
    moves::onestep,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub number: u32,
    pub level: String,
    pub board: Board,
}

fn is_board_row(line: &str) -> bool {
    line.len() == SIZE && line.bytes().all(|c| c == b'.' || c.is_ascii_lowercase())
}

pub fn parse_problems(input: &str) -> Result<Vec<Problem>> {
    let mut problems = Vec::new();
    let mut header: Option<(u32, String)> = None;
    let mut rows: Vec<&str> = Vec::with_capacity(SIZE);

    for (ix, line) in input.lines().enumerate() {
        let line_no = ix + 1;
        let line = line.trim();
        let err = |message: String| Error::Parse {
            line: line_no,
            message,
        };

        let mut fields = line.split_whitespace();
        if fields.next() == Some("problem") {
            if !rows.is_empty() {
                return Err(err("new problem before the previous board was complete".into()));
            }

            let fields: Vec<&str> = fields.collect();
            let (number, level) = match fields.as_slice() {
                [number, level] => (number, level),
                _ => return Err(err(format!("expected `problem <nr> <level>`, got {:?}", line))),
            };
            let number = number
                .parse()
                .map_err(|e| err(format!("bad problem number {:?}: {}", number, e)))?;
            header = Some((number, level.to_string()));
            continue;
        }

        if !is_board_row(line) {
            continue;
        }

        if header.is_none() {
            return Err(err("board row before any `problem` header".into()));
        }

        rows.push(line);
        if rows.len() == SIZE {
            let board = Board::from_rows(&rows).map_err(|e| err(e.to_string()))?;
            rows.clear();

            if let Some((number, level)) = header.take() {
                problems.push(Problem {
                    number,
                    level,
                    board,
                });
            }
        }
    }

    if !rows.is_empty() {
        return Err(Error::Parse {
            line: input.lines().count(),
            message: format!("board ends after {} of {} rows", rows.len(), SIZE),
        });
    }

    Ok(problems)
}

/// Fewest slides that bring the hero to the center, or `None` if no sequence
/// of slides ever does.
pub fn solve(board: &Board) -> Option<u32> {
    let path = bfs(&board.canonical(), onestep, Board::is_solution)?;
    Some(path.len() as u32 - 1)
}
