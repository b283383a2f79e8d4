//! Exhaustive analysis of the Lunar Lockout sliding puzzle on its 5×5 board.
//!
//! For a fixed number of robots every placement is generated, reduced by the
//! board's eight symmetries, linked by single slides and labelled with the
//! number of slides needed to bring the hero to the center.

pub mod board;
pub mod distance;
pub mod error;
pub mod generate;
pub mod graph;
pub mod moves;
pub mod problem;
pub mod report;
pub mod symmetry;

pub use board::{parse_board, Board, Cell, MAX_ROBOTS};
pub use distance::{distances, distances_by_relaxation, Distance};
pub use error::{Error, Result};
pub use generate::generate_boards;
pub use graph::Graph;
pub use moves::{onestep, slides};
pub use problem::{parse_problems, solve, Problem};
pub use report::{analyze, survey, Analysis, Report, RobotRange};
pub use symmetry::{canonical, check_symmetry_group};
