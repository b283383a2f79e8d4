use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// rotate/mirror do not generate the dihedral group of the square
    #[error("symmetry group has {0} elements, expected 8")]
    SymmetryGroup(usize),

    #[error("invalid robot range {min}..={max}, counts must satisfy min <= max <= 24")]
    RobotRange { min: usize, max: usize },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid board: {0}")]
    Board(String),
}

pub type Result<T> = std::result::Result<T, Error>;
