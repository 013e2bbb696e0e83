use std::fmt::{Display, Formatter};

/// A matrix (or matrix literal) had the wrong shape for the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Elementwise operations and assignment need identical shapes.
    Mismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Matrix product where `lhs.columns() != rhs.rows()`.
    IncompatibleProduct {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    NotSquare {
        rows: usize,
        columns: usize,
    },
    /// A row of a literal differs in length from the first row.
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
    BufferLength {
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    Mismatch { expected: usize, actual: usize },
    /// The cross product is only defined for two 3-dimensional vectors.
    NotThreeDimensional { lhs: usize, rhs: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    RowOutOfBounds { row: usize, rows: usize },
    ColumnOutOfBounds { column: usize, columns: usize },
    OutOfBounds { index: usize, len: usize },
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Mismatch { expected, actual } => {
                write!(
                    f,
                    "matrix shapes do not match: expected {}x{}, got {}x{}",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::IncompatibleProduct { lhs, rhs } => {
                write!(
                    f,
                    "cannot multiply a {}x{} matrix by a {}x{} matrix",
                    lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
            Self::NotSquare { rows, columns } => {
                write!(f, "matrix is not square ({}x{})", rows, columns)
            }
            Self::RaggedRows {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "row {} has {} columns, expected {}",
                    row, actual, expected
                )
            }
            Self::BufferLength { expected, actual } => {
                write!(
                    f,
                    "buffer holds {} elements, shape needs {}",
                    actual, expected
                )
            }
        }
    }
}
impl std::error::Error for ShapeError {}

impl Display for DimensionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::Mismatch { expected, actual } => {
                write!(
                    f,
                    "vector dimensions do not match: expected {}, got {}",
                    expected, actual
                )
            }
            Self::NotThreeDimensional { lhs, rhs } => {
                write!(
                    f,
                    "cross product needs two 3-dimensional vectors, got {} and {}",
                    lhs, rhs
                )
            }
        }
    }
}
impl std::error::Error for DimensionError {}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::RowOutOfBounds { row, rows } => {
                write!(f, "row {} out of bounds for {} rows", row, rows)
            }
            Self::ColumnOutOfBounds { column, columns } => {
                write!(
                    f,
                    "column {} out of bounds for {} columns",
                    column, columns
                )
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
        }
    }
}
impl std::error::Error for IndexError {}
