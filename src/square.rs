use crate::{
    errors::{IndexError, ShapeError},
    matrix::Matrix,
    numeric::Numeric,
};
use std::fmt::{Display, Formatter};
use std::ops::Deref;

/// A [`Matrix`] known to have as many rows as columns.
///
/// Squareness is checked once on conversion, so the operations that only make
/// sense for square matrices (`det`, `trace`, square minors) can't fail on
/// shape here.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    inner: Matrix<T>,
}

impl<T: Numeric> SquareMatrix<T> {
    pub fn identity(n: usize) -> Self {
        Self {
            inner: Matrix::identity(n),
        }
    }

    pub fn size(&self) -> usize {
        self.inner.rows()
    }

    pub fn det(&self) -> T {
        self.inner.expand_det()
    }

    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for (i, row) in self.inner.row_iter().enumerate() {
            sum += row.as_slice()[i];
        }
        sum
    }

    pub fn minor(&self, row: usize, column: usize) -> Result<Self, IndexError> {
        Ok(Self {
            inner: self.inner.minor(row, column)?,
        })
    }

    pub fn transpose(&self) -> Self {
        Self {
            inner: self.inner.transpose(),
        }
    }

    pub fn into_inner(self) -> Matrix<T> {
        self.inner
    }
}

impl<T: Numeric> TryFrom<Matrix<T>> for SquareMatrix<T> {
    type Error = ShapeError;

    fn try_from(m: Matrix<T>) -> Result<Self, Self::Error> {
        if m.rows() != m.columns() {
            return Err(ShapeError::NotSquare {
                rows: m.rows(),
                columns: m.columns(),
            });
        }
        Ok(Self { inner: m })
    }
}

impl<T> Deref for SquareMatrix<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Display> Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(&self.inner, f)
    }
}
