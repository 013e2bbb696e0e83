use crate::{
    errors::{IndexError, ShapeError},
    numeric::Numeric,
    square::SquareMatrix,
};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A dense `rows x columns` matrix stored row-major in a single buffer.
///
/// The shape is fixed at construction. Clones are deep copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    storage: Vec<T>,
}

/// Borrowed view of one matrix row.
///
/// The view borrows the matrix, so it can't be kept past the matrix's
/// lifetime or across a mutation of it.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a, T> {
    vals: &'a [T],
}

/// Mutable counterpart of [`Row`].
#[derive(Debug)]
pub struct RowMut<'a, T> {
    vals: &'a mut [T],
}

impl<'a, T> Row<'a, T> {
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn get(&self, column: usize) -> Result<&'a T, IndexError> {
        let columns = self.vals.len();
        self.vals
            .get(column)
            .ok_or(IndexError::ColumnOutOfBounds { column, columns })
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.vals
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.vals.iter()
    }
}

impl<'a, T> RowMut<'a, T> {
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    pub fn get(&self, column: usize) -> Result<&T, IndexError> {
        let columns = self.vals.len();
        self.vals
            .get(column)
            .ok_or(IndexError::ColumnOutOfBounds { column, columns })
    }

    pub fn get_mut(&mut self, column: usize) -> Result<&mut T, IndexError> {
        let columns = self.vals.len();
        self.vals
            .get_mut(column)
            .ok_or(IndexError::ColumnOutOfBounds { column, columns })
    }

    /// Like `get_mut`, but the returned reference lives as long as the
    /// borrow of the matrix rather than the view.
    pub fn into_mut(self, column: usize) -> Result<&'a mut T, IndexError> {
        let vals = self.vals;
        let columns = vals.len();
        vals.get_mut(column)
            .ok_or(IndexError::ColumnOutOfBounds { column, columns })
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.vals
    }
}

impl<T: Numeric> Matrix<T> {
    pub fn repeat(rows: usize, columns: usize, val: T) -> Self {
        Self {
            rows,
            columns,
            storage: vec![val; rows * columns],
        }
    }

    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::repeat(rows, columns, T::zero())
    }

    pub fn ones(rows: usize, columns: usize) -> Self {
        Self::repeat(rows, columns, T::one())
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn from_fn(rows: usize, columns: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let storage = (0..rows * columns)
            .map(|i| f(i / columns, i % columns))
            .collect();

        Self {
            rows,
            columns,
            storage,
        }
    }

    /// Wraps a row-major buffer. Fails unless `data.len() == rows * columns`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        if data.len() != rows * columns {
            return Err(ShapeError::BufferLength {
                expected: rows * columns,
                actual: data.len(),
            });
        }

        Ok(Self {
            rows,
            columns,
            storage: data,
        })
    }

    /// Builds a matrix from a literal list of rows. Every row must be as long
    /// as the first one; an empty list gives a 0x0 matrix.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut storage = Vec::with_capacity(rows.len() * columns);

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(ShapeError::RaggedRows {
                    row: i,
                    expected: columns,
                    actual: row.len(),
                });
            }
            storage.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            storage,
        })
    }

    pub fn rand(
        rows: usize,
        columns: usize,
        d: impl Distribution<T>,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            rows,
            columns,
            storage: d.sample_iter(rng).take(rows * columns).collect(),
        }
    }

    pub fn randn(rows: usize, columns: usize, rng: &mut impl Rng) -> Self
    where
        StandardNormal: Distribution<T>,
    {
        Self::rand(rows, columns, StandardNormal, rng)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn row(&self, row: usize) -> Result<Row<'_, T>, IndexError> {
        let range = self.row_range(row)?;
        Ok(Row {
            vals: &self.storage[range],
        })
    }

    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_, T>, IndexError> {
        let range = self.row_range(row)?;
        Ok(RowMut {
            vals: &mut self.storage[range],
        })
    }

    fn row_range(&self, row: usize) -> Result<std::ops::Range<usize>, IndexError> {
        if row >= self.rows {
            return Err(IndexError::RowOutOfBounds {
                row,
                rows: self.rows,
            });
        }
        let start = row * self.columns;

        Ok(start..start + self.columns)
    }

    pub fn row_iter(&self) -> impl Iterator<Item = Row<'_, T>> + '_ {
        (0..self.rows).map(move |r| Row {
            vals: &self.storage[r * self.columns..(r + 1) * self.columns],
        })
    }

    pub fn at(&self, row: usize, column: usize) -> Result<&T, IndexError> {
        self.row(row)?.get(column)
    }

    pub fn at_mut(&mut self, row: usize, column: usize) -> Result<&mut T, IndexError> {
        self.row_mut(row)?.into_mut(column)
    }

    pub fn set(&mut self, row: usize, column: usize, val: T) -> Result<(), IndexError> {
        *self.at_mut(row, column)? = val;
        Ok(())
    }

    /// Row-major iterator over every element.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    pub fn map(mut self, f: impl Fn(T) -> T) -> Self {
        for v in self.storage.iter_mut() {
            *v = f(*v);
        }
        self
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.columns, self.rows, |i, j| {
            self.storage[j * self.columns + i]
        })
    }

    /// Copies `other` into `self` without resizing.
    pub fn assign(&mut self, other: &Self) -> Result<(), ShapeError> {
        self.check_same_shape(other)?;
        self.storage.copy_from_slice(&other.storage);
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> Result<(), ShapeError> {
        if self.shape() != other.shape() {
            return Err(ShapeError::Mismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, ShapeError> {
        let mut out = self.clone();
        out.try_add_assign(other)?;
        Ok(out)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, ShapeError> {
        let mut out = self.clone();
        out.try_sub_assign(other)?;
        Ok(out)
    }

    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), ShapeError> {
        self.check_same_shape(other)?;
        for (a, &b) in self.storage.iter_mut().zip(other.storage.iter()) {
            *a += b;
        }
        Ok(())
    }

    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), ShapeError> {
        self.check_same_shape(other)?;
        for (a, &b) in self.storage.iter_mut().zip(other.storage.iter()) {
            *a -= b;
        }
        Ok(())
    }

    /// Matrix product. Needs `self.columns() == other.rows()`; the result is
    /// `self.rows() x other.columns()`.
    pub fn matmul(&self, other: &Self) -> Result<Self, ShapeError> {
        if self.columns != other.rows {
            return Err(ShapeError::IncompatibleProduct {
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        log::trace!(
            "multiplying {}x{} by {}x{}",
            self.rows,
            self.columns,
            other.rows,
            other.columns
        );

        let mut out = Self::zeros(self.rows, other.columns);
        for i in 0..self.rows {
            for j in 0..other.columns {
                let mut sum = T::zero();
                for k in 0..self.columns {
                    sum += self.storage[i * self.columns + k]
                        * other.storage[k * other.columns + j];
                }
                out.storage[i * other.columns + j] = sum;
            }
        }

        Ok(out)
    }

    /// The matrix left after deleting `row` and `column`, remaining rows and
    /// columns kept in order.
    pub fn minor(&self, row: usize, column: usize) -> Result<Self, IndexError> {
        self.row(row)?.get(column)?;
        Ok(self.minor_unchecked(row, column))
    }

    fn minor_unchecked(&self, row: usize, column: usize) -> Self {
        let storage = self
            .storage
            .iter()
            .enumerate()
            .filter(|(i, _)| i / self.columns != row && i % self.columns != column)
            .map(|(_, &v)| v)
            .collect();

        Self {
            rows: self.rows - 1,
            columns: self.columns - 1,
            storage,
        }
    }

    /// Determinant by Laplace expansion along the first row. Runs in O(n!).
    ///
    /// A 0x0 matrix has determinant one.
    pub fn det(&self) -> Result<T, ShapeError> {
        if self.rows != self.columns {
            return Err(ShapeError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }

        Ok(self.expand_det())
    }

    // Caller guarantees the matrix is square.
    pub(crate) fn expand_det(&self) -> T {
        log::trace!("expanding {}x{} determinant", self.rows, self.columns);
        self.laplace_det()
    }

    fn laplace_det(&self) -> T {
        debug_assert_eq!(self.rows, self.columns);
        let a = |r: usize, c: usize| self.storage[r * self.columns + c];

        match self.rows {
            0 => T::one(),
            1 => a(0, 0),
            2 => a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            n => {
                let mut det = T::zero();
                for i in 0..n {
                    let term = a(0, i) * self.minor_unchecked(0, i).laplace_det();
                    if i % 2 == 0 {
                        det += term;
                    } else {
                        det -= term;
                    }
                }
                det
            }
        }
    }

    pub fn into_square(self) -> Result<SquareMatrix<T>, ShapeError> {
        SquareMatrix::try_from(self)
    }
}

impl<T: Numeric, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(vals: [[T; C]; R]) -> Self {
        Self::from_fn(R, C, |row, col| vals[row][col])
    }
}

impl<T: Numeric> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T: Display> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        writeln!(f, "{{")?;
        for r in 0..self.rows {
            write!(f, "  {{")?;
            for c in 0..self.columns {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.storage[r * self.columns + c])?;
            }
            write!(f, "}}")?;
            if r + 1 < self.rows {
                write!(f, ",")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

impl<T: Numeric> Index<&[usize; 2]> for Matrix<T> {
    type Output = T;

    fn index(&self, idx: &[usize; 2]) -> &Self::Output {
        self.at(idx[0], idx[1]).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Numeric> IndexMut<&[usize; 2]> for Matrix<T> {
    fn index_mut(&mut self, idx: &[usize; 2]) -> &mut Self::Output {
        self.at_mut(idx[0], idx[1])
            .unwrap_or_else(|e| panic!("{}", e))
    }
}

// Operators panic on a shape mismatch; use the `try_*` methods and `matmul`
// to get the error instead.

impl<T: Numeric> Add<&Matrix<T>> for Matrix<T> {
    type Output = Self;

    fn add(mut self, rhs: &Matrix<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Numeric> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Self::Output {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Numeric> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.try_add_assign(rhs) {
            panic!("{}", e);
        }
    }
}

impl<T: Numeric> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Self;

    fn sub(mut self, rhs: &Matrix<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Numeric> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Self::Output {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Numeric> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.try_sub_assign(rhs) {
            panic!("{}", e);
        }
    }
}

impl<T: Numeric> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Numeric> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Numeric> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for v in self.storage.iter_mut() {
            *v *= rhs;
        }
    }
}

impl<T: Numeric> Div<T> for Matrix<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Numeric> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for v in self.storage.iter_mut() {
            *v /= rhs;
        }
    }
}
