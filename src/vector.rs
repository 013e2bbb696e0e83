use crate::{
    errors::{DimensionError, IndexError},
    numeric::Numeric,
};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt::{Display, Formatter};
use std::ops::{
    Add, AddAssign, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
};

/// A dense vector whose dimension is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    storage: Vec<T>,
}

impl<T: Numeric> Vector<T> {
    pub fn repeat(dim: usize, val: T) -> Self {
        Self {
            storage: vec![val; dim],
        }
    }

    pub fn zeros(dim: usize) -> Self {
        Self::repeat(dim, T::zero())
    }

    pub fn ones(dim: usize) -> Self {
        Self::repeat(dim, T::one())
    }

    pub fn from_fn(dim: usize, f: impl Fn(usize) -> T) -> Self {
        (0..dim).map(f).collect()
    }

    pub fn from_slice(vals: &[T]) -> Self {
        Self {
            storage: vals.to_vec(),
        }
    }

    pub fn rand(dim: usize, d: impl Distribution<T>, rng: &mut impl Rng) -> Self {
        d.sample_iter(rng).take(dim).collect()
    }

    pub fn randn(dim: usize, rng: &mut impl Rng) -> Self
    where
        StandardNormal: Distribution<T>,
    {
        Self::rand(dim, StandardNormal, rng)
    }

    pub fn size(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn at(&self, index: usize) -> Result<&T, IndexError> {
        let len = self.size();
        self.storage
            .get(index)
            .ok_or(IndexError::OutOfBounds { index, len })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        let len = self.size();
        self.storage
            .get_mut(index)
            .ok_or(IndexError::OutOfBounds { index, len })
    }

    pub fn set(&mut self, index: usize, val: T) -> Result<(), IndexError> {
        *self.at_mut(index)? = val;
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.iter_mut()
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

    fn check_dim(&self, actual: usize) -> Result<(), DimensionError> {
        if self.size() != actual {
            return Err(DimensionError::Mismatch {
                expected: self.size(),
                actual,
            });
        }
        Ok(())
    }

    /// Copies `other` into `self`. The dimension never changes.
    pub fn assign(&mut self, other: &Self) -> Result<(), DimensionError> {
        self.assign_slice(&other.storage)
    }

    pub fn assign_slice(&mut self, vals: &[T]) -> Result<(), DimensionError> {
        self.check_dim(vals.len())?;
        self.storage.copy_from_slice(vals);
        Ok(())
    }

    /// Assigns from any ordered sequence, leaving `self` alone if it has the
    /// wrong length. At most `size() + 1` items are pulled from the sequence,
    /// so an oversized one reports `actual` as `size() + 1`.
    pub fn assign_iter(&mut self, vals: impl IntoIterator<Item = T>) -> Result<(), DimensionError> {
        let vals: Vec<T> = vals.into_iter().take(self.size() + 1).collect();
        self.assign_slice(&vals)
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, DimensionError> {
        let mut out = self.clone();
        out.try_add_assign(other)?;
        Ok(out)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, DimensionError> {
        let mut out = self.clone();
        out.try_sub_assign(other)?;
        Ok(out)
    }

    pub fn try_add_assign(&mut self, other: &Self) -> Result<(), DimensionError> {
        self.check_dim(other.size())?;
        for (a, &b) in self.storage.iter_mut().zip(other.storage.iter()) {
            *a += b;
        }
        Ok(())
    }

    pub fn try_sub_assign(&mut self, other: &Self) -> Result<(), DimensionError> {
        self.check_dim(other.size())?;
        for (a, &b) in self.storage.iter_mut().zip(other.storage.iter()) {
            *a -= b;
        }
        Ok(())
    }

    pub fn dot(&self, other: &Self) -> Result<T, DimensionError> {
        self.check_dim(other.size())?;

        let mut sum = T::zero();
        for (&a, &b) in self.storage.iter().zip(other.storage.iter()) {
            sum += a * b;
        }
        Ok(sum)
    }

    /// Cross product of two 3-dimensional vectors.
    pub fn cross(&self, other: &Self) -> Result<Self, DimensionError> {
        let (a, b) = match (self.storage.as_slice(), other.storage.as_slice()) {
            ([a0, a1, a2], [b0, b1, b2]) => ([*a0, *a1, *a2], [*b0, *b1, *b2]),
            _ => {
                return Err(DimensionError::NotThreeDimensional {
                    lhs: self.size(),
                    rhs: other.size(),
                })
            }
        };

        Ok(Self::from([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Replaces `self` with `self x other`. Left unchanged on error.
    pub fn try_cross_assign(&mut self, other: &Self) -> Result<(), DimensionError> {
        *self = self.cross(other)?;
        Ok(())
    }

    /// Sum of squared elements.
    pub fn norm2(&self) -> T {
        let mut sum = T::zero();
        for &v in self.storage.iter() {
            sum += v * v;
        }
        sum
    }
}

impl<T: Numeric + num::Float> Vector<T> {
    pub fn norm(&self) -> T {
        self.norm2().sqrt()
    }

    /// This vector scaled to unit length. The zero vector comes back as NaNs.
    pub fn normalized(&self) -> Self {
        self.clone() / self.norm()
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(vals: [T; N]) -> Self {
        Self {
            storage: vals.into(),
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(storage: Vec<T>) -> Self {
        Self { storage }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter_mut()
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "(")?;
        for (i, v) in self.storage.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

impl<T: Numeric> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &Self::Output {
        self.at(idx).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Numeric> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        self.at_mut(idx).unwrap_or_else(|e| panic!("{}", e))
    }
}

// As with matrices, the operators panic where the named methods would return
// a `DimensionError`.

impl<T: Numeric> Add<&Vector<T>> for Vector<T> {
    type Output = Self;

    fn add(mut self, rhs: &Vector<T>) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Numeric> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Self::Output {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Numeric> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.try_add_assign(rhs) {
            panic!("{}", e);
        }
    }
}

impl<T: Numeric> Sub<&Vector<T>> for Vector<T> {
    type Output = Self;

    fn sub(mut self, rhs: &Vector<T>) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Numeric> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Self::Output {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Numeric> SubAssign<&Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.try_sub_assign(rhs) {
            panic!("{}", e);
        }
    }
}

/// `&a ^ &b` is the dot product.
impl<T: Numeric> BitXor<&Vector<T>> for &Vector<T> {
    type Output = T;

    fn bitxor(self, rhs: &Vector<T>) -> Self::Output {
        self.dot(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

/// `&a * &b` is the cross product.
impl<T: Numeric> Mul<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Self::Output {
        self.cross(rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T: Numeric> MulAssign<&Vector<T>> for Vector<T> {
    fn mul_assign(&mut self, rhs: &Vector<T>) {
        if let Err(e) = self.try_cross_assign(rhs) {
            panic!("{}", e);
        }
    }
}

impl<T: Numeric> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Numeric> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        for v in self.storage.iter_mut() {
            *v *= rhs;
        }
    }
}

impl<T: Numeric> Div<T> for Vector<T> {
    type Output = Self;

    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Numeric> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, rhs: T) {
        for v in self.storage.iter_mut() {
            *v /= rhs;
        }
    }
}
