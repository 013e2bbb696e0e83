/// Element types a [`Matrix`](crate::matrix::Matrix) or
/// [`Vector`](crate::vector::Vector) can hold.
///
/// Anything with field-like arithmetic, a zero and a one, and ordering
/// qualifies. Operations that need a square root (norms, normalization) add a
/// `num::Float` bound on top of this.
pub trait Numeric:
    num::Num
    + Copy
    + PartialOrd
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::MulAssign
    + std::ops::DivAssign
    + 'static
{
}

macro_rules! numeric_impls {
    ( $( $t:ty ),* ) => {
        $( impl Numeric for $t {} )*
    };
}

numeric_impls!(i8, i16, i32, i64, i128, isize, f32, f64);
