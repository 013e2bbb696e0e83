//! Dense [`Matrix`](matrix::Matrix) and [`Vector`](vector::Vector) value types.
//!
//! Both own a contiguous buffer, check every index, and validate shapes
//! before touching either operand.

pub mod errors;
pub mod matrix;
pub mod numeric;
pub mod square;
pub mod vector;
