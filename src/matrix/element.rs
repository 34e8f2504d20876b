//! Matrix element type constraints
//!
//! Values stored in a [`SparseMatrix`](crate::SparseMatrix) are integers:
//! they must support checked arithmetic so accumulation can report
//! overflow, and must round-trip through the text format.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Num};

/// Trait for types that can be stored as matrix values
///
/// Implemented automatically for every type meeting the bounds, which in
/// practice means the primitive signed and unsigned integers.
pub trait Element:
    Copy + Num + CheckedAdd + CheckedSub + CheckedMul + Display + Debug + FromStr
{
}

impl<T> Element for T where
    T: Copy + Num + CheckedAdd + CheckedSub + CheckedMul + Display + Debug + FromStr
{
}
