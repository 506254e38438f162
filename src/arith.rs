//! Integer addition

use crate::error::{DemoError, Result};

/// Add two integers.
///
/// Wraps on overflow, so the result is defined (and commutative) for every
/// input pair regardless of build profile.
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Add two integers, failing instead of wrapping when the sum does not fit.
pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or(DemoError::Overflow { a, b })
}
