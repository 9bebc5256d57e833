// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for row extents, offsets, and scroll positions.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for extents, offsets, and scroll positions.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal and geared toward floating-point coordinates.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is negative, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Clamps negative values to zero.
    fn clamp_non_negative(self) -> Self {
        if self.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }

    /// Replaces NaN, infinities, and negative values with zero.
    fn sanitize(self) -> Self {
        if self.is_finite() {
            self.clamp_non_negative()
        } else {
            Self::zero()
        }
    }

    /// Returns `true` if the value is finite and strictly greater than zero.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }

    /// Floors the value and converts it to `isize`.
    ///
    /// Implementations may clamp or truncate as needed; callers are expected
    /// to clamp the result to a valid index range afterwards.
    fn floor_to_isize(self) -> isize;

    /// Rounds the value up and converts it to `isize`.
    ///
    /// The default implementation builds on [`Scalar::floor_to_isize`] so that
    /// it works without `std` float intrinsics.
    fn ceil_to_isize(self) -> isize {
        let floor = self.floor_to_isize();
        if floor >= 0 && Self::from_usize(floor.unsigned_abs()) < self {
            floor.saturating_add(1)
        } else {
            floor
        }
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        {
            self as isize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        {
            self as isize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn ceil_rounds_fractions_up_and_keeps_integers() {
        assert_eq!(7.5_f64.ceil_to_isize(), 8);
        assert_eq!(8.0_f64.ceil_to_isize(), 8);
        assert_eq!(0.0_f32.ceil_to_isize(), 0);
        assert_eq!(0.25_f32.ceil_to_isize(), 1);
    }

    #[test]
    fn sanitize_drops_negative_and_non_finite_values() {
        assert_eq!((-3.0_f64).sanitize(), 0.0);
        assert_eq!(f64::NAN.sanitize(), 0.0);
        assert_eq!(f32::INFINITY.sanitize(), 0.0);
        assert_eq!(12.5_f32.sanitize(), 12.5);
    }
}
