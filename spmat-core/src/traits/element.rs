//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements. Only fixed-width signed integers qualify.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Integer type wide enough to hold the product of two elements
///
/// Sums of products are accumulated in this type with wrapping addition,
/// so only the final value of a cell decides whether it overflows.
pub trait WideInt: Copy + Eq + Debug {
    const ZERO: Self;

    fn overflowing_add(self, rhs: Self) -> (Self, bool);

    fn is_negative(self) -> bool;
}

macro_rules! impl_wide_int {
    ($($ty:ty),*) => {
        $(
            impl WideInt for $ty {
                const ZERO: Self = 0;

                fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                    <$ty>::overflowing_add(self, rhs)
                }

                fn is_negative(self) -> bool {
                    <$ty>::is_negative(self)
                }
            }
        )*
    };
}

impl_wide_int!(i64, i128);

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - Eq: Zero detection is exact
/// - FromStr: Can be read from the text format
/// - Display: Can be rendered back to text
pub trait MatrixElement: Copy + Eq + Debug + Display + FromStr + Sized {
    /// Accumulator for products of this element type
    type Wide: WideInt;

    /// Additive identity, never stored explicitly
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Whether the value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Product in the wide type; `None` only if even that does not fit
    fn wide_mul(self, rhs: Self) -> Option<Self::Wide>;

    /// Convert an accumulated value back, if it fits
    fn narrow(wide: Self::Wide) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $wide:ty),*) => {
        $(
            impl MatrixElement for $ty {
                type Wide = $wide;

                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn wide_mul(self, rhs: Self) -> Option<$wide> {
                    <$wide>::from(self).checked_mul(<$wide>::from(rhs))
                }

                fn narrow(wide: $wide) -> Option<Self> {
                    <$ty>::try_from(wide).ok()
                }
            }
        )*
    };
}

// i128 has no wider primitive; a single product beyond i128 is reported
impl_matrix_element!(i32 => i64, i64 => i128, i128 => i128);

#[cfg(test)]
mod tests {
    use super::*;

    fn sum<T: MatrixElement>(a: T, b: T) -> Option<T> {
        MatrixElement::checked_add(a, b)
    }

    #[test]
    fn test_zero_detection() {
        assert!(MatrixElement::is_zero(0i64));
        assert!(!MatrixElement::is_zero(-3i32));
        assert_eq!(<i128 as MatrixElement>::ONE, 1);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(sum(2i64, 3), Some(5));
        assert_eq!(sum(i32::MAX, 1), None);
        assert_eq!(MatrixElement::checked_sub(i64::MIN, 1), None);
    }

    #[test]
    fn test_wide_mul_and_narrow() {
        assert_eq!(i32::MAX.wide_mul(2), Some(i32::MAX as i64 * 2));
        assert_eq!(i64::MIN.wide_mul(i64::MIN), Some(i64::MIN as i128 * i64::MIN as i128));
        assert_eq!(i128::MAX.wide_mul(2), None);

        assert_eq!(<i32 as MatrixElement>::narrow(i32::MAX as i64), Some(i32::MAX));
        assert_eq!(<i32 as MatrixElement>::narrow(i32::MAX as i64 + 1), None);
    }
}
