//! Whole-number types that may be used to index and store factorials.
//!
//! [`Integral`] is implemented for every primitive integer type and nothing else, so a
//! factorial engine instantiated over a floating-point (or any other) type is rejected at
//! compile time.

use std::fmt::{Debug, Display};

pub trait Integral: Copy + Ord + Debug + Display + Send + Sync + 'static {
    const ZERO: Self;
    const ONE: Self;

    /// Multiplication that wraps around at the boundary of the type rather than panicking.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Truncating division. Returns `None` if `rhs` is zero or the quotient is unrepresentable.
    fn checked_div(self, rhs: Self) -> Option<Self>;

    /// Converts an index into this type, if it is representable.
    fn from_usize(value: usize) -> Option<Self>;

    /// Converts this value into an index, if it is non-negative and fits in a `usize`.
    fn to_usize(self) -> Option<usize>;

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_integral {
    ($($t:ty),*) => {
        $(
            impl Integral for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }

                #[inline]
                fn from_usize(value: usize) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline]
                fn to_usize(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
