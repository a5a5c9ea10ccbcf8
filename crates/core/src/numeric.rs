use std::fmt::{Debug, Display};

/// A primitive integer type usable as a discrete search domain.
///
/// Provides what a bisection over `[lo, hi]` needs without risking overflow:
/// a split point that stays inside the interval, and stepping one candidate
/// past it.
pub trait DomainInt: Copy + Ord + Debug + Display {
    /// Returns `lo + (hi - lo) / 2`, rounded toward `lo`.
    ///
    /// The caller guarantees `lo <= hi`. The result never overflows, even
    /// when `hi - lo` does not fit in `Self`.
    fn split_point(lo: Self, hi: Self) -> Self;

    /// Returns the preceding integer, or `None` at `Self::MIN`.
    fn checked_prev(self) -> Option<Self>;

    /// Returns the following integer, or `None` at `Self::MAX`.
    fn checked_next(self) -> Option<Self>;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl DomainInt for $t {
            #[inline]
            fn split_point(lo: Self, hi: Self) -> Self {
                lo + (hi - lo) / 2
            }

            #[inline]
            fn checked_prev(self) -> Option<Self> {
                self.checked_sub(1)
            }

            #[inline]
            fn checked_next(self) -> Option<Self> {
                self.checked_add(1)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl DomainInt for $t {
            #[inline]
            fn split_point(lo: Self, hi: Self) -> Self {
                // `abs_diff` is unsigned, so the half-width always fits and
                // `lo + half` lands inside `[lo, hi]`.
                lo.wrapping_add_unsigned(hi.abs_diff(lo) / 2)
            }

            #[inline]
            fn checked_prev(self) -> Option<Self> {
                self.checked_sub(1)
            }

            #[inline]
            fn checked_next(self) -> Option<Self> {
                self.checked_add(1)
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);
