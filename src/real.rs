use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalars that behave like real numbers closely enough to take norms of vectors built from them.
///
/// Only the operations that need a square root or a notion of zero are gated on this trait; the
/// plain arithmetic on [`crate::Vector3`] works for any scalar implementing the relevant
/// `core::ops` traits.
///
pub trait Real:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    fn sqrt(self) -> Self;

    fn abs(self) -> Self;

    fn is_finite(self) -> bool;
}

impl Real for f32
{
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn sqrt(self) -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                f32::sqrt(self)
            } else {
                libm::sqrtf(self)
            }
        }
    }

    #[inline]
    fn abs(self) -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                f32::abs(self)
            } else {
                libm::fabsf(self)
            }
        }
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Real for f64
{
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn sqrt(self) -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                f64::sqrt(self)
            } else {
                libm::sqrt(self)
            }
        }
    }

    #[inline]
    fn abs(self) -> Self {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                f64::abs(self)
            } else {
                libm::fabs(self)
            }
        }
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}
