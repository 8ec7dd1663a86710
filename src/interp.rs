//! Scalar helpers used alongside the matrix and vector types.

use crate::traits::FloatScalar;

/// Restrict `x` to `[min, max]`.
///
/// ```
/// use linmath::interp::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
/// ```
#[inline]
pub fn clamp<T: FloatScalar>(x: T, min: T, max: T) -> T {
    x.max(min).min(max)
}

/// Linear blend `(1 - t) * a + t * b`.
///
/// `t` is not clamped, so values outside `[0, 1]` extrapolate.
#[inline]
pub fn mix<T: FloatScalar>(a: T, b: T, t: T) -> T {
    (T::one() - t) * a + t * b
}
