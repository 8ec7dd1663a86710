use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix and vector elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that rely on IEEE-754 behaviour: square roots,
/// inversion (a singular matrix yields `Infinity`/`NaN` entries instead of
/// an error), finiteness probes and tolerance-based comparison.
pub trait FloatScalar: Scalar + Float {
    /// Tolerance used by `roughly_equals`.
    ///
    /// Two entries `a`, `b` compare roughly equal when
    /// `|a - b| <= rough_epsilon() * max(1, |a|, |b|)`.
    fn rough_epsilon() -> Self;
}

/// Rough-equality tolerance for `f64` elements.
pub const ROUGH_EPSILON_F64: f64 = 1e-10;

/// Rough-equality tolerance for `f32` elements.
pub const ROUGH_EPSILON_F32: f32 = 1e-5;

impl FloatScalar for f64 {
    #[inline]
    fn rough_epsilon() -> f64 {
        ROUGH_EPSILON_F64
    }
}

impl FloatScalar for f32 {
    #[inline]
    fn rough_epsilon() -> f32 {
        ROUGH_EPSILON_F32
    }
}

/// Compare two floats with a scaled tolerance.
#[inline]
pub(crate) fn roughly_eq<T: FloatScalar>(a: T, b: T, eps: T) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= eps * scale
}

/// Read-only access to a matrix-like type.
///
/// Lets algorithms such as the determinant expansion and products run over
/// a [`Matrix`](crate::Matrix), a [`Vector`](crate::Vector) seen as a
/// column, or a borrowed [`MinorView`](crate::matrix::MinorView) alike.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> T;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rough_eq_absolute_near_zero() {
        assert!(roughly_eq(0.0_f64, 1e-12, f64::rough_epsilon()));
        assert!(!roughly_eq(0.0_f64, 1e-8, f64::rough_epsilon()));
    }

    #[test]
    fn rough_eq_relative_for_large_values() {
        assert!(roughly_eq(1.0e6_f64, 1.0e6 + 1e-5, f64::rough_epsilon()));
        assert!(!roughly_eq(1.0e6_f64, 1.0e6 + 1.0, f64::rough_epsilon()));
    }

    #[test]
    fn rough_eq_nan_and_infinity() {
        assert!(!roughly_eq(f64::NAN, f64::NAN, f64::rough_epsilon()));
        assert!(roughly_eq(f64::INFINITY, f64::INFINITY, f64::rough_epsilon()));
        assert!(!roughly_eq(f64::INFINITY, 1.0, f64::rough_epsilon()));
    }

    #[test]
    fn f32_tolerance_is_looser() {
        assert!(roughly_eq(1.0_f32, 1.000_001, f32::rough_epsilon()));
        assert!(!roughly_eq(1.0_f64, 1.000_001, f64::rough_epsilon()));
    }
}
