use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::MathError;
use crate::traits::{roughly_eq, FloatScalar, Scalar};

use super::Vector;

impl<T: Scalar> Vector<T> {
    fn check_same_dim(&self, rhs: &Self) -> Result<(), MathError> {
        if self.dim() != rhs.dim() {
            return Err(MathError::DimensionMismatch {
                expected: (self.dim(), 1),
                got: (rhs.dim(), 1),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self, MathError> {
        self.check_same_dim(rhs)?;
        let values = self
            .values
            .iter()
            .zip(rhs.values.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Vector { values })
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Vector {
            values: self.values.iter().map(|&x| f(x)).collect(),
        }
    }

    /// Component-wise sum.
    ///
    /// ```
    /// use linmath::{MathError, Vector};
    /// let a = Vector::from([1.0, 2.0]);
    /// assert_eq!(a.checked_add(&Vector::from([3.0, 5.0])).unwrap().as_slice(), &[4.0, 7.0]);
    /// assert!(matches!(
    ///     a.checked_add(&Vector::from([1.0, 2.0, 3.0])),
    ///     Err(MathError::DimensionMismatch { .. })
    /// ));
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MathError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Component-wise difference.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MathError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Multiply every component by `s`.
    pub fn scale(&self, s: T) -> Self {
        self.map(|x| x * s)
    }

    /// Divide every component by `s`.
    ///
    /// For floats, `s == 0` gives `±Infinity`/`NaN` components.
    pub fn unscale(&self, s: T) -> Self {
        self.map(|x| x / s)
    }

    /// Dot product.
    pub fn dot(&self, rhs: &Self) -> Result<T, MathError> {
        self.check_same_dim(rhs)?;
        let mut sum = T::zero();
        for (&a, &b) in self.values.iter().zip(rhs.values.iter()) {
            sum = sum + a * b;
        }
        Ok(sum)
    }

    /// Cross product. Only defined for two 3-vectors.
    ///
    /// ```
    /// use linmath::{MathError, Vector};
    /// let x = Vector::from([1.0, 0.0, 0.0]);
    /// let y = Vector::from([0.0, 1.0, 0.0]);
    /// assert_eq!(x.cross(&y).unwrap(), Vector::from([0.0, 0.0, 1.0]));
    ///
    /// let flat = Vector::from([1.0, 0.0]);
    /// assert_eq!(
    ///     flat.cross(&flat).unwrap_err(),
    ///     MathError::UnsupportedDimension { dim: 2, required: 3 }
    /// );
    /// ```
    pub fn cross(&self, rhs: &Self) -> Result<Self, MathError> {
        for v in [self, rhs] {
            if v.dim() != 3 {
                return Err(MathError::UnsupportedDimension {
                    dim: v.dim(),
                    required: 3,
                });
            }
        }
        let (a, b) = (&self.values, &rhs.values);
        Ok(Vector::new(alloc::vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Sum of squared components.
    pub fn length_squared(&self) -> T {
        let mut sum = T::zero();
        for &x in self.values.iter() {
            sum = sum + x * x;
        }
        sum
    }
}

impl<T: FloatScalar> Vector<T> {
    /// Euclidean norm.
    ///
    /// ```
    /// use linmath::Vector;
    /// assert_eq!(Vector::from([3.0_f64, 4.0]).length(), 5.0);
    /// ```
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero-length vector is not trapped: its components come out `NaN`.
    pub fn normalized(&self) -> Self {
        self.unscale(self.length())
    }

    /// Whether every component is finite.
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|x| x.is_finite())
    }

    /// Whether every component is `NaN`.
    pub fn is_nan(&self) -> bool {
        self.values.iter().all(|x| x.is_nan())
    }

    /// Equal dimension and every component within [`FloatScalar::rough_epsilon`].
    pub fn roughly_equals(&self, rhs: &Self) -> bool {
        self.roughly_equals_within(rhs, T::rough_epsilon())
    }

    /// Like [`roughly_equals`](Self::roughly_equals) with a caller-chosen tolerance.
    pub fn roughly_equals_within(&self, rhs: &Self, eps: T) -> bool {
        self.dim() == rhs.dim()
            && self
                .values
                .iter()
                .zip(rhs.values.iter())
                .all(|(&a, &b)| roughly_eq(a, b, eps))
    }
}

// ── Operators ───────────────────────────────────────────────────────
//
// Structural mismatches panic with the `MathError` message; use the
// `checked_*` forms to handle them.

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        match self.checked_add(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Vector<T>) -> Vector<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        &self + rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        match self.checked_sub(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        &self - rhs
    }
}

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: T) -> Vector<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;
    fn div(self, rhs: T) -> Vector<T> {
        self.unscale(rhs)
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Vector<T>;
    fn div(self, rhs: T) -> Vector<T> {
        self.unscale(rhs)
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;
    fn neg(self) -> Vector<T> {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;
    fn neg(self) -> Vector<T> {
        -&self
    }
}

// ── scalar * vector (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_vector {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul_vector!(f32, f64, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn add_sub_2d() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([3.0, 5.0]);
        assert_eq!((&a + &b).as_slice(), &[4.0, 7.0]);
        assert_eq!((&a - &b).as_slice(), &[-2.0, -3.0]);
    }

    #[test]
    fn add_sub_3d() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([3.0, 5.0, 7.0]);
        assert_eq!((a.clone() + b.clone()).as_slice(), &[4.0, 7.0, 10.0]);
        assert_eq!((a - &b).as_slice(), &[-2.0, -3.0, -4.0]);
    }

    #[test]
    fn checked_sub_mismatch() {
        let a = Vector::from([1.0, 2.0]);
        let b = Vector::from([1.0, 2.0, 3.0]);
        assert_eq!(
            a.checked_sub(&b),
            Err(MathError::DimensionMismatch {
                expected: (2, 1),
                got: (3, 1)
            })
        );
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_operator_panics_on_mismatch() {
        let _ = Vector::from([1.0, 2.0]) + Vector::from([1.0, 2.0, 3.0]);
    }

    #[test]
    fn scalar_mul_div() {
        let a = Vector::<f64>::from([1.0, 2.0, 3.0]);
        assert_eq!((&a * 7.0).as_slice(), &[7.0, 14.0, 21.0]);
        assert_eq!((7.0 * &a).as_slice(), &[7.0, 14.0, 21.0]);
        assert_eq!((Vector::from([7.0, 14.0]) / 7.0).as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn divide_by_zero_is_ieee() {
        let v = Vector::from([1.0, -1.0, 0.0]) / 0.0;
        assert_eq!(v[0], f64::INFINITY);
        assert_eq!(v[1], f64::NEG_INFINITY);
        assert!(v[2].is_nan());
        assert!(!v.is_finite());
    }

    #[test]
    fn neg() {
        let v = -Vector::from([1.0, -2.0]);
        assert_eq!(v.as_slice(), &[-1.0, 2.0]);
    }

    #[test]
    fn dot() {
        assert_eq!(Vector::from([2.0, 3.0]).dot(&Vector::from([5.0, 7.0])), Ok(31.0));
        assert_eq!(
            Vector::from([2.0, 3.0, 4.0]).dot(&Vector::from([5.0, 7.0, 6.0])),
            Ok(55.0)
        );
        assert!(Vector::from([1.0]).dot(&Vector::from([1.0, 2.0])).is_err());
    }

    #[test]
    fn cross() {
        let a = Vector::from([2.0, 3.0, 4.0]);
        let b = Vector::from([5.0, 7.0, 6.0]);
        assert_eq!(a.cross(&b).unwrap(), Vector::from([-10.0, 8.0, -1.0]));
    }

    #[test]
    fn cross_anticommutative() {
        let a = Vector::from([1.5, -2.0, 0.25]);
        let b = Vector::from([-3.0, 4.0, 8.0]);
        assert_eq!(a.cross(&b).unwrap(), b.cross(&a).unwrap() * -1.0);
    }

    #[test]
    fn cross_rejects_4d() {
        let a = Vector::from([1.0, 2.0, 3.0, 4.0]);
        let b = Vector::from([1.0, 2.0, 3.0]);
        assert_eq!(
            b.cross(&a),
            Err(MathError::UnsupportedDimension { dim: 4, required: 3 })
        );
    }

    #[test]
    fn length() {
        assert_eq!(Vector::from([3.0, 4.0]).length(), 5.0);
        let v = Vector::from([3.0, 4.0, 5.0]);
        assert!((v.length() - 50.0_f64.sqrt()).abs() < TOL);
        assert_eq!(v.length_squared(), 50.0);
    }

    #[test]
    fn normalized() {
        let n = Vector::<f64>::from([3.0, 4.0, 5.0]).normalized();
        assert!((n.length() - 1.0).abs() < TOL);
        assert!((n[0] - 0.424_264_068_711_928_5).abs() < TOL);
        assert!((n[1] - 0.565_685_424_949_238).abs() < TOL);
        assert!((n[2] - 0.707_106_781_186_547_5).abs() < TOL);
    }

    #[test]
    fn normalized_zero_vector_is_nan() {
        let n = Vector::<f64>::zeros(3).normalized();
        assert!(n.is_nan());
    }

    #[test]
    fn exact_equality() {
        assert_eq!(Vector::from([1.0, 3.0, 4.0]), Vector::from([1.0, 3.0, 4.0]));
        assert_ne!(Vector::from([1.0, 3.0]), Vector::from([1.0, 3.0, 4.0]));
        assert_ne!(Vector::from([1.0, 3.0]), Vector::from([1.0, 3.0 + 1e-15]));
    }

    #[test]
    fn rough_equality() {
        let a = Vector::from([0.1 + 0.2, 1.0]);
        let b = Vector::from([0.3, 1.0]);
        assert_ne!(a, b);
        assert!(a.roughly_equals(&b));
        assert!(!a.roughly_equals(&Vector::from([0.3])));
        assert!(!a.roughly_equals_within(&Vector::from([0.31, 1.0]), 1e-3));
    }
}
