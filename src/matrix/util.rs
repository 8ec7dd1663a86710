use crate::traits::{roughly_eq, FloatScalar};

use super::Matrix;

impl<T: Copy> Matrix<T> {
    /// Apply `f` to every element, keeping the shape.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let m = Matrix::new(vec![1.0, -2.0, 3.0, -4.0]).unwrap();
    /// let a = m.map(|x: f64| x.abs());
    /// assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U> {
        Matrix::from_parts(
            self.values.iter().map(|&x| f(x)).collect(),
            self.nrows,
            self.ncols,
        )
    }
}

// ── IEEE-754 predicates and rough equality ──────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Whether every element is finite.
    ///
    /// ```
    /// use linmath::Matrix;
    /// assert!(Matrix::<f64>::identity(4).is_finite());
    /// assert!(!(Matrix::<f64>::identity(4) / 0.0).is_finite());
    /// ```
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|x| x.is_finite())
    }

    /// Whether every element is `NaN`.
    pub fn is_nan(&self) -> bool {
        self.values.iter().all(|x| x.is_nan())
    }

    /// Same shape and every element within [`FloatScalar::rough_epsilon`].
    ///
    /// Absorbs the rounding left by e.g. `m * m.inverse()`. A shape
    /// difference compares unequal rather than erroring.
    pub fn roughly_equals(&self, rhs: &Self) -> bool {
        self.roughly_equals_within(rhs, T::rough_epsilon())
    }

    /// Like [`roughly_equals`](Self::roughly_equals) with a caller-chosen tolerance.
    pub fn roughly_equals_within(&self, rhs: &Self, eps: T) -> bool {
        self.shape() == rhs.shape()
            && self
                .values
                .iter()
                .zip(rhs.values.iter())
                .all(|(&a, &b)| roughly_eq(a, b, eps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn exact_equality_includes_shape() {
        let a = Matrix::with_shape(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
        let b = Matrix::with_shape(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
        let c = Matrix::with_shape(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rough_equality_after_inverse() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 0.0, 9.0]).unwrap();
        let inv = m.inverse().unwrap();
        assert!(inv.is_finite());
        assert!((&m * &inv).roughly_equals(&Matrix::identity(3)));
    }

    #[test]
    fn rough_equality_rejects_shape_and_large_error() {
        let a = Matrix::<f64>::identity(2);
        assert!(!a.roughly_equals(&Matrix::identity(3)));
        let b = Matrix::new(vec![1.0, 0.0, 0.0, 1.0 + 1e-6]).unwrap();
        assert!(!a.roughly_equals(&b));
        assert!(a.roughly_equals_within(&b, 1e-5));
    }

    #[test]
    fn is_nan_requires_every_entry() {
        let a = Matrix::<f64>::identity(4) * f64::NAN;
        assert!(a.is_nan());
        let b = Matrix::new(vec![f64::NAN, 1.0, 2.0, 3.0]).unwrap();
        assert!(!b.is_nan());
        assert!(!b.is_finite());
    }

    #[test]
    fn map_changes_element_type() {
        let m = Matrix::new(vec![1.5_f64, 2.5, 3.5, 4.5]).unwrap();
        let r: Matrix<i64> = m.map(|x| x as i64);
        assert_eq!(r.to_vec(), vec![1, 2, 3, 4]);
    }
}
