use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::MathError;
use crate::traits::{FloatScalar, MatrixRef, Scalar};
use crate::vector::Vector;

use super::Matrix;

/// Column-major product of two matrix-like operands. Shapes are checked by
/// the caller.
fn product<T: Scalar>(a: &impl MatrixRef<T>, b: &impl MatrixRef<T>) -> Vec<T> {
    let m = a.nrows();
    let n = a.ncols();
    let p = b.ncols();
    let mut out = vec![T::zero(); m * p];
    for j in 0..p {
        for k in 0..n {
            let b_kj = b.get(k, j);
            for i in 0..m {
                out[j * m + i] = out[j * m + i] + a.get(i, k) * b_kj;
            }
        }
    }
    out
}

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, rhs: &Self) -> Result<(), MathError> {
        if self.shape() != rhs.shape() {
            return Err(MathError::DimensionMismatch {
                expected: self.shape(),
                got: rhs.shape(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Result<Self, MathError> {
        self.check_same_shape(rhs)?;
        let values = self
            .values
            .iter()
            .zip(rhs.values.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(values, self.nrows, self.ncols))
    }

    /// Element-wise sum. Shapes must be identical.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let a = Matrix::with_shape(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
    /// let b = Matrix::with_shape(vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0], 3, 2).unwrap();
    /// let c = a.checked_add(&b).unwrap();
    /// assert_eq!(c.col_at(1), &[44.0, 55.0, 66.0]);
    /// assert!(a.checked_add(&a.transpose()).is_err());
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MathError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference. Shapes must be identical.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MathError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Multiply every element by `s`.
    pub fn scale(&self, s: T) -> Self {
        self.map(|x| x * s)
    }

    /// Divide every element by `s`.
    ///
    /// For floats, `s == 0` yields `Infinity`/`NaN` entries rather than an error.
    pub fn unscale(&self, s: T) -> Self {
        self.map(|x| x / s)
    }

    /// Matrix product `self * rhs`.
    ///
    /// Requires `self.ncols() == rhs.nrows()`; the result is
    /// `self.nrows() x rhs.ncols()`.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let a = Matrix::with_shape(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
    /// let b = Matrix::with_shape(vec![7.0, 8.0, -4.0, -2.0, -3.0, -5.0], 2, 3).unwrap();
    /// let c = a.mul_matrix(&b).unwrap();
    /// assert_eq!(c.shape(), (3, 3));
    /// assert_eq!(c.to_vec(), vec![39.0, 54.0, 69.0, -12.0, -18.0, -24.0, -23.0, -31.0, -39.0]);
    /// ```
    pub fn mul_matrix(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MathError> {
        if self.ncols != rhs.nrows {
            return Err(MathError::DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: rhs.shape(),
            });
        }
        Ok(Matrix::from_parts(product(self, rhs), self.nrows, rhs.ncols))
    }

    /// Matrix-vector product, treating `v` as a column.
    ///
    /// Returns a vector of dimension `self.nrows()`, not a one-column matrix.
    ///
    /// ```
    /// use linmath::{Matrix, Vector};
    /// let m = Matrix::with_shape(vec![1.0, 0.0, -1.0, -3.0, 2.0, 1.0], 2, 3).unwrap();
    /// let v = Vector::from([2.0, 1.0, -5.0]);
    /// assert_eq!(m.mul_vector(&v).unwrap(), Vector::from([-9.0, -8.0]));
    /// ```
    pub fn mul_vector(&self, v: &Vector<T>) -> Result<Vector<T>, MathError> {
        if self.ncols != v.dim() {
            return Err(MathError::DimensionMismatch {
                expected: (self.ncols, 1),
                got: (v.dim(), 1),
            });
        }
        Ok(Vector::new(product(self, v)))
    }

    /// Transpose: `(M x N) -> (N x M)`.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let a = Matrix::with_shape(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (2, 3));
    /// assert_eq!(t.to_vec(), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    /// assert_eq!(t.transpose(), a);
    /// ```
    pub fn transpose(&self) -> Self {
        let m = self.nrows;
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self.values[i * m + j])
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// "Division" by a matrix: `self * rhs⁻¹`.
    ///
    /// `rhs` must be square with `self.ncols() == rhs.nrows()`. A singular
    /// `rhs` propagates as non-finite entries, as with [`inverse`](Self::inverse).
    pub fn div_matrix(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, MathError> {
        let inv = rhs.inverse()?;
        self.mul_matrix(&inv)
    }
}

// ── Operators ───────────────────────────────────────────────────────
//
// Structural mismatches panic with the `MathError` message; use the named
// forms (`checked_add`, `mul_matrix`, ...) to handle them.

fn unwrap_shape<R>(r: Result<R, MathError>) -> R {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_add(rhs))
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_sub(rhs))
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        -&self
    }
}

// ── Matrix * Matrix -> Matrix, Matrix * Vector -> Vector ────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.mul_matrix(rhs))
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        unwrap_shape(self.mul_vector(rhs))
    }
}

impl<T: Scalar> Mul<Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        &self * &rhs
    }
}

// ── Scalar multiplication / division ────────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        self.unscale(rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        self.unscale(rhs)
    }
}

macro_rules! impl_scalar_mul_matrix {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul_matrix!(f32, f64, i32, i64);
