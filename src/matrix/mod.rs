mod ops;
mod square;
mod util;

pub use square::MinorView;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::error::MathError;
use crate::traits::{MatrixRef, Scalar};
use crate::vector::Vector;

/// Dense matrix with runtime dimensions.
///
/// Column-major `Vec<T>` storage: element `(row, col)` lives at
/// `values[col * nrows + row]`, and `values.len() == nrows * ncols` always
/// holds. Arithmetic returns new matrices; the only in-place write is
/// [`Matrix::set_values`].
///
/// # Examples
///
/// ```
/// use linmath::Matrix;
///
/// // Columns (2, 3) and (5, 7).
/// let a = Matrix::new(vec![2.0_f64, 3.0, 5.0, 7.0]).unwrap();
/// assert_eq!(a.value_at(0, 1), 5.0);
/// assert_eq!(a.determinant().unwrap(), -1.0);
/// assert_eq!(a.inverse().unwrap().to_vec(), vec![-7.0, 3.0, 5.0, -2.0]);
/// assert_eq!(a.to_string(), "mat2x2(2, 3, 5, 7)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    values: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a square matrix from a column-major buffer.
    ///
    /// The side length is `sqrt(values.len())`; a length that is not a
    /// perfect square is rejected with [`MathError::InvalidArgument`].
    ///
    /// ```
    /// use linmath::Matrix;
    /// let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
    /// assert_eq!((m.nrows(), m.ncols()), (3, 3));
    /// assert!(Matrix::new(vec![1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn new(values: Vec<T>) -> Result<Self, MathError> {
        let n = square_side(values.len()).ok_or(MathError::InvalidArgument(
            "buffer length is not a perfect square; give explicit dimensions",
        ))?;
        Ok(Self {
            values,
            nrows: n,
            ncols: n,
        })
    }

    /// Create an `nrows x ncols` matrix from a column-major buffer.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let m = Matrix::with_shape(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// assert_eq!(m.value_at(1, 0), 2.0);
    /// assert_eq!(m.value_at(0, 1), 3.0);
    /// assert_eq!(m.value_at(1, 2), 6.0);
    /// ```
    pub fn with_shape(values: Vec<T>, nrows: usize, ncols: usize) -> Result<Self, MathError> {
        if values.len() != element_count(nrows, ncols)? {
            return Err(MathError::InvalidArgument(
                "buffer length does not match nrows * ncols",
            ));
        }
        Ok(Self {
            values,
            nrows,
            ncols,
        })
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Transposes the data to column-major internal storage.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.value_at(0, 2), 3.0);
    /// assert_eq!(m.value_at(1, 0), 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self, MathError> {
        if row_major.len() != element_count(nrows, ncols)? {
            return Err(MathError::InvalidArgument(
                "buffer length does not match nrows * ncols",
            ));
        }
        Ok(Self::from_fn(nrows, ncols, |i, j| row_major[i * ncols + j]))
    }

    /// `nrows x ncols` matrix of zeros.
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            values: vec![T::zero(); checked_len(nrows, ncols)],
            nrows,
            ncols,
        }
    }

    /// `n x n` identity matrix.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let id = Matrix::<f64>::identity(3);
    /// assert_eq!(id.value_at(1, 1), 1.0);
    /// assert_eq!(id.value_at(0, 2), 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Single-column matrix of shape `(v.dim(), 1)`.
    pub fn from_vector(v: &Vector<T>) -> Self {
        Self {
            values: v.to_vec(),
            nrows: v.dim(),
            ncols: 1,
        }
    }

    /// Matrix whose columns are `vectors`, left to right.
    ///
    /// Fails with [`MathError::InvalidArgument`] on an empty list and
    /// [`MathError::DimensionMismatch`] when the vectors differ in dimension.
    ///
    /// ```
    /// use linmath::{Matrix, Vector};
    /// let m = Matrix::from_vectors(&[
    ///     Vector::from([1.0, 2.0, 3.0]),
    ///     Vector::from([4.0, 5.0, 6.0]),
    /// ]).unwrap();
    /// assert_eq!((m.nrows(), m.ncols()), (3, 2));
    /// assert_eq!(m.row_at(0), vec![1.0, 4.0]);
    /// ```
    pub fn from_vectors(vectors: &[Vector<T>]) -> Result<Self, MathError> {
        let first = vectors
            .first()
            .ok_or(MathError::InvalidArgument("no vectors given"))?;
        let nrows = first.dim();
        let mut values = Vec::with_capacity(nrows * vectors.len());
        for v in vectors {
            if v.dim() != nrows {
                return Err(MathError::DimensionMismatch {
                    expected: (nrows, 1),
                    got: (v.dim(), 1),
                });
            }
            values.extend_from_slice(v.as_slice());
        }
        Ok(Self {
            values,
            nrows,
            ncols: vectors.len(),
        })
    }

    /// Replace the whole buffer in place, keeping the shape.
    ///
    /// This breaks the value-type convention the rest of the API follows;
    /// a matrix being `set` must not be read concurrently.
    pub fn set_values(&mut self, values: &[T]) -> Result<&mut Self, MathError> {
        if values.len() != self.values.len() {
            return Err(MathError::InvalidArgument(
                "buffer length does not match nrows * ncols",
            ));
        }
        self.values.copy_from_slice(values);
        Ok(self)
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// The column-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// Panics if `nrows * ncols` overflows `usize`.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let m = Matrix::from_fn(2, 2, |i, j| (i * 2 + j) as f64);
    /// assert_eq!(m.as_slice(), &[0.0, 2.0, 1.0, 3.0]);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut values = Vec::with_capacity(checked_len(nrows, ncols));
        for j in 0..ncols {
            for i in 0..nrows {
                values.push(f(i, j));
            }
        }
        Self {
            values,
            nrows,
            ncols,
        }
    }

    /// Shape checks are done by the caller.
    pub(crate) fn from_parts(values: Vec<T>, nrows: usize, ncols: usize) -> Self {
        debug_assert_eq!(values.len(), nrows * ncols);
        Self {
            values,
            nrows,
            ncols,
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Element at `(row, col)`. Panics when out of bounds.
    #[inline]
    pub fn value_at(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    /// Row `row`, left to right.
    pub fn row_at(&self, row: usize) -> Vec<T> {
        assert!(row < self.nrows, "row {} out of bounds ({} rows)", row, self.nrows);
        (0..self.ncols).map(|j| self.values[j * self.nrows + row]).collect()
    }

    /// Column `col`, top to bottom. Contiguous in the buffer.
    pub fn col_at(&self, col: usize) -> &[T] {
        assert!(col < self.ncols, "column {} out of bounds ({} columns)", col, self.ncols);
        let start = col * self.nrows;
        &self.values[start..start + self.nrows]
    }

    /// Copy of the column-major buffer.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }
}

fn element_count(nrows: usize, ncols: usize) -> Result<usize, MathError> {
    nrows
        .checked_mul(ncols)
        .ok_or(MathError::InvalidArgument("nrows * ncols overflows usize"))
}

fn checked_len(nrows: usize, ncols: usize) -> usize {
    match nrows.checked_mul(ncols) {
        Some(len) => len,
        None => panic!("{}x{} matrix size overflows usize", nrows, ncols),
    }
}

fn square_side(len: usize) -> Option<usize> {
    let mut n = 0usize;
    while n * n < len {
        n += 1;
    }
    (n * n == len).then_some(n)
}

// ── MatrixRef ───────────────────────────────────────────────────────

impl<T: Copy> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        self.values[col * self.nrows + row]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.values[col * self.nrows + row]
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mat{}x{}(", self.nrows, self.ncols)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}
