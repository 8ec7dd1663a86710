use alloc::vec::Vec;

use crate::error::MathError;
use crate::traits::{FloatScalar, MatrixRef, Scalar};

use super::Matrix;

/// Sizes from which the factorial-cost expansion is worth a trace line.
const LARGE_EXPANSION: usize = 5;

/// Borrowed view of a matrix with some rows and columns masked out.
///
/// Holds the surviving row and column indices of the source; element data
/// is never copied, so recursing through minors only allocates index lists.
///
/// ```
/// use linmath::Matrix;
/// use linmath::matrix::MinorView;
/// use linmath::traits::MatrixRef;
///
/// let m = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
/// let minor = MinorView::full(&m).minor(0, 1);
/// assert_eq!((minor.nrows(), minor.ncols()), (2, 2));
/// assert_eq!(minor.get(0, 0), 4.0);
/// assert_eq!(minor.get(1, 1), 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct MinorView<'a, T> {
    source: &'a Matrix<T>,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl<'a, T> MinorView<'a, T> {
    /// View of the whole matrix.
    pub fn full(source: &'a Matrix<T>) -> Self {
        Self {
            source,
            rows: (0..source.nrows()).collect(),
            cols: (0..source.ncols()).collect(),
        }
    }

    /// View with view-relative `row` and `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(
            row < self.rows.len() && col < self.cols.len(),
            "minor ({}, {}) out of bounds for {}x{} view",
            row,
            col,
            self.rows.len(),
            self.cols.len()
        );
        let rows = without(&self.rows, row);
        let cols = without(&self.cols, col);
        Self {
            source: self.source,
            rows,
            cols,
        }
    }
}

fn without(idx: &[usize], skip: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(idx.len().saturating_sub(1));
    out.extend_from_slice(&idx[..skip]);
    out.extend_from_slice(&idx[skip + 1..]);
    out
}

impl<T: Copy> MatrixRef<T> for MinorView<'_, T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.cols.len()
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        MatrixRef::get(self.source, self.rows[row], self.cols[col])
    }
}

/// Laplace expansion along the first row of a square view.
///
/// The empty view has determinant one, which makes the cofactor of a 1x1
/// matrix come out as one.
fn expand<T: Scalar>(view: &MinorView<'_, T>) -> T {
    match view.nrows() {
        0 => T::one(),
        1 => view.get(0, 0),
        n => {
            let mut det = T::zero();
            for j in 0..n {
                let term = view.get(0, j) * expand(&view.minor(0, j));
                det = if j % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

impl<T: Scalar> Matrix<T> {
    fn require_square(&self) -> Result<(), MathError> {
        if !self.is_square() {
            return Err(MathError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Exact for integer-valued entries, any size, but factorial in cost:
    /// meant for the 2x2 to 4x4 transforms this crate targets.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let m = Matrix::new(vec![2.0, 3.0, 1.0, 5.0, -3.0, 4.0, 2.0, 1.0, -4.0]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 111.0);
    /// ```
    pub fn determinant(&self) -> Result<T, MathError> {
        self.require_square()?;
        if self.nrows >= LARGE_EXPANSION {
            log::trace!(
                "cofactor expansion of a {}x{} determinant",
                self.nrows,
                self.ncols
            );
        }
        Ok(expand(&MinorView::full(self)))
    }

    /// Signed minor: `(-1)^(row + col) * det(minor(row, col))`.
    ///
    /// Panics if `(row, col)` is out of bounds.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T, MathError> {
        self.require_square()?;
        let minor = expand(&MinorView::full(self).minor(row, col));
        Ok(if (row + col) % 2 == 0 {
            minor
        } else {
            T::zero() - minor
        })
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix<T>, MathError> {
        self.require_square()?;
        let n = self.nrows;
        let full = MinorView::full(self);
        let mut values = Vec::with_capacity(n * n);
        // adj(i, j) = cofactor(j, i); column-major walk over (i, j).
        for j in 0..n {
            for i in 0..n {
                let minor = expand(&full.minor(j, i));
                values.push(if (i + j) % 2 == 0 {
                    minor
                } else {
                    T::zero() - minor
                });
            }
        }
        Ok(Matrix::from_parts(values, n, n))
    }

    /// Sum of diagonal elements.
    pub fn trace(&self) -> Result<T, MathError> {
        self.require_square()?;
        let mut sum = T::zero();
        for i in 0..self.nrows {
            sum = sum + self[(i, i)];
        }
        Ok(sum)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Inverse as `adjugate / determinant`.
    ///
    /// A singular matrix is not an error: dividing by a zero determinant
    /// leaves `Infinity`/`NaN` entries, so check [`is_finite`](Self::is_finite)
    /// when that matters.
    ///
    /// ```
    /// use linmath::Matrix;
    /// let m = Matrix::new(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 0.0, 9.0]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// assert!(inv.is_finite());
    /// assert!((&m * &inv).roughly_equals(&Matrix::identity(3)));
    ///
    /// let singular = Matrix::new(vec![1.0_f64, 2.0, 2.0, 4.0]).unwrap();
    /// assert!(!singular.inverse().unwrap().is_finite());
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>, MathError> {
        let det = self.determinant()?;
        if det == T::zero() {
            log::debug!(
                "inverting singular {}x{} matrix, entries will be non-finite",
                self.nrows,
                self.ncols
            );
        }
        Ok(self.adjugate()?.unscale(det))
    }
}
