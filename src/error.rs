/// Errors from structurally invalid operations.
///
/// Every variant describes a programmer mistake detected at the call site:
/// incompatible shapes, a non-square operand where a square one is
/// required, a dimension an operation is not defined for, or an empty
/// input. Numeric degeneracy (division by zero, singular inversion) is
/// never reported here; it shows up as `Infinity`/`NaN` entries instead.
///
/// ```
/// use linmath::{MathError, Matrix};
///
/// let a = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(a.determinant().unwrap_err(), MathError::NotSquare { nrows: 2, ncols: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Operand shapes are incompatible. Shapes are `(rows, cols)`; a vector
    /// of dimension `n` is reported as `(n, 1)`.
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// Determinant or inverse requested on a non-square matrix.
    NotSquare { nrows: usize, ncols: usize },
    /// Operation only defined for vectors of dimension `required`.
    UnsupportedDimension { dim: usize, required: usize },
    /// Empty input or a buffer that cannot describe the requested shape.
    InvalidArgument(&'static str),
}

impl core::fmt::Display for MathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MathError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            MathError::NotSquare { nrows, ncols } => {
                write!(f, "matrix is not square: {}x{}", nrows, ncols)
            }
            MathError::UnsupportedDimension { dim, required } => write!(
                f,
                "unsupported dimension: {} (operation requires {})",
                dim, required
            ),
            MathError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}
