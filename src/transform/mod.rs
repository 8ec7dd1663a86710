//! Constructors for the common transform matrices.
//!
//! Everything here is column-major like the rest of the crate, takes angles
//! in radians, and is meant to be applied as `m * v` to column vectors.
//!
//! # Examples
//!
//! ```
//! use core::f64::consts::FRAC_PI_2;
//! use linmath::transform::mat3;
//! use linmath::Vector;
//!
//! let r = mat3::rot_z(FRAC_PI_2);
//! let v = &r * &Vector::from([1.0, 0.0, 0.0]);
//! assert!(v.roughly_equals(&Vector::from([0.0, 1.0, 0.0])));
//! ```

pub mod mat2;
pub mod mat3;
pub mod mat4;

use alloc::vec::Vec;

use crate::traits::FloatScalar;
use crate::Matrix;

/// `n x n` matrix from a column-major literal.
fn square<T: FloatScalar, const L: usize>(n: usize, values: [T; L]) -> Matrix<T> {
    debug_assert_eq!(L, n * n);
    Matrix::from_parts(Vec::from(values), n, n)
}
