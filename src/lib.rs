//! # linmath
//!
//! Dense matrix and vector engine for 3D transform pipelines, no-std
//! compatible (requires `alloc`). Targets correctness and generality for the
//! small (2x2 to 4x4, occasionally larger) matrices used for camera,
//! model and projection transforms.
//!
//! ## Quick start
//!
//! ```
//! use linmath::{Matrix, Vector};
//!
//! // Column-major: columns (2, 3) and (5, 7).
//! let a = Matrix::new(vec![2.0_f64, 3.0, 5.0, 7.0]).unwrap();
//! let a_inv = a.inverse().unwrap();
//! assert_eq!(a_inv.to_vec(), vec![-7.0, 3.0, 5.0, -2.0]);
//! assert!((&a * &a_inv).roughly_equals(&Matrix::identity(2)));
//!
//! let v = &a * &Vector::from([1.0, 1.0]);
//! assert_eq!(v, Vector::from([7.0, 10.0]));
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: [`Vector<T>`], a fixed-length tuple of components with
//!   arithmetic, dot/cross products, normalization and named accessors.
//!
//! - [`matrix`]: [`Matrix<T>`] with runtime dimensions and column-major
//!   `Vec<T>` storage. Determinant and inverse by cofactor expansion over
//!   borrowed [`MinorView`](matrix::MinorView)s, matrix-matrix and
//!   matrix-vector products, exact and rough equality.
//!
//! - [`transform`]: rotation, scaling, translation, look-at and
//!   perspective constructors for 2x2, 3x3 and 4x4 matrices.
//!
//! - [`geometry`], [`interp`]: triangle normals, `clamp` and `mix`.
//!
//! - [`traits`]: element traits:
//!   - [`Scalar`]: all elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats, used wherever IEEE-754 behaviour matters
//!   - [`MatrixRef`]: generic read access for algorithms
//!
//! ## Errors
//!
//! Structural mistakes (mismatched shapes, non-square operands, cross
//! products outside 3D, empty inputs) are reported as [`MathError`] by the
//! named operations and panic in the operator overloads. Numeric degeneracy
//! is not an error: dividing by zero or inverting a singular matrix produces
//! `Infinity`/`NaN` entries, detectable with `is_finite()` / `is_nan()`.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | `std::error::Error` for [`MathError`]; system libm |
//! | `libm`  | baseline | Pure-Rust software float fallback when `std` is off |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod geometry;
pub mod interp;
pub mod matrix;
pub mod traits;
pub mod transform;
pub mod vector;

pub use error::MathError;
pub use matrix::Matrix;
pub use traits::{FloatScalar, MatrixRef, Scalar};
pub use vector::Vector;
