//! 3x3 transforms: homogeneous 2D translation, and 3D scaling and rotation.

use crate::traits::FloatScalar;
use crate::Matrix;

use super::square;

/// Homogeneous 2D translation by `(x, y)`.
pub fn translation<T: FloatScalar>(x: T, y: T) -> Matrix<T> {
    let (o, z) = (T::one(), T::zero());
    square(3, [o, z, z, z, o, z, x, y, o])
}

/// Axis-aligned 3D scaling.
pub fn scaling<T: FloatScalar>(sx: T, sy: T, sz: T) -> Matrix<T> {
    let z = T::zero();
    square(3, [sx, z, z, z, sy, z, z, z, sz])
}

/// Rotation about the x axis.
pub fn rot_x<T: FloatScalar>(angle: T) -> Matrix<T> {
    let (s, c) = angle.sin_cos();
    let (o, z) = (T::one(), T::zero());
    square(3, [o, z, z, z, c, s, z, -s, c])
}

/// Rotation about the y axis.
pub fn rot_y<T: FloatScalar>(angle: T) -> Matrix<T> {
    let (s, c) = angle.sin_cos();
    let (o, z) = (T::one(), T::zero());
    square(3, [c, z, -s, z, o, z, s, z, c])
}

/// Rotation about the z axis.
pub fn rot_z<T: FloatScalar>(angle: T) -> Matrix<T> {
    let (s, c) = angle.sin_cos();
    let (o, z) = (T::one(), T::zero());
    square(3, [c, s, z, -s, c, z, z, z, o])
}
