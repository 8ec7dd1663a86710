//! 4x4 homogeneous transforms for 3D pipelines: model, view and projection.

use crate::error::MathError;
use crate::traits::FloatScalar;
use crate::vector::Vector;
use crate::Matrix;

use super::square;

/// 4x4 identity.
pub fn identity<T: FloatScalar>() -> Matrix<T> {
    Matrix::identity(4)
}

/// Translation by `(x, y, z)`.
pub fn translation<T: FloatScalar>(x: T, y: T, z: T) -> Matrix<T> {
    let (o, n) = (T::one(), T::zero());
    square(4, [o, n, n, n, n, o, n, n, n, n, o, n, x, y, z, o])
}

/// Axis-aligned scaling.
pub fn scaling<T: FloatScalar>(sx: T, sy: T, sz: T) -> Matrix<T> {
    let (o, n) = (T::one(), T::zero());
    square(4, [sx, n, n, n, n, sy, n, n, n, n, sz, n, n, n, n, o])
}

/// Rotation about the x axis.
pub fn rot_x<T: FloatScalar>(angle: T) -> Matrix<T> {
    let (s, c) = angle.sin_cos();
    let (o, n) = (T::one(), T::zero());
    square(4, [o, n, n, n, n, c, s, n, n, -s, c, n, n, n, n, o])
}

/// Rotation about the y axis.
pub fn rot_y<T: FloatScalar>(angle: T) -> Matrix<T> {
    let (s, c) = angle.sin_cos();
    let (o, n) = (T::one(), T::zero());
    square(4, [c, n, -s, n, n, o, n, n, s, n, c, n, n, n, n, o])
}

/// Rotation about the z axis.
pub fn rot_z<T: FloatScalar>(angle: T) -> Matrix<T> {
    let (s, c) = angle.sin_cos();
    let (o, n) = (T::one(), T::zero());
    square(4, [c, s, n, n, -s, c, n, n, n, n, o, n, n, n, n, o])
}

fn xyz<T: FloatScalar>(v: &Vector<T>) -> Result<[T; 3], MathError> {
    if v.dim() != 3 {
        return Err(MathError::UnsupportedDimension {
            dim: v.dim(),
            required: 3,
        });
    }
    Ok([v[0], v[1], v[2]])
}

/// Camera frame placed at `position`, looking at `target`.
///
/// Columns are the camera's x, y and z axes followed by `position`, with
/// the z axis pointing from `target` back to the eye. All three inputs must
/// be 3-vectors. A degenerate frame (`position == target`, or `up` parallel
/// to the view direction) is not trapped and yields `NaN` entries.
///
/// ```
/// use linmath::transform::mat4;
/// use linmath::{Matrix, Vector};
///
/// let eye = Vector::from([0.0, 0.0, 5.0]);
/// let m = mat4::look_at(&eye, &Vector::from([0.0, 0.0, 0.0]), &Vector::from([0.0, 1.0, 0.0])).unwrap();
/// assert_eq!(m, mat4::translation(0.0, 0.0, 5.0));
/// ```
pub fn look_at<T: FloatScalar>(
    position: &Vector<T>,
    target: &Vector<T>,
    up: &Vector<T>,
) -> Result<Matrix<T>, MathError> {
    let p = xyz(position)?;
    xyz(target)?;
    xyz(up)?;
    let z_axis = position.checked_sub(target)?.normalized();
    let x_axis = up.cross(&z_axis)?.normalized();
    let y_axis = z_axis.cross(&x_axis)?.normalized();
    let (o, n) = (T::one(), T::zero());
    #[rustfmt::skip]
    let columns = [
        x_axis[0], x_axis[1], x_axis[2], n,
        y_axis[0], y_axis[1], y_axis[2], n,
        z_axis[0], z_axis[1], z_axis[2], n,
        p[0],      p[1],      p[2],      o,
    ];
    Ok(square(4, columns))
}

/// Right-handed perspective projection mapping the view frustum to clip
/// space with `z` in `[-1, 1]`.
///
/// `fovy` is the vertical field of view in radians, `aspect` is width over
/// height. `near == far` is not trapped and yields non-finite entries.
pub fn perspective<T: FloatScalar>(fovy: T, aspect: T, near: T, far: T) -> Matrix<T> {
    let two = T::one() + T::one();
    let f = T::one() / (fovy / two).tan();
    let nf = T::one() / (near - far);
    let n = T::zero();
    #[rustfmt::skip]
    let columns = [
        f / aspect, n, n,                     n,
        n,          f, n,                     n,
        n,          n, (far + near) * nf,     -T::one(),
        n,          n, two * far * near * nf, n,
    ];
    square(4, columns)
}

/// Orthographic projection of the view-space box `[left, right] x
/// [bottom, top] x [-near, -far]` onto the clip cube `[-1, 1]^3`.
///
/// `w` stays 1, so clip and NDC coordinates coincide. An empty range on any
/// axis is not trapped and yields non-finite entries.
///
/// ```
/// use linmath::transform::mat4;
/// use linmath::Vector;
///
/// let m = mat4::ortho(-2.0, 2.0, -1.0, 1.0, 1.0, 10.0);
/// let p = &m * &Vector::from([2.0, 1.0, -10.0, 1.0]);
/// assert!(p.roughly_equals(&Vector::from([1.0, 1.0, 1.0, 1.0])));
/// ```
pub fn ortho<T: FloatScalar>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix<T> {
    let two = T::one() + T::one();
    let (rl, tb, nf) = (
        T::one() / (right - left),
        T::one() / (top - bottom),
        T::one() / (near - far),
    );
    let n = T::zero();
    #[rustfmt::skip]
    let columns = [
        two * rl,              n,                     n,                  n,
        n,                     two * tb,              n,                  n,
        n,                     n,                     two * nf,           n,
        -(right + left) * rl,  -(top + bottom) * tb,  (far + near) * nf,  T::one(),
    ];
    square(4, columns)
}

/// Perspective projection of the view frustum whose near plane spans
/// `[left, right] x [bottom, top]` at depth `-near`.
///
/// The general off-axis form of [`perspective`]; a symmetric frustum gives
/// the same matrix.
pub fn frustum<T: FloatScalar>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix<T> {
    let two = T::one() + T::one();
    let (rl, tb, nf) = (
        T::one() / (right - left),
        T::one() / (top - bottom),
        T::one() / (near - far),
    );
    let n = T::zero();
    #[rustfmt::skip]
    let columns = [
        two * near * rl,       n,                    n,                     n,
        n,                     two * near * tb,      n,                     n,
        (right + left) * rl,   (top + bottom) * tb,  (far + near) * nf,     -T::one(),
        n,                     n,                    two * far * near * nf, n,
    ];
    square(4, columns)
}
