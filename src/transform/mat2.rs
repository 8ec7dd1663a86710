//! 2x2 transforms in the plane.

use crate::traits::FloatScalar;
use crate::Matrix;

use super::square;

/// Counter-clockwise rotation by `angle` radians.
pub fn rotation<T: FloatScalar>(angle: T) -> Matrix<T> {
    let (s, c) = angle.sin_cos();
    square(2, [c, s, -s, c])
}

/// Axis-aligned scaling.
pub fn scaling<T: FloatScalar>(sx: T, sy: T) -> Matrix<T> {
    let z = T::zero();
    square(2, [sx, z, z, sy])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotation_quarter_turn() {
        let v = &rotation(FRAC_PI_2) * &Vector::from([1.0, 0.0]);
        assert!(v.roughly_equals(&Vector::from([0.0, 1.0])));
    }

    #[test]
    fn rotation_is_orthonormal() {
        let r = rotation(0.3_f64);
        assert!((r.determinant().unwrap() - 1.0).abs() < 1e-12);
        assert!(r.inverse().unwrap().roughly_equals(&r.transpose()));
    }

    #[test]
    fn rotation_half_turn_twice_is_identity() {
        let r = rotation(PI);
        assert!((&r * &r).roughly_equals(&Matrix::identity(2)));
    }

    #[test]
    fn scaling_values() {
        let m = scaling(2.0, 3.0);
        assert_eq!(m.to_vec(), alloc::vec![2.0, 0.0, 0.0, 3.0]);
        assert_eq!(&m * &Vector::from([1.0, 1.0]), Vector::from([2.0, 3.0]));
    }
}
