//! Geometric helpers built on [`Vector`].

use crate::error::MathError;
use crate::traits::FloatScalar;
use crate::vector::Vector;

/// Unit normal of the triangle `(p1, p2, p3)`, wound counter-clockwise.
///
/// All points must be 3-vectors. A degenerate triangle gives `NaN`
/// components.
///
/// ```
/// use linmath::geometry::surface_normal;
/// use linmath::Vector;
///
/// let n = surface_normal(
///     &Vector::from([0.0, 0.0, 0.0]),
///     &Vector::from([1.0, 0.0, 0.0]),
///     &Vector::from([0.0, 1.0, 0.0]),
/// ).unwrap();
/// assert_eq!(n, Vector::from([0.0, 0.0, 1.0]));
/// ```
pub fn surface_normal<T: FloatScalar>(
    p1: &Vector<T>,
    p2: &Vector<T>,
    p3: &Vector<T>,
) -> Result<Vector<T>, MathError> {
    let u = p2.checked_sub(p1)?;
    let v = p3.checked_sub(p1)?;
    Ok(u.cross(&v)?.normalized())
}
