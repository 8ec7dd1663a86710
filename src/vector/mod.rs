mod ops;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::error::MathError;
use crate::traits::{MatrixRef, Scalar};

/// Fixed-length tuple of real components.
///
/// The dimension is set at construction. Arithmetic never mutates its
/// operands: every operation returns a new vector. The only in-place write
/// is [`Vector::set`], which replaces the whole buffer.
///
/// # Examples
///
/// ```
/// use linmath::Vector;
///
/// let a = Vector::from([2.0_f64, 3.0, 4.0]);
/// let b = Vector::from([5.0, 7.0, 6.0]);
/// assert_eq!(a.dot(&b).unwrap(), 55.0);
/// assert_eq!(a.cross(&b).unwrap(), Vector::from([-10.0, 8.0, -1.0]));
/// assert_eq!(a.x(), Some(2.0));
/// assert_eq!(a.w(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T = f64> {
    values: Vec<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Create a vector owning `values`.
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Create a vector by copying a slice.
    ///
    /// ```
    /// use linmath::Vector;
    /// let v = Vector::from_slice(&[3.0, 5.0]);
    /// assert_eq!(v.dim(), 2);
    /// assert_eq!(v.y(), Some(5.0));
    /// ```
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Create a vector of dimension `dim` with every component set to `value`.
    ///
    /// ```
    /// use linmath::Vector;
    /// let v = Vector::fill(4, 1.0);
    /// assert_eq!(v.as_slice(), &[1.0, 1.0, 1.0, 1.0]);
    /// ```
    pub fn fill(dim: usize, value: T) -> Self {
        Self {
            values: vec![value; dim],
        }
    }

    /// Zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Self {
        Self::fill(dim, T::zero())
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Vector<T> {
    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consume the vector, returning its buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Scalar> Vector<T> {
    /// Copy the components into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Component `i`, or `None` past the end.
    #[inline]
    pub fn component(&self, i: usize) -> Option<T> {
        self.values.get(i).copied()
    }

    #[inline]
    pub fn x(&self) -> Option<T> {
        self.component(0)
    }

    #[inline]
    pub fn y(&self) -> Option<T> {
        self.component(1)
    }

    #[inline]
    pub fn z(&self) -> Option<T> {
        self.component(2)
    }

    #[inline]
    pub fn w(&self) -> Option<T> {
        self.component(3)
    }

    /// Copy of `self` with component `i` replaced.
    ///
    /// Fails with [`MathError::UnsupportedDimension`] if the vector has no
    /// component `i`; the dimension never grows.
    pub fn with_component(&self, i: usize, value: T) -> Result<Self, MathError> {
        if i >= self.dim() {
            return Err(MathError::UnsupportedDimension {
                dim: self.dim(),
                required: i + 1,
            });
        }
        let mut values = self.values.clone();
        values[i] = value;
        Ok(Self { values })
    }

    /// ```
    /// use linmath::Vector;
    /// let v = Vector::from([1.0, 2.0]);
    /// let moved = v.with_x(5.0).unwrap();
    /// assert_eq!(moved.x(), Some(5.0));
    /// assert_eq!(v.x(), Some(1.0));
    /// assert!(v.with_z(1.0).is_err());
    /// ```
    pub fn with_x(&self, value: T) -> Result<Self, MathError> {
        self.with_component(0, value)
    }

    pub fn with_y(&self, value: T) -> Result<Self, MathError> {
        self.with_component(1, value)
    }

    pub fn with_z(&self, value: T) -> Result<Self, MathError> {
        self.with_component(2, value)
    }

    pub fn with_w(&self, value: T) -> Result<Self, MathError> {
        self.with_component(3, value)
    }

    /// Replace every component in place, possibly changing the dimension.
    ///
    /// This is the one mutating operation on `Vector`. It breaks the
    /// value-type convention the rest of the API follows, so do not share a
    /// vector that is being `set` with other threads.
    pub fn set(&mut self, values: &[T]) -> &mut Self {
        self.values.clear();
        self.values.extend_from_slice(values);
        self
    }

    fn project(&self, idx: &[usize]) -> Option<Self> {
        let mut values = Vec::with_capacity(idx.len());
        for &i in idx {
            values.push(self.component(i)?);
        }
        Some(Self { values })
    }

    /// `(x, y)` as a new vector.
    ///
    /// ```
    /// use linmath::Vector;
    /// let v = Vector::from([1.0, 2.0, 3.0]);
    /// assert_eq!(v.xy(), Some(Vector::from([1.0, 2.0])));
    /// assert_eq!(v.xz(), Some(Vector::from([1.0, 3.0])));
    /// assert_eq!(Vector::from([1.0, 2.0]).xyz(), None);
    /// ```
    pub fn xy(&self) -> Option<Self> {
        self.project(&[0, 1])
    }

    pub fn xz(&self) -> Option<Self> {
        self.project(&[0, 2])
    }

    pub fn yz(&self) -> Option<Self> {
        self.project(&[1, 2])
    }

    pub fn xyz(&self) -> Option<Self> {
        self.project(&[0, 1, 2])
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.values[i]
    }
}

// ── MatrixRef (as a column) ─────────────────────────────────────────

impl<T: Copy> MatrixRef<T> for Vector<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn ncols(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, row: usize, _col: usize) -> T {
        self.values[row]
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn constructors() {
        let a = Vector::new(vec![1.0, 2.0]);
        let b = Vector::from_slice(&[1.0, 2.0]);
        let c = Vector::from([1.0, 2.0]);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(Vector::fill(3, 3.0).to_vec(), vec![3.0, 3.0, 3.0]);
        assert_eq!(Vector::<f64>::zeros(2).as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn named_components() {
        let v = Vector::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.x(), Some(1.0));
        assert_eq!(v.y(), Some(2.0));
        assert_eq!(v.z(), Some(3.0));
        assert_eq!(v.w(), Some(4.0));
    }

    #[test]
    fn missing_component_is_absent_not_zero() {
        let v = Vector::from([1.0, 2.0]);
        assert_eq!(v.z(), None);
        assert_eq!(v.w(), None);
    }

    #[test]
    fn with_builders_leave_source_untouched() {
        let v = Vector::from([1.0, 2.0, 3.0]);
        let u = v.with_y(9.0).unwrap().with_z(8.0).unwrap();
        assert_eq!(u.as_slice(), &[1.0, 9.0, 8.0]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn with_builder_out_of_range() {
        let v = Vector::from([1.0, 2.0, 3.0]);
        assert_eq!(
            v.with_w(1.0),
            Err(MathError::UnsupportedDimension { dim: 3, required: 4 })
        );
    }

    #[test]
    fn set_replaces_everything() {
        let mut v = Vector::from([1.0, 2.0]);
        v.set(&[4.0, 5.0, 6.0]);
        assert_eq!(v.dim(), 3);
        assert_eq!(v.as_slice(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn swizzles_are_copies() {
        let v = Vector::from([1.0, 2.0, 3.0]);
        let yz = v.yz().unwrap();
        assert_eq!(yz.as_slice(), &[2.0, 3.0]);
        let yz = yz.with_x(10.0).unwrap();
        assert_eq!(yz.x(), Some(10.0));
        assert_eq!(v.y(), Some(2.0));
        assert_eq!(v.xyz(), Some(v.clone()));
    }

    #[test]
    fn swizzle_on_short_vector() {
        let v = Vector::from([1.0, 2.0]);
        assert!(v.xy().is_some());
        assert_eq!(v.xz(), None);
        assert_eq!(v.yz(), None);
    }

    #[test]
    fn index() {
        let v = Vector::from([7.0, 8.0]);
        assert_eq!(v[1], 8.0);
    }

    #[test]
    fn as_column() {
        let v = Vector::from([1.0, 2.0, 3.0]);
        assert_eq!(MatrixRef::nrows(&v), 3);
        assert_eq!(MatrixRef::ncols(&v), 1);
        assert_eq!(MatrixRef::get(&v, 2, 0), 3.0);
    }

    #[test]
    fn display() {
        assert_eq!(Vector::from([3.0, -2.0]).to_string(), "(3, -2)");
        assert_eq!(Vector::from([3.0, -2.0, 1.0]).to_string(), "(3, -2, 1)");
    }
}
