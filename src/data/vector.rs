use std::ops::{Index, Mul, Sub};

use super::Point;

/// Difference of two points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T> Vector<T, 2>
where
  T: Copy + Mul<Output = T> + Sub<Output = T>,
{
  /// 2D cross product. The sign encodes the turn direction; see
  /// [`Orientation`](crate::Orientation).
  pub fn cross(&self, rhs: &Vector<T, 2>) -> T {
    self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0]
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
  fn from(point: Point<T, N>) -> Vector<T, N> {
    Vector(point.array)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cross_sign() {
    let x_axis = Vector([1.0, 0.0]);
    let y_axis = Vector([0.0, 1.0]);
    assert_eq!(x_axis.cross(&y_axis), 1.0);
    assert_eq!(y_axis.cross(&x_axis), -1.0);
    assert_eq!(x_axis.cross(&x_axis), 0.0);
  }
}
