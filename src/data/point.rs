use array_init::array_init;
use num_traits::{Float, Zero};
use std::ops::{Index, Sub};

use super::Vector;

/// An N-dimensional point. Closeness is tolerance-based (see the epsilon
/// constants at the crate root), never exact equality.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)] // Required for correctness!
pub struct Point<T, const N: usize> {
  pub array: [T; N],
}

// Methods on N-dimensional points.
impl<T, const N: usize> Point<T, N> {
  pub const fn new(array: [T; N]) -> Point<T, N> {
    Point { array }
  }

  pub fn zero() -> Self
  where
    T: Zero,
  {
    Point {
      array: array_init(|_| Zero::zero()),
    }
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U, N>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }

  pub fn squared_euclidean_distance(&self, rhs: &Point<T, N>) -> T
  where
    T: Float,
  {
    self
      .array
      .iter()
      .zip(rhs.array.iter())
      .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
  }
}

impl<T: Copy, const N: usize> Point<T, N> {
  pub fn x_coord(&self) -> T {
    self.array[0]
  }

  pub fn y_coord(&self) -> T {
    self.array[1]
  }
}

impl<T: Copy> Point<T, 3> {
  /// Planar projection; the z-coordinate is discarded.
  pub fn xy(&self) -> Point<T, 2> {
    Point::new([self.array[0], self.array[1]])
  }
}

impl<T, const N: usize> Index<usize> for Point<T, N> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T, 2> {
  fn from(point: (T, T)) -> Point<T, 2> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<(T, T, T)> for Point<T, 3> {
  fn from(point: (T, T, T)) -> Point<T, 3> {
    Point {
      array: [point.0, point.1, point.2],
    }
  }
}

impl<'a, 'b, T, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N>
where
  T: Copy + Sub<Output = T>,
{
  type Output = Vector<T, N>;
  fn sub(self, rhs: &'b Point<T, N>) -> Vector<T, N> {
    Vector(array_init(|i| self.array[i] - rhs.array[i]))
  }
}
