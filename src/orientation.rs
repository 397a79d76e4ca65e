use crate::data::Point;
use crate::PolygonScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is the sign of the 2D cross product of `p2 - p1` and
  /// `p3 - p1`. Strictly positive means counter-clockwise, strictly
  /// negative clockwise, and exactly zero collinear; no tolerance is
  /// applied.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use loopfill::data::Point;
  /// # use loopfill::Orientation;
  /// let p1 = Point::new([0.0, 0.0]);
  /// let p2 = Point::new([0.0, 1.0]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([0.0, 2.0])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([-1.0, 2.0])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([1.0, 2.0])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T, 2>, p2: &Point<T, 2>, p3: &Point<T, 2>) -> Orientation
  where
    T: PolygonScalar,
  {
    Orientation::from_sign((p2 - p1).cross(&(p3 - p1)))
  }

  pub fn from_sign<T>(sign: T) -> Orientation
  where
    T: PolygonScalar,
  {
    if sign > T::zero() {
      CounterClockWise
    } else if sign < T::zero() {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  /// True iff the two turns are strict and in opposite directions.
  /// Collinear never counts, so touching configurations stay negative.
  pub fn is_opposite_turn(self, other: Orientation) -> bool {
    matches!(
      (self, other),
      (CounterClockWise, ClockWise) | (ClockWise, CounterClockWise)
    )
  }
}
