use super::Point;
use crate::{Intersects, Orientation, PolygonScalar, DEGENERATE_LINE_EPSILON};

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

/// Borrowed polygon edge from `src` to `dst`.
#[derive(Debug, Clone, Copy)]
pub struct DirectedEdge<'a, T> {
  pub src: &'a Point<T, 2>,
  pub dst: &'a Point<T, 2>,
}

impl<'a, T> DirectedEdge<'a, T>
where
  T: PolygonScalar,
{
  /// Proper intersection test: true iff the endpoints of each segment lie
  /// strictly on opposite sides of the other segment's supporting line.
  ///
  /// Touching and collinear-overlap configurations are not reported. That
  /// makes adjacent polygon edges (which share an endpoint) come out
  /// negative without special-casing.
  pub fn properly_intersects(&self, other: &DirectedEdge<'_, T>) -> bool {
    let d1 = Orientation::new(other.src, other.dst, self.src);
    let d2 = Orientation::new(other.src, other.dst, self.dst);
    let d3 = Orientation::new(self.src, self.dst, other.src);
    let d4 = Orientation::new(self.src, self.dst, other.dst);
    d1.is_opposite_turn(d2) && d3.is_opposite_turn(d4)
  }

  /// Parametric segment-segment intersection point.
  ///
  /// Unlike [`DirectedEdge::properly_intersects`] this is inclusive of the
  /// segment endpoints. Returns `None` for parallel or near-degenerate
  /// configurations, where the denominator falls below
  /// [`DEGENERATE_LINE_EPSILON`](crate::DEGENERATE_LINE_EPSILON).
  pub fn intersection_point(&self, other: &DirectedEdge<'_, T>) -> Option<Point<T, 2>> {
    let (x1, y1) = (self.src.x_coord(), self.src.y_coord());
    let (x2, y2) = (self.dst.x_coord(), self.dst.y_coord());
    let (x3, y3) = (other.src.x_coord(), other.src.y_coord());
    let (x4, y4) = (other.dst.x_coord(), other.dst.y_coord());

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < T::from_constant(DEGENERATE_LINE_EPSILON) {
      return None;
    }
    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;
    if t >= T::zero() && t <= T::one() && u >= T::zero() && u <= T::one() {
      Some(Point::new([x1 + t * (x2 - x1), y1 + t * (y2 - y1)]))
    } else {
      None
    }
  }
}

impl<'a, T> Intersects for DirectedEdge<'a, T>
where
  T: PolygonScalar,
{
  type Result = Point<T, 2>;
  fn intersect(self, other: DirectedEdge<'a, T>) -> Option<Point<T, 2>> {
    self.intersection_point(&other)
  }
}
