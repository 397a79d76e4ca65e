use super::{Point, PointLocation};
use crate::{Orientation, PolygonScalar};

/// Three borrowed points. Used by the ear clipper for candidate triangles;
/// no winding is assumed.
#[derive(Debug, Clone, Copy)]
pub struct TriangleView<'a, T>([&'a Point<T, 2>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: PolygonScalar,
{
  // O(1)
  pub fn new(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    Orientation::new(a, b, c)
  }

  /// Locate `pt` relative to the triangle, for either winding.
  ///
  /// Boundary points are reported as `OnBoundary`, not `Outside`; the ear
  /// clipper treats them as contained, which is deliberately conservative
  /// around collinear neighbors.
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    use Orientation::*;
    let [a, b, c] = self.0;
    let ab = Orientation::new(a, b, pt);
    let bc = Orientation::new(b, c, pt);
    let ca = Orientation::new(c, a, pt);
    let has_cw = ab == ClockWise || bc == ClockWise || ca == ClockWise;
    let has_ccw = ab == CounterClockWise || bc == CounterClockWise || ca == CounterClockWise;
    if has_cw && has_ccw {
      PointLocation::Outside
    } else if ab == CoLinear || bc == CoLinear || ca == CoLinear {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  pub fn signed_area(&self) -> T {
    let [a, b, c] = self.0;
    (b - a).cross(&(c - a)) * T::from_constant(0.5)
  }
}
