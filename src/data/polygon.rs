use ordered_float::OrderedFloat;
use std::collections::BTreeSet;

use crate::data::{DirectedEdge, Point};
use crate::{Error, PolygonScalar, CLOSING_POINT_EPSILON};

/// An ordered sequence of at least three planar points, implicitly closed:
/// edge `i` connects vertex `i` to vertex `(i + 1) % n`. No duplicate
/// closing point is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T, 2>>,
}

impl<T> Polygon<T>
where
  T: PolygonScalar,
{
  /// Build a polygon without normalization or validation.
  pub fn new_unchecked(points: Vec<Point<T, 2>>) -> Polygon<T> {
    Polygon { points }
  }

  /// Normalize an ordered point sequence into an implicitly-closed ring.
  ///
  /// If the last input point lies within
  /// [`CLOSING_POINT_EPSILON`](crate::CLOSING_POINT_EPSILON) of the first
  /// point it is elided. Only that one trailing point is tested; there is
  /// no running closure check.
  pub fn new(mut points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error> {
    if points.len() < 3 {
      return Err(Error::InsufficientPoints);
    }
    let eps = T::from_constant(CLOSING_POINT_EPSILON);
    let closes = {
      let first = &points[0];
      let last = &points[points.len() - 1];
      last.squared_euclidean_distance(first) < eps * eps
    };
    if closes {
      points.truncate(points.len() - 1);
    }
    if points.len() < 3 {
      return Err(Error::InsufficientPoints);
    }
    Ok(Polygon { points })
  }

  /// Normalize a 3D point path: project to the plane by dropping z, then
  /// elide the closing point as in [`Polygon::new`].
  pub fn from_path(points: &[Point<T, 3>]) -> Result<Polygon<T>, Error> {
    Polygon::new(points.iter().map(Point::xy).collect())
  }

  /// Check that the ring has at least three points and no exact duplicates.
  ///
  /// Not called by the fill pipeline; the triangulators tolerate duplicate
  /// points (at the cost of degraded output).
  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      return Err(Error::InsufficientPoints);
    }
    let mut seen = BTreeSet::new();
    for pt in self.iter() {
      let key = (
        OrderedFloat(pt.x_coord().to_f64().unwrap_or(f64::NAN)),
        OrderedFloat(pt.y_coord().to_f64().unwrap_or(f64::NAN)),
      );
      if !seen.insert(key) {
        return Err(Error::DuplicatePoints);
      }
    }
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point<T, 2> {
    &self.points[idx]
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T, 2>> {
    self.points.iter()
  }

  /// Edge `idx`, wrapping around from the last vertex to the first.
  pub fn edge(&self, idx: usize) -> DirectedEdge<'_, T> {
    DirectedEdge {
      src: &self.points[idx],
      dst: &self.points[(idx + 1) % self.points.len()],
    }
  }

  pub fn iter_edges(&self) -> impl Iterator<Item = DirectedEdge<'_, T>> {
    (0..self.points.len()).map(move |idx| self.edge(idx))
  }

  /// The same ring with the vertex order reversed (flips the winding).
  pub fn reversed(&self) -> Polygon<T> {
    let mut points = self.points.clone();
    points.reverse();
    Polygon { points }
  }

  /// Shoelace formula. Positive for counter-clockwise winding.
  pub fn signed_area(&self) -> T {
    let sum: T = self
      .iter_edges()
      .map(|edge| {
        edge.src.x_coord() * edge.dst.y_coord() - edge.dst.x_coord() * edge.src.y_coord()
      })
      .sum();
    sum * T::from_constant(0.5)
  }

  /// Axis-aligned bounding box as `(min, max)` corners.
  pub fn bounding_box(&self) -> (Point<T, 2>, Point<T, 2>) {
    let mut min_x = T::infinity();
    let mut min_y = T::infinity();
    let mut max_x = T::neg_infinity();
    let mut max_y = T::neg_infinity();
    for pt in self.iter() {
      min_x = min_x.min(pt.x_coord());
      min_y = min_y.min(pt.y_coord());
      max_x = max_x.max(pt.x_coord());
      max_y = max_y.max(pt.y_coord());
    }
    (Point::new([min_x, min_y]), Point::new([max_x, max_y]))
  }

  /// Even-odd point-in-polygon test.
  ///
  /// Casts a horizontal ray towards +x and counts crossings over edges
  /// whose y-range contains the point's y half-open (`[min, max)`), so a
  /// vertex exactly at the ray height is counted for exactly one of its two
  /// incident edges. An odd count means inside.
  pub fn contains_even_odd(&self, point: &Point<T, 2>) -> bool {
    let (px, py) = (point.x_coord(), point.y_coord());
    let mut crossings = 0;
    for edge in self.iter_edges() {
      let (ax, ay) = (edge.src.x_coord(), edge.src.y_coord());
      let (bx, by) = (edge.dst.x_coord(), edge.dst.y_coord());
      let spans = (ay <= py && py < by) || (by <= py && py < ay);
      if spans {
        // The edge isn't horizontal here; `spans` guarantees ay != by.
        let x_intercept = ax + (py - ay) * (bx - ax) / (by - ay);
        if px < x_intercept {
          crossings += 1;
        }
      }
    }
    crossings % 2 == 1
  }
}
