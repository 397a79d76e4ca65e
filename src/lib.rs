// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]

//! Best-effort polygon filling.
//!
//! Given an ordered, possibly self-intersecting, closed or near-closed
//! polyline, produce a triangle mesh that approximates the filled interior
//! of the polygon:
//!
//! 1. Normalize: drop the z-coordinate and elide a duplicate closing point.
//! 2. Detect self-intersections over all non-adjacent edge pairs.
//! 3. Simple polygons are triangulated exactly by ear clipping.
//! 4. Self-intersecting polygons fall back to sampling a bounded grid with
//!    the even-odd rule, two triangles per interior cell.
//!
//! ```rust
//! use loopfill::data::Point;
//!
//! let mesh = loopfill::fill_polygon_2d(&[
//!   Point::new([0.0, 0.0]),
//!   Point::new([4.0, 0.0]),
//!   Point::new([4.0, 4.0]),
//!   Point::new([0.0, 4.0]),
//! ]).unwrap();
//! assert_eq!(mesh.triangles.len(), 2);
//! ```
use claims::debug_assert_ok;
use num_traits::*;
use std::iter::Sum;

pub mod algorithms;
pub mod data;
pub mod io;
mod intersection;
mod orientation;

pub use intersection::Intersects;
pub use orientation::Orientation;

use crate::data::{Mesh, Point, Polygon};

/// Points closer than this to the ring start are treated as the duplicate
/// closing point and elided during normalization.
pub const CLOSING_POINT_EPSILON: f64 = 1e-3;

/// Segment pairs whose intersection denominator is smaller than this are
/// treated as parallel or degenerate.
pub const DEGENERATE_LINE_EPSILON: f64 = 1e-4;

/// Grid fallback resolution is `sqrt(vertex_count) * GRID_RESOLUTION_SCALE`,
/// clamped to [`GRID_RESOLUTION_MIN`]..=[`GRID_RESOLUTION_MAX`].
pub const GRID_RESOLUTION_SCALE: f64 = 8.0;
pub const GRID_RESOLUTION_MIN: usize = 20;
pub const GRID_RESOLUTION_MAX: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three usable points after normalization.
  InsufficientPoints,
  /// Triangulation finished without emitting a single triangle.
  NoTriangles,
  DuplicatePoints,
  /// A mesh triangle references a vertex that doesn't exist.
  InvalidIndex,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientPoints => write!(f, "Insufficient points"),
      Error::NoTriangles => write!(f, "No triangles produced"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::InvalidIndex => write!(f, "Triangle index out of bounds"),
    }
  }
}

/// Scalar types the triangulator works over.
///
/// All predicates are plain floating-point sign tests with the tolerances
/// defined at the crate root; exact arithmetic is out of scope.
pub trait PolygonScalar:
  Float + FromPrimitive + NumAssignOps + Sum + std::fmt::Debug
{
  fn from_constant(value: f64) -> Self {
    <Self as FromPrimitive>::from_f64(value).unwrap()
  }
  fn from_index(value: usize) -> Self {
    <Self as FromPrimitive>::from_usize(value).unwrap()
  }
}

impl PolygonScalar for f32 {}
impl PolygonScalar for f64 {}

/// Fill the polygon described by an ordered 3D point path.
///
/// The z-coordinate is discarded. Returns [`Error::InsufficientPoints`] if
/// fewer than three points remain after normalization and
/// [`Error::NoTriangles`] if triangulation yields an empty mesh; callers are
/// expected to skip mesh creation on either.
pub fn fill_polygon<T: PolygonScalar>(points: &[Point<T, 3>]) -> Result<Mesh<T>, Error> {
  let polygon = Polygon::from_path(points)?;
  finish(algorithms::triangulation::triangulate(&polygon))
}

/// Same as [`fill_polygon`] for points that are already planar.
pub fn fill_polygon_2d<T: PolygonScalar>(points: &[Point<T, 2>]) -> Result<Mesh<T>, Error> {
  let polygon = Polygon::new(points.to_vec())?;
  finish(algorithms::triangulation::triangulate(&polygon))
}

fn finish<T: PolygonScalar>(mesh: Mesh<T>) -> Result<Mesh<T>, Error> {
  if mesh.triangles.is_empty() {
    return Err(Error::NoTriangles);
  }
  debug_assert_ok!(mesh.validate());
  Ok(mesh)
}

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn too_few_points() {
    let pts = [Point::new([0.0, 0.0]), Point::new([1.0, 0.0])];
    assert_eq!(fill_polygon_2d(&pts), Err(Error::InsufficientPoints));
  }

  #[test]
  fn closing_point_reduces_below_three() {
    let pts = [
      Point::new([0.0, 0.0]),
      Point::new([1.0, 1.0]),
      Point::new([0.0005, 0.0005]),
    ];
    assert_eq!(fill_polygon_2d(&pts), Err(Error::InsufficientPoints));
  }

  #[test]
  fn collinear_points_yield_no_triangles() {
    let pts = [
      Point::new([0.0, 0.0, 0.0]),
      Point::new([1.0, 0.0, 0.0]),
      Point::new([2.0, 0.0, 0.0]),
      Point::new([3.0, 0.0, 0.0]),
    ];
    assert_eq!(fill_polygon(&pts), Err(Error::NoTriangles));
  }

  #[test]
  fn simple_path_is_ear_clipped() {
    let pts = [
      Point::new([0.0, 0.0, 7.0]),
      Point::new([4.0, 0.0, -2.0]),
      Point::new([4.0, 4.0, 0.5]),
      Point::new([0.0, 4.0, 0.0]),
    ];
    let mesh = fill_polygon(&pts).unwrap();
    // Ear clipping reuses the input vertices; z is dropped.
    assert_eq!(mesh.vertices.len(), 4);
    assert_eq!(mesh.triangles.len(), 2);
    assert!(mesh.vertices.iter().all(|v| v.array[2] == 0.0));
  }

  #[test]
  fn self_intersecting_path_uses_grid() {
    let pts = [
      Point::new([0.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 4.0]),
    ];
    let mesh = fill_polygon_2d(&pts).unwrap();
    // Grid cells mint fresh vertices, four per interior cell.
    assert!(mesh.vertices.len() > 4);
    assert_eq!(mesh.vertices.len(), mesh.triangles.len() * 2);
  }
}
