pub mod earclip;
pub mod grid;

pub use earclip::triangulate_simple;
pub use grid::{grid_resolution, triangulate_grid, triangulate_grid_with_resolution};

use crate::algorithms::intersection::has_self_intersections;
use crate::data::{Mesh, Polygon};
use crate::PolygonScalar;

/// Triangulate a normalized polygon with whichever strategy fits it.
///
/// Simple polygons are ear clipped exactly, reusing the input vertices.
/// Self-intersecting polygons get the grid approximation, which mints new
/// vertices. Either way the result may be empty for degenerate input.
pub fn triangulate<T: PolygonScalar>(polygon: &Polygon<T>) -> Mesh<T> {
  if has_self_intersections(polygon) {
    grid::triangulate_grid(polygon)
  } else {
    Mesh::from_polygon(polygon, earclip::triangulate_simple(polygon))
  }
}
