use super::{Point, Polygon};
use crate::{Error, PolygonScalar};

/// Triangulation output: a flat vertex list plus index triples into it.
///
/// Vertices are 3D with z = 0 so the result can be handed to a renderer
/// as-is. Coincident vertices are not merged; the grid fallback emits four
/// fresh corners per cell and downstream consumers recompute normals and
/// bounds from the flat list anyway.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<T> {
  pub vertices: Vec<Point<T, 3>>,
  pub triangles: Vec<[usize; 3]>,
}

impl<T> Mesh<T>
where
  T: PolygonScalar,
{
  pub fn new() -> Mesh<T> {
    Mesh {
      vertices: Vec::new(),
      triangles: Vec::new(),
    }
  }

  /// Lift a polygon's vertices to the z = 0 plane, keeping their order and
  /// count, with `triangles` indexing into them. This is the ear-clip
  /// output path.
  pub fn from_polygon(polygon: &Polygon<T>, triangles: Vec<[usize; 3]>) -> Mesh<T> {
    let vertices = polygon
      .iter()
      .map(|p| Point::new([p.x_coord(), p.y_coord(), T::zero()]))
      .collect();
    Mesh {
      vertices,
      triangles,
    }
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  /// Every index must point at an existing vertex.
  pub fn validate(&self) -> Result<(), Error> {
    for trig in &self.triangles {
      if trig.iter().any(|&idx| idx >= self.vertices.len()) {
        return Err(Error::InvalidIndex);
      }
    }
    Ok(())
  }
}

impl<T> Default for Mesh<T>
where
  T: PolygonScalar,
{
  fn default() -> Mesh<T> {
    Mesh::new()
  }
}
