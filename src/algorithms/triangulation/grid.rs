use crate::data::{Mesh, Point, Polygon};
use crate::{
  PolygonScalar, GRID_RESOLUTION_MAX, GRID_RESOLUTION_MIN, GRID_RESOLUTION_SCALE,
};

/// Grid resolution for a polygon with `vertex_count` vertices:
/// `clamp(round(sqrt(n) * 8), 20, 80)`.
///
/// Resolution scales with polygon complexity but stays bounded; at the
/// ceiling the fallback samples 6400 cells, each emitting at most four
/// vertices and two triangles.
pub fn grid_resolution(vertex_count: usize) -> usize {
  let scaled = ((vertex_count as f64).sqrt() * GRID_RESOLUTION_SCALE).round() as usize;
  scaled.clamp(GRID_RESOLUTION_MIN, GRID_RESOLUTION_MAX)
}

/// Approximate the filled area of a self-intersecting polygon.
///
/// Rasterizes the bounding box into a square grid and keeps every cell
/// whose center is inside the polygon under the even-odd rule, two
/// triangles per kept cell. Cells are independent: adjacent cells do not
/// share vertices, so the mesh contains duplicate coincident vertices at
/// shared edges. Never fails; a polygon with no interior cells yields an
/// empty mesh.
pub fn triangulate_grid<T: PolygonScalar>(polygon: &Polygon<T>) -> Mesh<T> {
  triangulate_grid_with_resolution(polygon, grid_resolution(polygon.len()))
}

/// [`triangulate_grid`] with an explicit resolution, mainly for callers
/// that want to trade output size for fidelity.
pub fn triangulate_grid_with_resolution<T: PolygonScalar>(
  polygon: &Polygon<T>,
  resolution: usize,
) -> Mesh<T> {
  let (min, max) = polygon.bounding_box();
  let res = T::from_index(resolution);
  let step_x = (max.x_coord() - min.x_coord()) / res;
  let step_y = (max.y_coord() - min.y_coord()) / res;
  let half = T::from_constant(0.5);

  let mut mesh = Mesh::new();
  for i in 0..resolution {
    for j in 0..resolution {
      let x = min.x_coord() + step_x * T::from_index(i);
      let y = min.y_coord() + step_y * T::from_index(j);
      let center = Point::new([x + step_x * half, y + step_y * half]);
      if polygon.contains_even_odd(&center) {
        push_cell(&mut mesh, x, y, step_x, step_y);
      }
    }
  }
  mesh
}

// Corner layout (x,y), (x+sx,y), (x,y+sy), (x+sx,y+sy); split along the
// cell diagonal.
fn push_cell<T: PolygonScalar>(mesh: &mut Mesh<T>, x: T, y: T, step_x: T, step_y: T) {
  let base = mesh.vertices.len();
  let z = T::zero();
  mesh.vertices.push(Point::new([x, y, z]));
  mesh.vertices.push(Point::new([x + step_x, y, z]));
  mesh.vertices.push(Point::new([x, y + step_y, z]));
  mesh.vertices.push(Point::new([x + step_x, y + step_y, z]));
  mesh.triangles.push([base, base + 1, base + 2]);
  mesh.triangles.push([base + 1, base + 3, base + 2]);
}

#[cfg(test)]
mod tests {
  use super::*;

  fn bowtie() -> Polygon<f64> {
    Polygon::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([4.0, 4.0]),
      Point::new([4.0, 0.0]),
      Point::new([0.0, 4.0]),
    ])
  }

  #[test]
  fn resolution_formula() {
    assert_eq!(grid_resolution(4), 20); // sqrt(4)*8 = 16, clamped up
    assert_eq!(grid_resolution(16), 32);
    assert_eq!(grid_resolution(64), 64);
    assert_eq!(grid_resolution(1000), 80); // clamped down
  }

  #[test]
  fn bowtie_fill_is_bounded() {
    let mesh = triangulate_grid(&bowtie());
    let g = grid_resolution(4);
    assert!(mesh.triangle_count() > 0);
    assert!(mesh.triangle_count() <= 2 * g * g);
    assert_eq!(mesh.triangle_count() % 2, 0);
    assert_eq!(mesh.vertices.len(), mesh.triangle_count() * 2);
    assert_eq!(mesh.validate(), Ok(()));
  }

  #[test]
  fn vertices_stay_inside_bounding_box() {
    let mesh = triangulate_grid(&bowtie());
    for v in &mesh.vertices {
      assert!(v.array[0] >= -1e-9 && v.array[0] <= 4.0 + 1e-9);
      assert!(v.array[1] >= -1e-9 && v.array[1] <= 4.0 + 1e-9);
      assert_eq!(v.array[2], 0.0);
    }
  }

  #[test]
  fn interior_cells_grow_with_resolution() {
    let poly = bowtie();
    let coarse = triangulate_grid_with_resolution(&poly, 20).triangle_count();
    let medium = triangulate_grid_with_resolution(&poly, 40).triangle_count();
    let fine = triangulate_grid_with_resolution(&poly, 80).triangle_count();
    assert!(coarse > 0);
    assert!(coarse <= medium);
    assert!(medium <= fine);
  }

  #[test]
  fn degenerate_polygon_yields_empty_mesh() {
    let line = Polygon::new_unchecked(vec![
      Point::new([0.0, 0.0]),
      Point::new([2.0, 0.0]),
      Point::new([4.0, 0.0]),
    ]);
    let mesh = triangulate_grid(&line);
    assert_eq!(mesh.triangle_count(), 0);
    assert!(mesh.vertices.is_empty());
  }
}
