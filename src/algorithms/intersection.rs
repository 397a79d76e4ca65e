use crate::data::Polygon;
use crate::PolygonScalar;

/// Does any pair of non-adjacent edges properly intersect?
///
/// Checks every pair `(i, i+1)`/`(j, j+1)` with `j >= i + 2`, skipping the
/// pair that is adjacent through wraparound. Short-circuits on the first
/// hit. Touching and collinear overlaps are not proper intersections and go
/// undetected, a known limitation inherited from the strict-sign predicate.
///
/// This is the branch point of the fill pipeline: simple polygons are ear
/// clipped, self-intersecting ones fall back to grid sampling.
///
/// # Time complexity
/// $O(n^2)$
pub fn has_self_intersections<T: PolygonScalar>(polygon: &Polygon<T>) -> bool {
  let n = polygon.len();
  for i in 0..n {
    for j in i + 2..n {
      // Edges n-1 and 0 share the wraparound vertex.
      if i == 0 && j == n - 1 {
        continue;
      }
      if polygon.edge(i).properly_intersects(&polygon.edge(j)) {
        return true;
      }
    }
  }
  false
}
