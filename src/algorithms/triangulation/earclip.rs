use crate::data::{PointLocation, Polygon, TriangleView};
use crate::{Orientation, PolygonScalar};

/// Ear-clipping triangulation of a simple polygon.
///
/// Precondition: the polygon has no proper self-intersections; this is not
/// re-validated here.
///
/// The winding is normalized first: a clockwise ring (negative shoelace
/// area) has its working index order reversed, so the convexity test below
/// can always assume counter-clockwise order. The ring is then scanned in
/// order; the first ear found is emitted as `(prev, curr, next)`, `curr` is
/// unlinked, and the scan restarts from the head of the shorter ring. A
/// simple polygon always yields `n - 2` triangles.
///
/// If a full scan finds no ear the loop stops and the triangles emitted so
/// far are returned. That only happens for degenerate geometry (collinear
/// or duplicate points); the caller gets a partial fill instead of a hang.
pub fn triangulate_simple<T: PolygonScalar>(polygon: &Polygon<T>) -> Vec<[usize; 3]> {
  let n = polygon.len();
  if n < 3 {
    return Vec::new();
  }
  let mut order: Vec<usize> = (0..n).collect();
  if polygon.signed_area() < T::zero() {
    order.reverse();
  }

  let mut ring = Ring::new(n);
  let mut head = 0;
  let mut remaining = n;
  let mut triangles = Vec::with_capacity(n - 2);
  'clip: while remaining > 3 {
    let mut focus = head;
    for _ in 0..remaining {
      let prev = ring.prev(focus);
      let next = ring.next(focus);
      if is_ear(polygon, &order, &ring, prev, focus, next) {
        triangles.push([order[prev], order[focus], order[next]]);
        if focus == head {
          head = next;
        }
        ring.delete(focus);
        remaining -= 1;
        continue 'clip;
      }
      focus = next;
    }
    // Full scan without an ear: degenerate input, return the partial fill.
    return triangles;
  }
  triangles.push([
    order[head],
    order[ring.next(head)],
    order[ring.prev(head)],
  ]);
  triangles
}

fn is_ear<T>(
  polygon: &Polygon<T>,
  order: &[usize],
  ring: &Ring,
  prev: usize,
  focus: usize,
  next: usize,
) -> bool
where
  T: PolygonScalar,
{
  let get_point = |key: usize| polygon.point(order[key]);
  let trig = TriangleView::new([get_point(prev), get_point(focus), get_point(next)]);
  if trig.orientation() != Orientation::CounterClockWise {
    return false;
  }
  // Boundary hits count as containment so an ear never swallows a
  // collinear neighbor.
  let mut probe = ring.next(next);
  while probe != prev {
    if trig.locate(get_point(probe)) != PointLocation::Outside {
      return false;
    }
    probe = ring.next(probe);
  }
  true
}

///////////////////////////////////////////////////////////////////////////////
// Doubly-linked ring over 0..size supporting O(1) unlinking.

struct Ring {
  prev: Vec<usize>,
  next: Vec<usize>,
}

impl Ring {
  fn new(size: usize) -> Ring {
    let mut prev = vec![0; size];
    let mut next = vec![0; size];
    for i in 0..size {
      prev[(i + 1) % size] = i;
      next[i] = (i + 1) % size;
    }
    Ring { prev, next }
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  // The deleted node keeps its links; callers must not revisit it.
  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
  }
}
