// Strategies for generating shrinkable geometric values.
use proptest::collection::vec;
use proptest::prelude::*;

use crate::data::{Point, Polygon};

/// Star-shaped polygons around the origin: evenly spaced angles with
/// random spoke lengths. Every angular gap is below half a turn, so the
/// origin is interior and the ring is simple by construction, which is
/// what the ear-clipping properties need.
pub fn star_polygon() -> impl Strategy<Value = Polygon<f64>> {
  vec(1.0f64..100.0, 3..32).prop_map(|radii| {
    let n = radii.len();
    let points = radii
      .into_iter()
      .enumerate()
      .map(|(i, radius)| {
        let theta = (i as f64) / (n as f64) * std::f64::consts::TAU;
        Point::new([radius * theta.cos(), radius * theta.sin()])
      })
      .collect();
    Polygon::new_unchecked(points)
  })
}
