use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use loopfill::algorithms::intersection::has_self_intersections;
use loopfill::algorithms::triangulation::{triangulate_grid, triangulate_simple};
use loopfill::data::{Point, Polygon};

fn star(n: usize, rng: &mut SmallRng) -> Polygon<f64> {
  let points = (0..n)
    .map(|i| {
      let theta = (i as f64) / (n as f64) * std::f64::consts::TAU;
      let radius: f64 = rng.gen_range(1.0..10.0);
      Point::new([radius * theta.cos(), radius * theta.sin()])
    })
    .collect();
  Polygon::new_unchecked(points)
}

fn bowtie() -> Polygon<f64> {
  Polygon::new_unchecked(vec![
    Point::new([0.0, 0.0]),
    Point::new([4.0, 4.0]),
    Point::new([4.0, 0.0]),
    Point::new([0.0, 4.0]),
  ])
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let star64 = star(64, &mut rng);
  let star256 = star(256, &mut rng);

  c.bench_function("triangulate_simple(64)", |b| {
    b.iter(|| triangulate_simple(&star64))
  });
  c.bench_function("triangulate_simple(256)", |b| {
    b.iter(|| triangulate_simple(&star256))
  });
  c.bench_function("has_self_intersections(256)", |b| {
    b.iter(|| has_self_intersections(&star256))
  });
  c.bench_function("triangulate_grid(bowtie)", |b| {
    b.iter(|| triangulate_grid(&bowtie()))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
