//! Loading point lists from the `(x, y)` text format.
//!
//! One point per line, parenthesized, comma-separated, locale-invariant
//! floats. Blank lines are skipped and malformed lines are dropped with a
//! warning; a bad line never fails the whole load.

use std::fs;
use std::path::Path;

use crate::data::Point;
use crate::PolygonScalar;

/// Parse a point list from text. Extra components after the second are
/// ignored; the z-coordinate is always zero.
pub fn parse_points<T: PolygonScalar>(input: &str) -> Vec<Point<T, 3>> {
  let mut points = Vec::new();
  for (lineno, line) in input.lines().enumerate() {
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }
    match parse_line(trimmed) {
      Some(point) => points.push(point),
      None => log::warn!("skipping malformed point on line {}: {:?}", lineno + 1, trimmed),
    }
  }
  points
}

/// Read and parse a point-list file. Only filesystem errors surface;
/// parse failures are handled line by line as in [`parse_points`].
pub fn load_points<T: PolygonScalar>(path: impl AsRef<Path>) -> std::io::Result<Vec<Point<T, 3>>> {
  Ok(parse_points(&fs::read_to_string(path)?))
}

fn parse_line<T: PolygonScalar>(line: &str) -> Option<Point<T, 3>> {
  let inner = line.strip_prefix('(')?.strip_suffix(')')?;
  let mut parts = inner.split(',');
  let x = parts.next()?.trim().parse::<f64>().ok()?;
  let y = parts.next()?.trim().parse::<f64>().ok()?;
  Some(Point::new([
    T::from_constant(x),
    T::from_constant(y),
    T::zero(),
  ]))
}
