mod directed_edge;
mod mesh;
pub(crate) mod point;
pub mod polygon;
mod triangle;
mod vector;

pub use directed_edge::*;
pub use mesh::*;
pub use triangle::*;

#[doc(inline)]
pub use crate::data::polygon::Polygon;
pub use point::Point;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
