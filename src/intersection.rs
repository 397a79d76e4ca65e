/// Seam for pairwise intersection queries.
///
/// `Result` carries whatever the intersection produces (for polygon edges:
/// the crossing point); `None` means the two values don't intersect.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
