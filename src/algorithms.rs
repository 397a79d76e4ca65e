pub mod intersection;
pub mod triangulation;
