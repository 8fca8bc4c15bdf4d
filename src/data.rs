pub mod hull;
pub(crate) mod point;

pub use hull::{locate, validate};
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
