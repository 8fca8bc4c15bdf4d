#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Exact convex hulls of integer point sets.
//!
//! Three interchangeable algorithms share one set of predicates and one
//! output contract:
//!
//! * [Gift wrapping](algorithms::convex_hull::gift_wrapping) (Jarvis march), $O(n h)$.
//! * [QuickHull](algorithms::convex_hull::quickhull), $O(n \log n)$ expected.
//! * [Graham scan](algorithms::convex_hull::graham_scan), $O(n \log n)$.
//!
//! ```rust
//! # use hull2d::{hull_of, Algorithm};
//! # use hull2d::data::Point;
//! let pts: Vec<Point<i32>> = vec![
//!   Point::new([0, 0]),
//!   Point::new([4, 0]),
//!   Point::new([4, 4]),
//!   Point::new([0, 4]),
//!   Point::new([2, 2]),
//! ];
//! let hull = hull_of(&pts, Algorithm::GrahamScan);
//! assert_eq!(hull.len(), 4);
//! ```
use num_traits::{AsPrimitive, NumCast, Signed};
use std::fmt::Debug;
use std::hash::Hash;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod predicates;

pub use algorithms::convex_hull::{hull_of, hull_of_coords, Algorithm};
pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The point at `index` cannot be represented exactly.
  InvalidInput {
    index: usize,
    violation: InputViolation,
  },
  UnknownAlgorithm,
  DuplicatePoints,
  /// Two consecutive edges are either colinear or turn against the winding.
  ConvexViolation,
}

/// Which precondition an input coordinate broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputViolation {
  NonFinite,
  NonIntegral,
  OutOfRange,
}

impl std::fmt::Display for InputViolation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      InputViolation::NonFinite => write!(f, "coordinate is NaN or infinite"),
      InputViolation::NonIntegral => write!(f, "coordinate is not an integer"),
      InputViolation::OutOfRange => write!(f, "coordinate does not fit the coordinate type"),
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidInput { index, violation } => {
        write!(f, "Invalid input at point {}: {}", index, violation)
      }
      Error::UnknownAlgorithm => write!(
        f,
        "Unknown algorithm, expected one of jarvis-march, quick-hull, graham-scan"
      ),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

impl std::error::Error for InputViolation {}

/// Integer coordinate types.
///
/// Every coordinate type names a wider type in which differences, cross
/// products and squared distances of its values are exact. Predicates never
/// overflow, whatever the input.
pub trait Coordinate:
  Copy + Ord + Hash + Debug + NumCast + AsPrimitive<f64> + Send + Sync
{
  type Wide: Clone + Ord + Signed + Debug + From<Self>;

  fn widen(self) -> Self::Wide {
    Self::Wide::from(self)
  }
}

macro_rules! fixed_precision {
  ( $( $ty:ty => $wide:ty ),* ) => {
    $(
      impl Coordinate for $ty {
        type Wide = $wide;
      }
    )*
  };
}

// Differences need one extra bit, products of differences twice that plus one.
fixed_precision!(
  i8 => i32,
  i16 => i64,
  i32 => i128,
  i64 => num_bigint::BigInt
);

#[cfg(test)]
pub mod testing;
