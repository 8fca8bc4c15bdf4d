use std::fmt;
use std::str::FromStr;

use claims::debug_assert_ok;

use crate::data::{validate, Point};
use crate::{Coordinate, Error, Orientation};

pub mod gift_wrapping;
pub mod graham_scan;
pub mod quickhull;

/// The available hull constructions. All of them return the same set of
/// vertices for the same input; they differ in cost and in winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// [Gift wrapping](gift_wrapping::convex_hull), $O(n h)$.
  JarvisMarch,
  /// [QuickHull](quickhull::convex_hull), $O(n \log n)$ expected.
  QuickHull,
  /// [Graham scan](graham_scan::convex_hull), $O(n \log n)$.
  GrahamScan,
}

impl Algorithm {
  pub const ALL: [Algorithm; 3] = [
    Algorithm::JarvisMarch,
    Algorithm::QuickHull,
    Algorithm::GrahamScan,
  ];

  /// The direction in which hulls of three or more vertices are traced.
  pub fn winding(self) -> Orientation {
    match self {
      Algorithm::JarvisMarch | Algorithm::QuickHull => Orientation::ClockWise,
      Algorithm::GrahamScan => Orientation::CounterClockWise,
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Algorithm::JarvisMarch => "jarvis-march",
      Algorithm::QuickHull => "quick-hull",
      Algorithm::GrahamScan => "graham-scan",
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = Error;
  fn from_str(s: &str) -> Result<Algorithm, Error> {
    Algorithm::ALL
      .into_iter()
      .find(|algorithm| algorithm.name() == s)
      .ok_or(Error::UnknownAlgorithm)
  }
}

/// Convex hull of `points` using the selected algorithm.
///
/// Sets with fewer than three points are returned unchanged. Otherwise the
/// result starts at the lexicographically smallest point, is traced in
/// [`Algorithm::winding`] order, holds no duplicates and no colinear
/// boundary points, and does not repeat its first vertex at the end.
///
/// ```rust
/// # use hull2d::{hull_of, Algorithm};
/// # use hull2d::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([1, 1]),
///   Point::new([2, 2]),
///   Point::new([3, 3]),
/// ];
/// for algorithm in Algorithm::ALL {
///   assert_eq!(hull_of(&pts, algorithm), vec![Point::new([0, 0]), Point::new([3, 3])]);
/// }
/// ```
pub fn hull_of<T>(points: &[Point<T>], algorithm: Algorithm) -> Vec<Point<T>>
where
  T: Coordinate,
{
  let _span = tracing::debug_span!("hull_of", %algorithm, n = points.len()).entered();
  let hull = match algorithm {
    Algorithm::JarvisMarch => gift_wrapping::convex_hull(points),
    Algorithm::QuickHull => quickhull::convex_hull(points),
    Algorithm::GrahamScan => graham_scan::convex_hull(points),
  };
  if points.len() >= 3 {
    debug_assert_ok!(validate(&hull));
  }
  tracing::trace!(h = hull.len(), "hull computed");
  hull
}

/// Convex hull of untrusted floating point coordinates.
///
/// # Errors
/// Fails with [`Error::InvalidInput`] naming the first point whose coordinates
/// are not finite, not integral, or out of range for `T`. No hull is
/// computed in that case.
///
/// ```rust
/// # use hull2d::{hull_of_coords, Algorithm, Error, InputViolation};
/// # use hull2d::data::Point;
/// let hull = hull_of_coords::<i32>(&[[0.0, 0.0], [2.0, 0.0], [0.0, 2.0]], Algorithm::QuickHull);
/// assert_eq!(hull.map(|hull| hull.len()), Ok(3));
///
/// let err = hull_of_coords::<i32>(&[[0.0, 0.0], [f64::NAN, 1.0]], Algorithm::QuickHull);
/// assert_eq!(
///   err,
///   Err(Error::InvalidInput { index: 1, violation: InputViolation::NonFinite })
/// );
/// ```
pub fn hull_of_coords<T>(coords: &[[f64; 2]], algorithm: Algorithm) -> Result<Vec<Point<T>>, Error>
where
  T: Coordinate,
{
  let points = coords
    .iter()
    .enumerate()
    .map(|(index, xy)| {
      Point::try_from_f64(*xy).map_err(|violation| Error::InvalidInput { index, violation })
    })
    .collect::<Result<Vec<Point<T>>, Error>>()?;
  Ok(hull_of(&points, algorithm))
}
