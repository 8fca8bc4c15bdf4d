use num_traits::Zero;
use std::collections::BTreeSet;

use super::{Point, PointLocation};
use crate::predicates::signed_area2;
use crate::{Coordinate, Error, Orientation};

/// $O(n)$ Locate `pt` relative to the polygon traced by `hull`.
///
/// `hull` must be convex, in either winding. Hulls with fewer than three
/// vertices, or with no area, are treated as the segments connecting them.
///
/// ```rust
/// # use hull2d::data::{locate, Point, PointLocation};
/// let square = [
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
/// ];
/// assert_eq!(locate(&square, &Point::new([2, 2])), PointLocation::Inside);
/// assert_eq!(locate(&square, &Point::new([4, 2])), PointLocation::OnBoundary);
/// assert_eq!(locate(&square, &Point::new([5, 2])), PointLocation::Outside);
/// ```
pub fn locate<T: Coordinate>(hull: &[Point<T>], pt: &Point<T>) -> PointLocation {
  let n = hull.len();
  let winding = match hull {
    [] => return PointLocation::Outside,
    [a] if a == pt => return PointLocation::OnBoundary,
    [_] => return PointLocation::Outside,
    _ => Orientation::from_sign(&twice_area(hull)),
  };
  if winding.is_colinear() {
    let on_chain = (0..n - 1).any(|i| on_segment(&hull[i], &hull[i + 1], pt));
    return if on_chain {
      PointLocation::OnBoundary
    } else {
      PointLocation::Outside
    };
  }
  let mut boundary = false;
  for i in 0..n {
    let turn = hull[i].orientation(&hull[(i + 1) % n], pt);
    if turn == winding.reverse() {
      return PointLocation::Outside;
    }
    boundary |= turn.is_colinear();
  }
  if boundary {
    PointLocation::OnBoundary
  } else {
    PointLocation::Inside
  }
}

/// $O(n \log n)$ Check that `hull` is a strictly convex, simple polygon
/// without repeated vertices and return its winding.
///
/// Hulls with fewer than three vertices have no winding and validate as
/// `Ok(None)` as long as they hold no duplicates.
///
/// # Errors
/// * [`Error::DuplicatePoints`] if a vertex appears twice.
/// * [`Error::ConvexViolation`] if three consecutive vertices are colinear,
///   turn against the others, or the boundary winds around more than once.
pub fn validate<T: Coordinate>(hull: &[Point<T>]) -> Result<Option<Orientation>, Error> {
  let unique: BTreeSet<&Point<T>> = hull.iter().collect();
  if unique.len() != hull.len() {
    return Err(Error::DuplicatePoints);
  }
  let n = hull.len();
  if n < 3 {
    return Ok(None);
  }
  let winding = hull[0].orientation(&hull[1], &hull[2]);
  if winding.is_colinear() {
    return Err(Error::ConvexViolation);
  }
  for i in 0..n {
    if hull[i].orientation(&hull[(i + 1) % n], &hull[(i + 2) % n]) != winding {
      return Err(Error::ConvexViolation);
    }
  }
  // Locally convex polygons may still circle the first vertex several times.
  for i in 1..n - 1 {
    if hull[0].orientation(&hull[i], &hull[i + 1]) != winding {
      return Err(Error::ConvexViolation);
    }
  }
  Ok(Some(winding))
}

// Twice the signed area of the polygon, fanned out from its first vertex.
fn twice_area<T: Coordinate>(hull: &[Point<T>]) -> T::Wide {
  (1..hull.len() - 1)
    .map(|i| signed_area2(&hull[0], &hull[i], &hull[i + 1]))
    .fold(T::Wide::zero(), |acc, area| acc + area)
}

// Colinear points are ordered along their line by the lexicographic order.
fn on_segment<T: Coordinate>(a: &Point<T>, b: &Point<T>, pt: &Point<T>) -> bool {
  a.orientation(b, pt).is_colinear() && a.min(b) <= pt && pt <= a.max(b)
}
