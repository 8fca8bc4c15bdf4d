use rand::Rng;
use std::cmp::Ordering;

use crate::data::Point;
use crate::{Coordinate, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    Output is clockwise, starting at the smallest point.
//    No points are outside the resulting convex polygon.
/// $O(n h)$ Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] (Jarvis march) algorithm for finding the smallest
/// convex polygon which contains all the given points. `h` is the number of
/// vertices on the hull.
///
/// Sets with fewer than three points are returned unchanged.
///
/// # Properties
/// * No points from the input set will be outside the returned polygon.
/// * All vertices in the returned polygon are from the input set.
/// * The first vertex is the lexicographically smallest input point and the
///   vertices follow in clockwise order. The first vertex is not repeated at
///   the end.
/// * Colinear boundary points and duplicates are skipped. A colinear set
///   yields its two extreme points, a set of identical points yields one.
///
/// # Examples
///
/// ```rust
/// # use hull2d::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use hull2d::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([1, 1]),
///   Point::new([2, 2]),
///   Point::new([3, 3]),
/// ];
/// assert_eq!(convex_hull(&pts), vec![Point::new([0, 0]), Point::new([3, 3])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: Coordinate,
{
  wrap(pts, |_| 0)
}

/// Same as [`convex_hull`] but every scan for the next vertex starts at a
/// random position in `pts`.
///
/// The output does not depend on the random choices.
pub fn convex_hull_with_rng<T, R>(pts: &[Point<T>], rng: &mut R) -> Vec<Point<T>>
where
  T: Coordinate,
  R: Rng + ?Sized,
{
  wrap(pts, |n| rng.gen_range(0..n))
}

fn wrap<T, F>(pts: &[Point<T>], mut scan_offset: F) -> Vec<Point<T>>
where
  T: Coordinate,
  F: FnMut(usize) -> usize,
{
  let n = pts.len();
  if n < 3 {
    return pts.to_vec();
  }
  let start = match pts.iter().min() {
    Some(pt) => *pt,
    None => return Vec::new(),
  };

  let mut hull: Vec<Point<T>> = Vec::new();
  let mut p = start;
  loop {
    hull.push(p);
    debug_assert!(hull.len() <= n);
    match next_vertex(pts, scan_offset(n), &p) {
      Some(q) if q != start => p = q,
      _ => break,
    }
  }
  hull
}

// Find the point that no other point lies to the left of, as seen from `p`.
// Among colinear candidates the farthest wins so that boundary points are
// skipped. Returns None if every point equals `p`.
// O(n)
fn next_vertex<T>(pts: &[Point<T>], offset: usize, p: &Point<T>) -> Option<Point<T>>
where
  T: Coordinate,
{
  let n = pts.len();
  let mut candidate: Option<&Point<T>> = None;
  for i in 0..n {
    let r = &pts[(offset + i) % n];
    if r == p {
      continue;
    }
    candidate = match candidate {
      None => Some(r),
      Some(q) => match p.orientation(q, r) {
        Orientation::CounterClockWise => Some(r),
        Orientation::CoLinear if p.cmp_distance_to(r, q) == Ordering::Greater => Some(r),
        _ => Some(q),
      },
    };
  }
  candidate.copied()
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::data::{validate, PointLocation};
  use crate::testing::*;

  use claims::assert_ok_eq;
  use proptest::collection::*;
  use proptest::prelude::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn convex_hull_colinear() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 0]),
      Point::new([3, 0]),
      Point::new([4, 0]),
      Point::new([1, 1]),
    ];
    let hull = convex_hull(&points);
    assert_eq!(
      hull,
      vec![Point::new([0, 0]), Point::new([1, 1]), Point::new([4, 0])]
    );
    assert_ok_eq!(validate(&hull), Some(Orientation::ClockWise));
  }

  #[test]
  fn convex_hull_colinear_rev() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 9]),
      Point::new([0, 8]),
      Point::new([0, 7]),
      Point::new([0, 6]),
    ];
    let hull = convex_hull(&points);
    assert_eq!(
      hull,
      vec![Point::new([0, 0]), Point::new([0, 9]), Point::new([1, 0])]
    );
  }

  #[test]
  fn convex_hull_dups() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([0, 0]),
      Point::new([1, 0]),
      Point::new([2, 2]),
      Point::new([2, 2]),
      Point::new([5, 1]),
      Point::new([5, 1]),
    ];
    let hull = convex_hull(&points);
    assert_eq!(
      hull,
      vec![
        Point::new([0, 0]),
        Point::new([2, 2]),
        Point::new([5, 1]),
        Point::new([1, 0]),
      ]
    );
    assert_ok_eq!(validate(&hull), Some(Orientation::ClockWise));
  }

  #[test]
  fn convex_hull_only_dups() {
    let points = vec![
      Point::new([0, 0]),
      Point::new([0, 0]),
      Point::new([2, 2]),
      Point::new([2, 2]),
      Point::new([0, 0]),
      Point::new([2, 2]),
    ];
    assert_eq!(
      convex_hull(&points),
      vec![Point::new([0, 0]), Point::new([2, 2])]
    );
    assert_eq!(
      convex_hull(&[Point::new([7, 7]); 4]),
      vec![Point::new([7, 7])]
    );
  }

  #[test]
  fn convex_hull_start_not_first() {
    // The smallest point is a duplicate and not the first input point.
    let points = vec![
      Point::new([3, 3]),
      Point::new([0, 0]),
      Point::new([3, 0]),
      Point::new([0, 0]),
    ];
    assert_eq!(
      convex_hull(&points),
      vec![Point::new([0, 0]), Point::new([3, 3]), Point::new([3, 0])]
    );
  }

  #[test]
  fn unit_2() {
    let points: Vec<Point<i8>> = vec![
      Point::new([0, 0]),
      Point::new([0, -10]),
      Point::new([-13, 0]),
    ];
    let hull = convex_hull(&points);
    assert_eq!(hull[0], Point::new([-13, 0]));
    assert_ok_eq!(validate(&hull), Some(Orientation::ClockWise));
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(vec(any::<Point<i64>>(), 3..100))] pts: Vec<Point<i64>>) {
    let hull = convex_hull(&pts);
    // Prop #1: Results are valid.
    if hull.len() >= 3 {
      prop_assert_eq!(validate(&hull), Ok(Some(Orientation::ClockWise)));
    }
    // Prop #2: No points from the input set are outside the polygon.
    for pt in pts.iter() {
      prop_assert_ne!(crate::data::locate(&hull, pt), PointLocation::Outside)
    }
    // Prop #3: All vertices are in the input set.
    for pt in hull.iter() {
      prop_assert!(pts.contains(pt))
    }
  }

  #[proptest]
  fn convex_hull_prop_small(#[strategy(small_points(3..60))] pts: Vec<Point<i32>>) {
    let hull = convex_hull(&pts);
    prop_assert_eq!(hull[0], *pts.iter().min().unwrap());
    prop_assert!(validate(&hull).is_ok());
    prop_assert!(contains_all(&hull, &pts));
  }

  #[proptest]
  fn random_scan_start(#[strategy(small_points(0..60))] pts: Vec<Point<i32>>, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    prop_assert_eq!(convex_hull_with_rng(&pts, &mut rng), convex_hull(&pts));
  }
}
