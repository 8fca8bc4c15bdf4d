use crate::data::Point;
use crate::predicates::cmp_around;
use crate::Coordinate;

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    Output is counter-clockwise, starting at the smallest point.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points.
///
/// Sets with fewer than three points are returned unchanged.
///
/// # Properties
/// * No points from the input set will be outside the returned polygon.
/// * All vertices in the returned polygon are from the input set.
/// * The first vertex is the lexicographically smallest input point and the
///   vertices follow in counter-clockwise order. The first vertex is not
///   repeated at the end.
/// * No three consecutive vertices are colinear: points on the boundary
///   between two vertices are dropped, and so are duplicates. A colinear set
///   yields its two extreme points, a set of identical points yields one.
///
/// # Examples
///
/// ```rust
/// # use hull2d::algorithms::convex_hull::graham_scan::convex_hull;
/// # use hull2d::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([0, 0]),
///   Point::new([5, 0]),
///   Point::new([5, 5]),
///   Point::new([0, 5]),
/// ];
/// assert_eq!(
///   convex_hull(&pts),
///   vec![
///     Point::new([0, 0]),
///     Point::new([5, 0]),
///     Point::new([5, 5]),
///     Point::new([0, 5]),
///   ]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: Coordinate,
{
  if pts.len() < 3 {
    return pts.to_vec();
  }
  let pivot = match pts.iter().min() {
    Some(pivot) => *pivot,
    None => return Vec::new(),
  };

  let mut hull = vec![pivot];
  for pt in sort_around(&pivot, pts) {
    // Pop until the stack turns strictly counter-clockwise towards `pt`.
    while let [.., p1, p2] = hull.as_slice() {
      if p1.orientation(p2, &pt).is_ccw() {
        break;
      }
      hull.pop();
    }
    hull.push(pt);
  }
  hull
}

// All points except copies of the pivot, by angle around the pivot and
// nearest first. The pivot is the smallest point so every angle is in
// (-pi/2, pi/2].
// O(n log n)
fn sort_around<T>(pivot: &Point<T>, pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: Coordinate,
{
  let mut sorted: Vec<Point<T>> = pts.iter().filter(|pt| *pt != pivot).copied().collect();
  sorted.sort_by(|a, b| cmp_around(pivot, a, b));
  sorted
}
