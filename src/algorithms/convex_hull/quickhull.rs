use num_traits::Signed;
use std::cmp::Reverse;

use crate::data::Point;
use crate::predicates::{perpendicular_distance, signed_area2};
use crate::Coordinate;

// https://en.wikipedia.org/wiki/Quickhull

// Properties:
//    No panics.
//    Output is clockwise, starting at the smallest point.
//    No points are outside the resulting convex polygon.
/// $O(n \log n)$ expected, $O(n^2)$ worst case. Convex hull of a set of points.
///
/// [QuickHull][wiki] splits the set along the line between its smallest and
/// largest point and, on each side, repeatedly picks the point farthest from
/// the current edge. That point is always a hull vertex and splits the edge
/// in two.
///
/// Sets with fewer than three points are returned unchanged.
///
/// # Properties
/// * No points from the input set will be outside the returned polygon.
/// * All vertices in the returned polygon are from the input set.
/// * The output is the smallest point, the upper chain, the largest point and
///   the lower chain. This is clockwise order. The first vertex is not
///   repeated at the end.
/// * Colinear boundary points and duplicates are skipped. A colinear set
///   yields its two extreme points, a set of identical points yields one.
///
/// Subproblems are kept on an explicit stack, deep splits cannot overflow the
/// call stack.
///
/// # Examples
///
/// ```rust
/// # use hull2d::algorithms::convex_hull::quickhull::convex_hull;
/// # use hull2d::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
///   Point::new([2, 2]),
/// ];
/// assert_eq!(
///   convex_hull(&pts),
///   vec![
///     Point::new([0, 0]),
///     Point::new([0, 4]),
///     Point::new([4, 4]),
///     Point::new([4, 0]),
///   ]
/// );
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Quickhull
pub fn convex_hull<T>(pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: Coordinate,
{
  if pts.len() < 3 {
    return pts.to_vec();
  }
  let (min, max) = match (pts.iter().min(), pts.iter().max()) {
    (Some(min), Some(max)) => (*min, *max),
    _ => return Vec::new(),
  };
  if min == max {
    return vec![min];
  }
  let upper = left_of(&min, &max, pts);
  let lower = left_of(&max, &min, pts);

  let mut hull = Vec::new();
  hull.push(min);
  expand(&mut hull, min, max, upper);
  hull.push(max);
  expand(&mut hull, max, min, lower);
  hull
}

enum Task<T> {
  // Hull vertices strictly left of the edge, all of which are candidates.
  Edge(Point<T>, Point<T>, Vec<Point<T>>),
  Vertex(Point<T>),
}

// Append the hull vertices strictly left of `from -> to`, ordered from `from`
// towards `to`. Neither endpoint is appended.
fn expand<T>(hull: &mut Vec<Point<T>>, from: Point<T>, to: Point<T>, candidates: Vec<Point<T>>)
where
  T: Coordinate,
{
  let mut stack = vec![Task::Edge(from, to, candidates)];
  while let Some(task) = stack.pop() {
    match task {
      Task::Vertex(pt) => hull.push(pt),
      Task::Edge(a, b, candidates) => {
        let far = match farthest(&a, &b, &candidates) {
          Some(far) => far,
          None => continue,
        };
        let before = left_of(&a, &far, &candidates);
        let after = left_of(&far, &b, &candidates);
        // Last in, first out.
        stack.push(Task::Edge(far, b, after));
        stack.push(Task::Vertex(far));
        stack.push(Task::Edge(a, far, before));
      }
    }
  }
}

// The point farthest from the line through `a` and `b`. Points tied for
// farthest lie on a parallel line; the one closest to `a` along `a -> b` is
// picked so that it is an end of that run and the rest become colinear with
// the next edge.
fn farthest<T>(a: &Point<T>, b: &Point<T>, candidates: &[Point<T>]) -> Option<Point<T>>
where
  T: Coordinate,
{
  let (first, rest) = candidates.split_first()?;
  let mut best = first;
  let mut best_key = (perpendicular_distance(a, b, first), Reverse(along(a, b, first)));
  for pt in rest {
    let key = (perpendicular_distance(a, b, pt), Reverse(along(a, b, pt)));
    if key > best_key {
      best = pt;
      best_key = key;
    }
  }
  Some(*best)
}

// (b - a) · (p - a), the position of `p` along `a -> b` scaled by |b - a|.
fn along<T: Coordinate>(a: &Point<T>, b: &Point<T>, p: &Point<T>) -> T::Wide {
  let [ax, ay] = [a.array[0].widen(), a.array[1].widen()];
  let dx = b.array[0].widen() - ax.clone();
  let dy = b.array[1].widen() - ay.clone();
  dx * (p.array[0].widen() - ax) + dy * (p.array[1].widen() - ay)
}

fn left_of<T>(a: &Point<T>, b: &Point<T>, pts: &[Point<T>]) -> Vec<Point<T>>
where
  T: Coordinate,
{
  pts
    .iter()
    .filter(|pt| signed_area2(a, b, *pt).is_positive())
    .copied()
    .collect()
}
