//! Exact geometric predicates shared by every hull algorithm.
//!
//! All turn and distance decisions are computed in [`Coordinate::Wide`] and
//! are therefore exact. Only [`polar_angle`] uses floating point.
use num_traits::{AsPrimitive, Signed};
use std::cmp::Ordering;

use crate::data::Point;
use crate::{Coordinate, Orientation};

fn widen<T: Coordinate>(p: &Point<T>) -> [T::Wide; 2] {
  [p.array[0].widen(), p.array[1].widen()]
}

/// Turn direction of the walk `p -> q -> r`.
///
/// Same as [`Orientation::new`].
pub fn orientation<T: Coordinate>(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation {
  Orientation::new(p, q, r)
}

/// Twice the signed area of the triangle `(o, a, b)`: `(a-o) × (b-o)`.
///
/// Positive iff `b` lies to the left of the directed line `o -> a`.
///
/// ```rust
/// # use hull2d::data::Point;
/// # use hull2d::predicates::signed_area2;
/// let o = Point::new([0, 0]);
/// assert_eq!(signed_area2(&o, &Point::new([4, 0]), &Point::new([0, 3])), 12i128);
/// assert_eq!(signed_area2(&o, &Point::new([0, 3]), &Point::new([4, 0])), -12i128);
/// ```
pub fn signed_area2<T: Coordinate>(o: &Point<T>, a: &Point<T>, b: &Point<T>) -> T::Wide {
  let [ox, oy] = widen(o);
  let [ax, ay] = widen(a);
  let [bx, by] = widen(b);
  (ax - ox.clone()) * (by - oy.clone()) - (ay - oy) * (bx - ox)
}

/// $|(p_2 - p_1) \times (p_1 - p)|$, the distance from `p` to the line through
/// `p1` and `p2` scaled by the length of `p2 - p1`.
///
/// Only meaningful when comparing points against the same line.
pub fn perpendicular_distance<T: Coordinate>(p1: &Point<T>, p2: &Point<T>, p: &Point<T>) -> T::Wide {
  let [x1, y1] = widen(p1);
  let [x2, y2] = widen(p2);
  let [x, y] = widen(p);
  ((x2 - x1.clone()) * (y1.clone() - y) - (x1 - x) * (y2 - y1)).abs()
}

/// Angle of the vector `pivot -> p` in radians, as returned by `atan2`.
pub fn polar_angle<T: Coordinate>(pivot: &Point<T>, p: &Point<T>) -> f64 {
  let dx = AsPrimitive::<f64>::as_(p.array[0]) - AsPrimitive::<f64>::as_(pivot.array[0]);
  let dy = AsPrimitive::<f64>::as_(p.array[1]) - AsPrimitive::<f64>::as_(pivot.array[1]);
  dy.atan2(dx)
}

/// Squared euclidean distance between `p` and `q`.
pub fn distance_sq<T: Coordinate>(p: &Point<T>, q: &Point<T>) -> T::Wide {
  let [px, py] = widen(p);
  let [qx, qy] = widen(q);
  let dx = px - qx;
  let dy = py - qy;
  dx.clone() * dx + dy.clone() * dy
}

/// Order `a` and `b` by their angle around `pivot`, nearest first on ties.
///
/// `pivot` must be lexicographically smaller than both `a` and `b`. All such
/// points lie in a half plane of angles $(-\pi/2, \pi/2]$ around the pivot,
/// where comparing angles reduces to an exact cross product. The result
/// agrees with sorting by [`polar_angle`] and then [`distance_sq`].
pub fn cmp_around<T: Coordinate>(pivot: &Point<T>, a: &Point<T>, b: &Point<T>) -> Ordering {
  debug_assert!(pivot < a && pivot < b);
  Orientation::new(pivot, a, b)
    .ccw_ordering()
    .then_with(|| pivot.cmp_distance_to(a, b))
}
