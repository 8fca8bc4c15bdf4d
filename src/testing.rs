// Strategies and invariant checks shared by the unit tests.
use crate::data::{locate, Point, PointLocation};
use crate::{Coordinate, Orientation};

use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::collections::BTreeSet;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

impl<T> Arbitrary for Point<T>
where
  T: Arbitrary,
{
  type Strategy = Mapped<[T; 2], Point<T>>;
  type Parameters = <[T; 2] as Arbitrary>::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<[T; 2]>(params).prop_map(Point::new as fn(_) -> _)
  }
}

/// Points on a tiny grid. Colinear triples and duplicates are common.
pub fn small_point() -> impl Strategy<Value = Point<i32>> {
  [-8..=8, -8..=8].prop_map(Point::new)
}

pub fn small_points(size: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  vec(small_point(), size)
}

/// Points along a single line through the origin.
pub fn colinear_points(size: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  ([-3..=3, -3..=3], vec(-20..=20, size)).prop_map(|([dx, dy], steps)| {
    steps
      .into_iter()
      .map(|k: i32| Point::new([k * dx, k * dy]))
      .collect()
  })
}

pub fn vertex_set<T: Coordinate>(pts: &[Point<T>]) -> BTreeSet<Point<T>> {
  pts.iter().copied().collect()
}

/// Every adjacent triple turns the same way, strictly.
pub fn turns<T: Coordinate>(hull: &[Point<T>]) -> BTreeSet<Orientation> {
  let n = hull.len();
  (0..n)
    .map(|i| hull[i].orientation(&hull[(i + 1) % n], &hull[(i + 2) % n]))
    .collect()
}

pub fn contains_all<T: Coordinate>(hull: &[Point<T>], pts: &[Point<T>]) -> bool {
  pts
    .iter()
    .all(|pt| locate(hull, pt) != PointLocation::Outside)
}
