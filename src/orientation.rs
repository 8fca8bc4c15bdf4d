use std::cmp::Ordering;

use crate::data::Point;
use crate::predicates::signed_area2;
use crate::Coordinate;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The turn is decided by the sign of `(p2-p1) × (p3-p2)`, computed in the
  /// coordinate type's wide representation. It never overflows.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hull2d::data::Point;
  /// # use hull2d::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation
  where
    T: Coordinate,
  {
    // (p2-p1) × (p3-p2) == (p2-p1) × (p3-p1)
    Orientation::from_sign(&signed_area2(p1, p2, p3))
  }

  pub(crate) fn from_sign<W: num_traits::Signed>(value: &W) -> Orientation {
    if value.is_positive() {
      CounterClockWise
    } else if value.is_negative() {
      ClockWise
    } else {
      CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }

  /// Counter-clockwise sorts first.
  pub fn ccw_ordering(self) -> Ordering {
    match self {
      CounterClockWise => Ordering::Less,
      ClockWise => Ordering::Greater,
      CoLinear => Ordering::Equal,
    }
  }
}
