use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;

use crate::predicates;
use crate::{Coordinate, InputViolation, Orientation};

/// A point in the plane with integer coordinates.
///
/// Points are ordered lexicographically: first by x, then by y. The smallest
/// point of a set is therefore the lowest of its leftmost points, which is
/// always a vertex of the set's convex hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T = i32> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: [rng.gen(), rng.gen()],
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }
}

impl<T: Coordinate> Point<T> {
  /// Convert floating point coordinates, refusing anything that would not
  /// round-trip exactly.
  ///
  /// ```rust
  /// # use hull2d::data::Point;
  /// # use hull2d::InputViolation;
  /// assert_eq!(Point::<i32>::try_from_f64([3.0, -4.0]), Ok(Point::new([3, -4])));
  /// assert_eq!(Point::<i32>::try_from_f64([f64::NAN, 0.0]), Err(InputViolation::NonFinite));
  /// assert_eq!(Point::<i32>::try_from_f64([0.5, 0.0]), Err(InputViolation::NonIntegral));
  /// assert_eq!(Point::<i8>::try_from_f64([0.0, 300.0]), Err(InputViolation::OutOfRange));
  /// ```
  pub fn try_from_f64(array: [f64; 2]) -> Result<Point<T>, InputViolation> {
    fn coordinate<T: Coordinate>(value: f64) -> Result<T, InputViolation> {
      if !value.is_finite() {
        return Err(InputViolation::NonFinite);
      }
      if value.fract() != 0.0 {
        return Err(InputViolation::NonIntegral);
      }
      <T as num_traits::NumCast>::from(value).ok_or(InputViolation::OutOfRange)
    }
    Ok(Point::new([coordinate(array[0])?, coordinate(array[1])?]))
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(self, q, r)
  }

  pub fn distance_sq(&self, rhs: &Point<T>) -> T::Wide {
    predicates::distance_sq(self, rhs)
  }

  /// Compare the distances from `self` to `p` and to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self.distance_sq(p).cmp(&self.distance_sq(q))
  }

  /// Angle of the vector `self -> p` in radians, in the range $[-\pi, \pi]$.
  pub fn polar_angle(&self, p: &Point<T>) -> f64 {
    predicates::polar_angle(self, p)
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0]), f(self.array[1])],
    }
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}
