mod convex_hull {
  use hull2d::algorithms::convex_hull::gift_wrapping;
  use hull2d::data::*;
  use hull2d::*;

  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};
  use std::collections::BTreeSet;

  fn pts(coords: &[[i32; 2]]) -> Vec<Point<i32>> {
    coords.iter().copied().map(Point::new).collect()
  }

  fn set(pts: &[Point<i32>]) -> BTreeSet<Point<i32>> {
    pts.iter().copied().collect()
  }

  #[test]
  fn square_plus_interior() -> Result<(), Error> {
    let input = pts(&[[0, 0], [4, 0], [4, 4], [0, 4], [2, 2]]);
    for algorithm in Algorithm::ALL {
      let hull = hull_of(&input, algorithm);
      assert_eq!(set(&hull), set(&pts(&[[0, 0], [4, 0], [4, 4], [0, 4]])));
      assert_eq!(validate(&hull)?, Some(algorithm.winding()));
      assert_eq!(hull[0], Point::new([0, 0]));
    }
    Ok(())
  }

  #[test]
  fn closure_is_implicit() {
    let input = pts(&[[0, 0], [4, 0], [4, 4], [0, 4]]);
    for algorithm in Algorithm::ALL {
      let hull = hull_of(&input, algorithm);
      assert_eq!(hull.len(), 4);
      assert_ne!(hull.first(), hull.last());
    }
  }

  #[test]
  fn colinear() {
    let input = pts(&[[0, 0], [1, 1], [2, 2], [3, 3]]);
    for algorithm in Algorithm::ALL {
      assert_eq!(hull_of(&input, algorithm), pts(&[[0, 0], [3, 3]]));
    }
  }

  #[test]
  fn duplicates() -> Result<(), Error> {
    let input = pts(&[[0, 0], [0, 0], [5, 0], [5, 5], [0, 5]]);
    for algorithm in Algorithm::ALL {
      let hull = hull_of(&input, algorithm);
      assert_eq!(set(&hull), set(&pts(&[[0, 0], [5, 0], [5, 5], [0, 5]])));
      validate(&hull)?;
    }
    Ok(())
  }

  #[test]
  fn trivial() {
    for input in [pts(&[]), pts(&[[1, 2]]), pts(&[[1, 2], [1, 2]])] {
      for algorithm in Algorithm::ALL {
        assert_eq!(hull_of(&input, algorithm), input);
      }
    }
  }

  #[test]
  fn random_canvas() -> Result<(), Error> {
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..20 {
      let input: Vec<Point<i32>> = (0..50)
        .map(|_| Point::new([rng.gen_range(0..1800), rng.gen_range(0..900)]))
        .collect();
      let expected = set(&hull_of(&input, Algorithm::GrahamScan));
      for algorithm in Algorithm::ALL {
        let hull = hull_of(&input, algorithm);
        assert_eq!(set(&hull), expected);
        validate(&hull)?;
        for pt in input.iter() {
          assert_ne!(locate(&hull, pt), PointLocation::Outside);
        }
      }
      let seeded = gift_wrapping::convex_hull_with_rng(&input, &mut rng);
      assert_eq!(seeded, hull_of(&input, Algorithm::JarvisMarch));
    }
    Ok(())
  }

  #[test]
  fn untrusted_coordinates() {
    assert_eq!(
      hull_of_coords::<i64>(&[[0.0, 0.0], [3.0, 0.0], [0.0, f64::NEG_INFINITY]], Algorithm::QuickHull),
      Err(Error::InvalidInput {
        index: 2,
        violation: InputViolation::NonFinite
      })
    );
    let hull = hull_of_coords::<i64>(&[[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]], Algorithm::QuickHull);
    assert_eq!(
      hull,
      Ok(vec![Point::new([0, 0]), Point::new([0, 3]), Point::new([3, 0])])
    );
  }
}
