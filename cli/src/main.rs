use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use hull2d::data::{locate, validate, Point, PointLocation};
use hull2d::{hull_of, hull_of_coords, Algorithm};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "hull2d")]
#[command(about = "Convex hull of a set of integer points")]
struct Cmd {
  /// Hull construction: jarvis-march, quick-hull or graham-scan
  #[arg(long, default_value_t = Algorithm::QuickHull)]
  algorithm: Algorithm,

  /// Read points from FILE ('-' for stdin), one "x y" or "x,y" pair per line.
  /// Without it, random points are generated.
  #[arg(long)]
  input: Option<PathBuf>,

  /// Number of random points
  #[arg(long, default_value_t = 50)]
  random: usize,

  /// Random points are drawn from [0, width) x [0, height)
  #[arg(long, default_value_t = 1800)]
  width: i64,

  #[arg(long, default_value_t = 900)]
  height: i64,

  #[arg(long)]
  seed: Option<u64>,

  /// Validate the hull and check that no input point lies outside of it
  #[arg(long)]
  check: bool,

  /// -v for debug logs, -vv for trace logs
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

fn main() -> Result<()> {
  let cmd = Cmd::parse();
  let level = match cmd.verbose {
    0 => Level::INFO,
    1 => Level::DEBUG,
    _ => Level::TRACE,
  };
  SubscriberBuilder::default()
    .with_max_level(level)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  let (points, hull) = match &cmd.input {
    Some(path) => {
      let coords = parse_points(&read_input(path)?)?;
      let hull: Vec<Point<i64>> = hull_of_coords(&coords, cmd.algorithm)
        .with_context(|| format!("computing hull of {}", path.display()))?;
      let points = coords
        .iter()
        .map(|xy| Point::try_from_f64(*xy))
        .collect::<Result<Vec<Point<i64>>, _>>()?;
      (points, hull)
    }
    None => {
      let seed = cmd.seed.unwrap_or_else(rand::random);
      let points = random_points(cmd.random, cmd.width, cmd.height, seed)?;
      tracing::info!(seed, n = points.len(), "generated points");
      let hull = hull_of(&points, cmd.algorithm);
      (points, hull)
    }
  };
  tracing::info!(
    algorithm = %cmd.algorithm,
    n = points.len(),
    h = hull.len(),
    "hull"
  );

  if cmd.check {
    check(&points, &hull, cmd.algorithm)?;
    tracing::info!("check passed");
  }

  let mut out = std::io::stdout().lock();
  for pt in &hull {
    writeln!(out, "{} {}", pt.x_coord(), pt.y_coord())?;
  }
  Ok(())
}

fn read_input(path: &Path) -> Result<String> {
  if path == Path::new("-") {
    let mut text = String::new();
    std::io::stdin()
      .read_to_string(&mut text)
      .context("reading points from stdin")?;
    Ok(text)
  } else {
    std::fs::read_to_string(path).with_context(|| format!("reading points from {}", path.display()))
  }
}

// Blank lines and '#' comments are skipped. Coordinates are kept as floats
// so that the library can reject the ones that are not exact integers.
fn parse_points(text: &str) -> Result<Vec<[f64; 2]>> {
  let mut coords = Vec::new();
  for (lineno, line) in text.lines().enumerate() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }
    let fields: Vec<&str> = line
      .split(|c: char| c == ',' || c.is_whitespace())
      .filter(|field| !field.is_empty())
      .collect();
    let [x, y] = fields.as_slice() else {
      bail!("line {}: expected two coordinates, got {:?}", lineno + 1, line);
    };
    let parse = |field: &str| {
      field
        .parse::<f64>()
        .with_context(|| format!("line {}: bad coordinate {:?}", lineno + 1, field))
    };
    coords.push([parse(*x)?, parse(*y)?]);
  }
  Ok(coords)
}

fn random_points(n: usize, width: i64, height: i64, seed: u64) -> Result<Vec<Point<i64>>> {
  ensure!(
    width > 0 && height > 0,
    "canvas must be non-empty, got {}x{}",
    width,
    height
  );
  let mut rng = SmallRng::seed_from_u64(seed);
  Ok(
    (0..n)
      .map(|_| Point::new([rng.gen_range(0..width), rng.gen_range(0..height)]))
      .collect(),
  )
}

fn check(points: &[Point<i64>], hull: &[Point<i64>], algorithm: Algorithm) -> Result<()> {
  let winding = validate(hull)?;
  if let Some(winding) = winding {
    ensure!(
      winding == algorithm.winding(),
      "{} produced a {:?} hull",
      algorithm,
      winding
    );
  }
  if let Some(outside) = points
    .iter()
    .find(|pt| locate(hull, pt) == PointLocation::Outside)
  {
    bail!("point {:?} lies outside the hull", outside.array);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_mixed_separators() {
    let text = "# square\n0 0\n4,0\n\n  4, 4 \n0\t4\n";
    let coords = parse_points(text).unwrap();
    assert_eq!(coords, vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]]);
  }

  #[test]
  fn parse_rejects_bad_lines() {
    assert!(parse_points("1 2 3\n").is_err());
    assert!(parse_points("1\n").is_err());
    assert!(parse_points("x 2\n").is_err());
  }

  #[test]
  fn fractional_coordinates_fail_fast() {
    let coords = parse_points("0 0\n1.5 0\n0 1\n").unwrap();
    assert!(hull_of_coords::<i64>(&coords, Algorithm::GrahamScan).is_err());
  }

  #[test]
  fn read_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "0 0\n5 0\n5 5\n0 5\n2 3").unwrap();
    let coords = parse_points(&read_input(file.path()).unwrap()).unwrap();
    let hull: Vec<Point<i64>> = hull_of_coords(&coords, Algorithm::JarvisMarch).unwrap();
    assert_eq!(hull.len(), 4);
  }

  #[test]
  fn random_points_are_reproducible_and_checked() {
    let points = random_points(200, 1800, 900, 7).unwrap();
    assert_eq!(points, random_points(200, 1800, 900, 7).unwrap());
    assert!(points
      .iter()
      .all(|pt| (0..1800).contains(pt.x_coord()) && (0..900).contains(pt.y_coord())));
    for algorithm in Algorithm::ALL {
      let hull = hull_of(&points, algorithm);
      check(&points, &hull, algorithm).unwrap();
    }
  }

  #[test]
  fn empty_canvas_is_rejected() {
    assert!(random_points(3, 0, 10, 1).is_err());
  }
}
