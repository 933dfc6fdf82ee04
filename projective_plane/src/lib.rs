//! Points and lines of the finite projective plane of order `n`, built as the affine plane over
//! `Z_n` plus one point at infinity per direction.
//!
//! The construction is only a genuine projective plane when `Z_n` is a field (prime `n`).  Callers
//! are responsible for picking a suitable order; nothing here checks it.

use std::fmt::{self, Display};

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
  pub x: usize,
  pub y: usize,
}

impl Point {
  pub const fn new(x: usize, y: usize) -> Self {
    Point { x, y }
  }
}

/// A direction shared by all parallel affine lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointAtInfinity {
  FiniteSlope(usize),
  /// The direction of the lines `x = k`, which have no finite slope.
  Vertical,
}

impl PointAtInfinity {
  /// The `order` affine lines running in this direction, each extended with this point.
  pub fn lines(self, order: usize) -> impl Iterator<Item = Vec<PlanePoint>> {
    (0..order).map(move |offset| {
      let mut line: Vec<PlanePoint> = match self {
        PointAtInfinity::FiniteSlope(slope) => (0..order)
          .map(|x| PlanePoint::Affine(Point::new(x, (slope * x + offset) % order)))
          .collect(),
        PointAtInfinity::Vertical => (0..order)
          .map(|y| PlanePoint::Affine(Point::new(offset, y)))
          .collect(),
      };
      line.push(self.into());
      line
    })
  }
}

/// Any point of the plane.  These are the symbol identifiers handed out to cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanePoint {
  Affine(Point),
  AtInfinity(PointAtInfinity),
}

impl From<Point> for PlanePoint {
  fn from(point: Point) -> Self {
    PlanePoint::Affine(point)
  }
}

impl From<PointAtInfinity> for PlanePoint {
  fn from(point: PointAtInfinity) -> Self {
    PlanePoint::AtInfinity(point)
  }
}

impl Display for PlanePoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PlanePoint::Affine(Point { x, y }) => write!(f, "({x}, {y})"),
      PlanePoint::AtInfinity(PointAtInfinity::FiniteSlope(slope)) => write!(f, "inf({slope})"),
      PlanePoint::AtInfinity(PointAtInfinity::Vertical) => write!(f, "inf(vertical)"),
    }
  }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error(
  "the number of points/lines in a projective plane must be of the form n² + n + 1, got {count}; \
   the nearest such number is {nearest}"
)]
pub struct InvalidDesignError {
  pub count: usize,
  pub nearest: usize,
}

/// Number of points (and lines) in the plane of order `order`.
#[inline]
pub const fn point_count(order: usize) -> usize {
  order * order + order + 1
}

/// Like [`point_count`], but `None` where the count doesn't fit in a `usize`.
pub fn checked_point_count(order: usize) -> Option<usize> {
  order.checked_mul(order)?.checked_add(order)?.checked_add(1)
}

/// Solves `n² + n + 1 = n_symbols` for `n`.
pub fn order_from_count(n_symbols: usize) -> Result<usize, InvalidDesignError> {
  let candidate = n_symbols.saturating_sub(1).isqrt();

  match checked_point_count(candidate) {
    Some(count) if count == n_symbols => Ok(candidate),
    Some(nearest) => Err(InvalidDesignError {
      count: n_symbols,
      nearest,
    }),
    // candidate² <= n_symbols - 1, so the next order down always fits
    None => Err(InvalidDesignError {
      count: n_symbols,
      nearest: point_count(candidate - 1),
    }),
  }
}

pub fn points_at_infinity(order: usize) -> impl Iterator<Item = PointAtInfinity> + Clone {
  (0..order)
    .map(PointAtInfinity::FiniteSlope)
    .chain(std::iter::once(PointAtInfinity::Vertical))
}

pub fn all_points(order: usize) -> impl Iterator<Item = PlanePoint> {
  (0..order)
    .flat_map(move |x| (0..order).map(move |y| PlanePoint::Affine(Point::new(x, y))))
    .chain(points_at_infinity(order).map(PlanePoint::from))
}

/// All lines of the plane: the pencils of parallel lines for every direction followed by the line
/// at infinity.
pub fn all_lines(order: usize) -> impl Iterator<Item = Vec<PlanePoint>> {
  points_at_infinity(order)
    .flat_map(move |direction| direction.lines(order))
    .chain(std::iter::once(
      points_at_infinity(order).map(PlanePoint::from).collect::<Vec<_>>(),
    ))
}

/// The projective plane of a given order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectivePlane {
  order: usize,
}

impl ProjectivePlane {
  pub const fn new(order: usize) -> Self {
    ProjectivePlane { order }
  }

  pub fn from_count(n_symbols: usize) -> Result<Self, InvalidDesignError> {
    order_from_count(n_symbols).map(Self::new)
  }

  pub const fn order(&self) -> usize {
    self.order
  }

  pub const fn point_count(&self) -> usize {
    point_count(self.order)
  }

  /// Number of points on every line, which is also the number of lines through every point.
  pub const fn line_size(&self) -> usize {
    self.order + 1
  }

  pub fn points(&self) -> impl Iterator<Item = PlanePoint> {
    all_points(self.order)
  }

  pub fn lines(&self) -> impl Iterator<Item = Vec<PlanePoint>> {
    all_lines(self.order)
  }
}

#[cfg(test)]
mod tests {
  use fxhash::{FxHashMap, FxHashSet};

  use super::*;

  #[test]
  fn test_counts() {
    for order in [2, 3, 4, 5, 7] {
      let points: Vec<_> = all_points(order).collect();
      assert_eq!(points.len(), order * order + order + 1);
      let distinct: FxHashSet<_> = points.iter().collect();
      assert_eq!(distinct.len(), points.len());

      let lines: Vec<_> = all_lines(order).collect();
      assert_eq!(lines.len(), order * order + order + 1);
      for line in &lines {
        assert_eq!(line.len(), order + 1);
        let distinct: FxHashSet<_> = line.iter().collect();
        assert_eq!(distinct.len(), line.len(), "duplicate point on line {line:?}");
      }
    }
  }

  #[test]
  fn test_every_point_pair_shares_one_line() {
    for order in [2, 3, 5, 7] {
      let lines: Vec<_> = all_lines(order).collect();
      let mut pair_counts: FxHashMap<(PlanePoint, PlanePoint), usize> = FxHashMap::default();
      for line in &lines {
        for (i, a) in line.iter().enumerate() {
          for b in &line[i + 1..] {
            let key = if a < b { (*a, *b) } else { (*b, *a) };
            *pair_counts.entry(key).or_default() += 1;
          }
        }
      }

      let points: Vec<_> = all_points(order).collect();
      for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
          let key = if a < b { (*a, *b) } else { (*b, *a) };
          assert_eq!(
            pair_counts.get(&key).copied().unwrap_or(0),
            1,
            "order {order}: points {a} and {b}"
          );
        }
      }
    }
  }

  #[test]
  fn test_every_line_pair_shares_one_point() {
    for order in [2, 3, 5, 7] {
      let lines: Vec<FxHashSet<PlanePoint>> =
        all_lines(order).map(|line| line.into_iter().collect()).collect();
      for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
          assert_eq!(a.intersection(b).count(), 1, "order {order}");
        }
      }
    }
  }

  #[test]
  fn test_every_point_on_order_plus_one_lines() {
    for order in [2, 3, 5] {
      let mut incidence: FxHashMap<PlanePoint, usize> = FxHashMap::default();
      for line in all_lines(order) {
        for point in line {
          *incidence.entry(point).or_default() += 1;
        }
      }
      assert_eq!(incidence.len(), point_count(order));
      assert!(incidence.values().all(|&count| count == order + 1));
    }
  }

  #[test]
  fn test_line_layout() {
    let lines: Vec<_> = all_lines(2).collect();
    assert_eq!(
      lines[1],
      vec![
        PlanePoint::from(Point::new(0, 1)),
        Point::new(1, 1).into(),
        PointAtInfinity::FiniteSlope(0).into(),
      ]
    );
    assert_eq!(
      lines[4],
      vec![
        PlanePoint::from(Point::new(0, 0)),
        Point::new(0, 1).into(),
        PointAtInfinity::Vertical.into(),
      ]
    );
    assert_eq!(
      lines.last().unwrap(),
      &vec![
        PlanePoint::from(PointAtInfinity::FiniteSlope(0)),
        PointAtInfinity::FiniteSlope(1).into(),
        PointAtInfinity::Vertical.into(),
      ]
    );
  }

  #[test]
  fn test_order_from_count() {
    assert_eq!(order_from_count(7), Ok(2));
    assert_eq!(order_from_count(13), Ok(3));
    assert_eq!(order_from_count(57), Ok(7));
    assert_eq!(order_from_count(1), Ok(0));

    let err = order_from_count(6).unwrap_err();
    assert_eq!(err.nearest, 7);
    assert!(err.to_string().contains("nearest such number is 7"));

    assert_eq!(order_from_count(0).unwrap_err().nearest, 1);
    assert_eq!(order_from_count(20).unwrap_err().nearest, 13);
  }

  #[test]
  fn test_order_from_count_near_usize_max() {
    let err = order_from_count(usize::MAX).unwrap_err();
    assert_eq!(err.count, usize::MAX);
    assert!(err.nearest < usize::MAX);
    let order = order_from_count(err.nearest).unwrap();
    assert_eq!(checked_point_count(order), Some(err.nearest));

    assert!(order_from_count(usize::MAX - 1).is_err());
    assert_eq!(checked_point_count(usize::MAX), None);
    assert_eq!(checked_point_count(1 << 10), Some(point_count(1 << 10)));
  }

  #[test]
  fn test_plane_accessors() {
    let plane = ProjectivePlane::from_count(31).unwrap();
    assert_eq!(plane.order(), 5);
    assert_eq!(plane.line_size(), 6);
    assert_eq!(plane.points().count(), plane.point_count());
    assert_eq!(plane.lines().count(), plane.point_count());
  }

  #[test]
  fn test_points_at_infinity() {
    let directions: Vec<_> = points_at_infinity(3).collect();
    assert_eq!(
      directions,
      vec![
        PointAtInfinity::FiniteSlope(0),
        PointAtInfinity::FiniteSlope(1),
        PointAtInfinity::FiniteSlope(2),
        PointAtInfinity::Vertical,
      ]
    );
    assert_eq!(PointAtInfinity::Vertical.lines(3).count(), 3);
  }
}
