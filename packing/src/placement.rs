use nalgebra::Vector2;
use rand::Rng;
use thiserror::Error;

use common::random_angle;

use crate::interval::{Interval, IntervalSet};

/// Number of directions tried for a single symbol before giving up on the current card state.
pub const LOCAL_ATTEMPTS: usize = 10;

/// Symbols are kept inside this fraction of the card radius so they stay off the outer rim.
pub const RIM_FACTOR: f64 = 0.9;

/// Forbidden zones are widened by this fraction of the card radius so that a distance sampled
/// right at a zone boundary can't round its way into an overlap.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// An accepted symbol position.  `center` is relative to the center of the card and `rotation` is
/// in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRecord {
  pub center: Vector2<f64>,
  pub radius: f64,
  pub rotation: f64,
}

impl PlacementRecord {
  /// Gap between the edges of the two circles.  Negative if they overlap.
  pub fn clearance(&self, other: &PlacementRecord) -> f64 {
    (self.center - other.center).norm() - self.radius - other.radius
  }

  /// Scale factor to apply to a `width` x `height` image so that its diagonal matches this
  /// placement's diameter.  The image then fits inside the placement circle at any rotation.
  pub fn image_scale(&self, width: f64, height: f64) -> f64 {
    self.radius * 2. / width.hypot(height)
  }
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("no room left for a symbol of radius {radius} after {attempts} attempts")]
pub struct CardFull {
  pub radius: f64,
  pub attempts: usize,
}

/// Distances `t >= 0` along the ray from the origin in `direction` (a unit vector) at which the
/// ray is inside the disk at `center` with the given `radius`.
///
/// Handles the origin being inside the disk, in which case the interval starts at 0.
pub fn ray_disk_interval(
  direction: Vector2<f64>,
  center: Vector2<f64>,
  radius: f64,
) -> Option<Interval> {
  let t0 = center.dot(&direction);
  let discriminant = radius * radius - (center.norm_squared() - t0 * t0);
  if discriminant < 0. {
    return None;
  }

  let half_chord = discriminant.sqrt();
  let hi = t0 + half_chord;
  if hi < 0. {
    return None;
  }
  Some(Interval::new((t0 - half_chord).max(0.), hi))
}

/// Packs circles onto one card, one at a time.
#[derive(Clone, Debug)]
pub struct PlacementEngine {
  card_radius: f64,
  records: Vec<PlacementRecord>,
}

impl PlacementEngine {
  pub fn new(card_radius: f64) -> Self {
    PlacementEngine {
      card_radius,
      records: Vec::new(),
    }
  }

  pub fn records(&self) -> &[PlacementRecord] {
    &self.records
  }

  pub fn into_records(self) -> Vec<PlacementRecord> {
    self.records
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Distances from the card center along `theta` at which the center of a new circle of
  /// `new_radius` would come within `margin` of an already placed circle.
  pub fn forbidden_radii(&self, theta: f64, new_radius: f64, margin: f64) -> IntervalSet {
    let direction = Vector2::new(theta.cos(), theta.sin());
    let forbidden: IntervalSet = self
      .records
      .iter()
      .filter_map(|record| {
        ray_disk_interval(direction, record.center, record.radius + new_radius + margin)
      })
      .collect();
    forbidden.dilate(self.card_radius.abs().max(1.) * BOUNDARY_TOLERANCE)
  }

  /// Distances from the card center along `theta` at which a new circle's center may be put.
  pub fn allowed_radii(&self, theta: f64, new_radius: f64, margin: f64) -> IntervalSet {
    let bounds = IntervalSet::from(Interval::new(
      0.,
      self.card_radius * RIM_FACTOR - new_radius,
    ));
    if bounds.is_empty() || self.records.is_empty() {
      return bounds;
    }
    bounds.difference(&self.forbidden_radii(theta, new_radius, margin))
  }

  /// Tries to place a circle somewhere along the ray at `theta`.  Returns `None` if the whole ray is
  /// blocked.
  pub fn place_at_angle(
    &mut self,
    theta: f64,
    new_radius: f64,
    margin: f64,
    rng: &mut impl Rng,
  ) -> Option<PlacementRecord> {
    let allowed = self.allowed_radii(theta, new_radius, margin);
    let distance = allowed.sample(rng)?;

    let record = PlacementRecord {
      center: Vector2::new(theta.cos(), theta.sin()) * distance,
      radius: new_radius,
      rotation: random_angle(rng),
    };
    self.records.push(record);
    Some(record)
  }

  pub fn place_next(
    &mut self,
    new_radius: f64,
    margin: f64,
    rng: &mut impl Rng,
  ) -> Result<PlacementRecord, CardFull> {
    for attempt in 0..LOCAL_ATTEMPTS {
      let theta = random_angle(rng);
      if let Some(record) = self.place_at_angle(theta, new_radius, margin, rng) {
        return Ok(record);
      }
      log::trace!("attempt {attempt}: ray at {theta:.4} rad is fully blocked");
    }

    log::debug!(
      "no room for radius {new_radius} with {} symbols already placed",
      self.records.len()
    );
    Err(CardFull {
      radius: new_radius,
      attempts: LOCAL_ATTEMPTS,
    })
  }
}
