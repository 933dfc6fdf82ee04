use std::fmt::{self, Display};

use rand::Rng;

/// Closed range `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
  pub lo: f64,
  pub hi: f64,
}

impl Interval {
  pub const fn new(lo: f64, hi: f64) -> Self {
    Interval { lo, hi }
  }

  /// `false` for inverted ranges and for ranges with a NaN bound.
  #[inline]
  pub fn is_valid(&self) -> bool {
    self.lo <= self.hi
  }

  #[inline]
  pub fn len(&self) -> f64 {
    self.hi - self.lo
  }

  #[inline]
  pub fn contains(&self, value: f64) -> bool {
    self.lo <= value && value <= self.hi
  }

  pub fn overlap(&self, other: &Interval) -> Option<Interval> {
    let overlap = Interval::new(self.lo.max(other.lo), self.hi.min(other.hi));
    overlap.is_valid().then_some(overlap)
  }
}

/// A union of closed intervals, stored sorted, disjoint, and with touching intervals merged.
///
/// Every operation leaves the set normalized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IntervalSet {
  intervals: Vec<Interval>,
}

impl From<Interval> for IntervalSet {
  fn from(interval: Interval) -> Self {
    IntervalSet::from_intervals([interval])
  }
}

impl FromIterator<Interval> for IntervalSet {
  fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
    IntervalSet::from_intervals(iter)
  }
}

impl IntervalSet {
  pub const fn new() -> Self {
    IntervalSet {
      intervals: Vec::new(),
    }
  }

  /// Inverted intervals are treated as empty and dropped.
  pub fn from_intervals(intervals: impl IntoIterator<Item = Interval>) -> Self {
    let mut set = IntervalSet {
      intervals: intervals.into_iter().collect(),
    };
    set.normalize();
    set
  }

  #[inline]
  pub fn intervals(&self) -> &[Interval] {
    &self.intervals
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }

  /// Total length covered by the set.
  pub fn measure(&self) -> f64 {
    self.intervals.iter().map(Interval::len).sum()
  }

  pub fn normalize(&mut self) {
    self.intervals.retain(Interval::is_valid);
    if self.intervals.len() < 2 {
      return;
    }

    self
      .intervals
      .sort_unstable_by(|a, b| a.lo.total_cmp(&b.lo));

    let mut merged: Vec<Interval> = Vec::with_capacity(self.intervals.len());
    for interval in self.intervals.drain(..) {
      match merged.last_mut() {
        Some(prev) if interval.lo <= prev.hi => {
          prev.hi = prev.hi.max(interval.hi);
        }
        _ => merged.push(interval),
      }
    }
    self.intervals = merged;
  }

  pub fn insert(&mut self, interval: Interval) {
    self.intervals.push(interval);
    self.normalize();
  }

  pub fn union(&self, other: &IntervalSet) -> IntervalSet {
    IntervalSet::from_intervals(self.intervals.iter().chain(other.intervals.iter()).copied())
  }

  pub fn union_interval(&self, other: Interval) -> IntervalSet {
    let mut out = self.clone();
    out.insert(other);
    out
  }

  pub fn difference_interval(&self, other: Interval) -> IntervalSet {
    if !other.is_valid() {
      return self.clone();
    }

    let Interval { lo, hi } = other;
    let mut out = Vec::with_capacity(self.intervals.len() + 1);
    for &cur in &self.intervals {
      if cur.lo < lo && hi < cur.hi {
        // `other` punches a hole in the middle
        out.push(Interval::new(cur.lo, lo));
        out.push(Interval::new(hi, cur.hi));
      } else if lo <= cur.lo && cur.hi <= hi {
        continue;
      } else if cur.lo < lo && lo <= cur.hi && cur.hi <= hi {
        out.push(Interval::new(cur.lo, lo));
      } else if lo <= cur.lo && cur.lo <= hi && hi < cur.hi {
        out.push(Interval::new(hi, cur.hi));
      } else {
        out.push(cur);
      }
    }
    IntervalSet::from_intervals(out)
  }

  pub fn difference(&self, other: &IntervalSet) -> IntervalSet {
    other
      .intervals
      .iter()
      .fold(self.clone(), |acc, &interval| acc.difference_interval(interval))
  }

  pub fn intersection(&self, other: &IntervalSet) -> IntervalSet {
    self
      .intervals
      .iter()
      .flat_map(|a| other.intervals.iter().filter_map(move |b| a.overlap(b)))
      .collect()
  }

  /// Widens every interval by `buffer` on both sides.  Intervals that grow into each other are
  /// merged; a negative `buffer` shrinks them and drops any that vanish.
  pub fn dilate(&self, buffer: f64) -> IntervalSet {
    self
      .intervals
      .iter()
      .map(|interval| Interval::new(interval.lo - buffer, interval.hi + buffer))
      .collect()
  }

  pub fn contains(&self, value: f64) -> bool {
    self.intervals.iter().any(|interval| interval.contains(value))
  }

  /// Draws a value uniformly from the covered measure.
  ///
  /// Returns `None` if the set is empty.  A set made up only of zero-length intervals yields the
  /// first of them.
  pub fn sample(&self, rng: &mut impl Rng) -> Option<f64> {
    let first = self.intervals.first()?;
    let total = self.measure();
    if total <= 0. {
      return Some(first.lo);
    }

    let mut remaining = rng.gen::<f64>() * total;
    for interval in &self.intervals {
      let len = interval.len();
      if remaining <= len {
        return Some((interval.lo + remaining).min(interval.hi));
      }
      remaining -= len;
    }

    self.intervals.last().map(|interval| interval.hi)
  }
}

impl Display for IntervalSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.intervals.is_empty() {
      return write!(f, "∅");
    }

    for (ix, Interval { lo, hi }) in self.intervals.iter().enumerate() {
      if ix > 0 {
        write!(f, " ∪ ")?;
      }
      write!(f, "[{lo}, {hi}]")?;
    }
    Ok(())
  }
}
