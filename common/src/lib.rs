pub extern crate rand;
pub extern crate rand_pcg;

use std::f64::consts::TAU;

use rand::Rng;
use rand_pcg::Pcg32;

/// Builds a PCG generator from `(state, stream)`.
///
/// Generators built with the same state but different streams produce independent sequences, which
/// is what lets cards be packed on separate workers without sharing a generator.
pub fn build_rng((state, stream): (u64, u64)) -> Pcg32 {
  let mut rng = Pcg32::new(state, stream);

  // pump the rng a few times to avoid possible issues with seeding
  for _ in 0..8 {
    let _ = rng.gen::<u32>();
  }

  rng
}

/// The generator used for the card at `card_ix` of a deck seeded with `seed`.
#[inline]
pub fn card_rng(seed: u64, card_ix: usize) -> Pcg32 {
  build_rng((seed, card_ix as u64))
}

/// Returns a random angle in the range [0, 2π).
#[inline(always)]
pub fn random_angle(rng: &mut impl Rng) -> f64 {
  rng.gen::<f64>() * TAU
}

/// Returns a random f64 in the range [min, max).  Returns `min` if the range is empty.
pub fn uniform(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
  if max <= min {
    return min;
  }
  min + rng.gen::<f64>() * (max - min)
}
