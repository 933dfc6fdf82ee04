use common::uniform;
use rand::Rng;

/// How big each symbol is drawn.  Every symbol on every card gets its own radius, picked uniformly
/// from `[min_scale, max_scale] * base_radius`, so the same symbol shows up at different sizes on
/// different cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymbolSizing {
  pub base_radius: f64,
  pub min_scale: f64,
  pub max_scale: f64,
}

impl SymbolSizing {
  /// Keeps the largest symbols at a fifth of the card radius, small enough that an order 7 card
  /// (8 symbols) packs within a few attempts.
  pub const DEFAULT_BASE_FRACTION: f64 = 0.2;
  pub const DEFAULT_MIN_SCALE: f64 = 0.4;
  pub const DEFAULT_MAX_SCALE: f64 = 1.0;

  pub fn for_card(card_radius: f64) -> Self {
    SymbolSizing {
      base_radius: card_radius * Self::DEFAULT_BASE_FRACTION,
      min_scale: Self::DEFAULT_MIN_SCALE,
      max_scale: Self::DEFAULT_MAX_SCALE,
    }
  }

  /// Every symbol gets exactly `radius`.
  pub fn fixed(radius: f64) -> Self {
    SymbolSizing {
      base_radius: radius,
      min_scale: 1.,
      max_scale: 1.,
    }
  }

  pub fn draw(&self, rng: &mut impl Rng) -> f64 {
    self.base_radius * uniform(rng, self.min_scale, self.max_scale)
  }
}

impl Default for SymbolSizing {
  fn default() -> Self {
    SymbolSizing::for_card(crate::CardGeometry::default().card_radius)
  }
}
