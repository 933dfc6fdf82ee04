use packing::{PlacementEngine, PlacementRecord};
use rand::Rng;
use thiserror::Error;

/// Number of times a whole card is thrown away and packed again from scratch before giving up.
pub const CARD_ATTEMPTS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardGeometry {
  pub card_radius: f64,
  /// Minimum gap between any two symbols on the card.
  pub margin: f64,
}

impl Default for CardGeometry {
  fn default() -> Self {
    CardGeometry {
      card_radius: 500.,
      margin: 4.,
    }
  }
}

/// A finished card.  Placements are in the same order as the symbols that were passed in.
#[derive(Clone, Debug, PartialEq)]
pub struct Card<S> {
  pub card_radius: f64,
  pub placements: Vec<(S, PlacementRecord)>,
}

impl<S> Card<S> {
  pub fn symbols(&self) -> impl Iterator<Item = &S> + '_ {
    self.placements.iter().map(|(symbol, _)| symbol)
  }

  pub fn len(&self) -> usize {
    self.placements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.placements.is_empty()
  }

  pub fn map_symbols<T>(self, mut f: impl FnMut(S) -> T) -> Card<T> {
    Card {
      card_radius: self.card_radius,
      placements: self
        .placements
        .into_iter()
        .map(|(symbol, record)| (f(symbol), record))
        .collect(),
    }
  }
}

/// The symbols don't fit on the card at this size.  Not a bug; retry with a bigger card or smaller
/// symbols.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error(
  "couldn't pack {symbol_count} symbols onto a card of radius {card_radius} in {attempts} attempts"
)]
pub struct UnpackableCardError {
  pub card_radius: f64,
  pub symbol_count: usize,
  pub attempts: usize,
}

/// Places every `(symbol, radius)` on a card, starting over whenever a symbol can't be fit.
pub fn assemble_card<S: Clone>(
  symbols: &[(S, f64)],
  geometry: &CardGeometry,
  rng: &mut impl Rng,
) -> Result<Card<S>, UnpackableCardError> {
  'attempts: for attempt in 0..CARD_ATTEMPTS {
    let mut engine = PlacementEngine::new(geometry.card_radius);
    for (ix, (_, radius)) in symbols.iter().enumerate() {
      if let Err(err) = engine.place_next(*radius, geometry.margin, rng) {
        log::debug!(
          "card attempt {attempt} stuck on symbol {}/{}: {err}",
          ix + 1,
          symbols.len()
        );
        continue 'attempts;
      }
    }

    let placements = symbols
      .iter()
      .map(|(symbol, _)| symbol.clone())
      .zip(engine.into_records())
      .collect();
    return Ok(Card {
      card_radius: geometry.card_radius,
      placements,
    });
  }

  Err(UnpackableCardError {
    card_radius: geometry.card_radius,
    symbol_count: symbols.len(),
    attempts: CARD_ATTEMPTS,
  })
}
