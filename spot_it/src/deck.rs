use fxhash::FxHashMap;
use projective_plane::{InvalidDesignError, PlanePoint, ProjectivePlane};
use thiserror::Error;

use common::card_rng;

use crate::{
  card::{assemble_card, Card, CardGeometry, UnpackableCardError},
  sizing::SymbolSizing,
};

#[derive(Clone, Debug, PartialEq)]
pub struct DeckOptions {
  pub geometry: CardGeometry,
  pub sizing: SymbolSizing,
  pub seed: u64,
  /// Number of threads used to pack cards.  The output doesn't depend on it.
  pub workers: usize,
}

impl Default for DeckOptions {
  fn default() -> Self {
    let geometry = CardGeometry::default();
    DeckOptions {
      geometry,
      sizing: SymbolSizing::for_card(geometry.card_radius),
      seed: 0x5b07_17,
      workers: 4,
    }
  }
}

#[derive(Debug, Error)]
pub enum DeckError {
  #[error(transparent)]
  InvalidDesign(#[from] InvalidDesignError),
  #[error("card {card_ix}: {source}")]
  Unpackable {
    card_ix: usize,
    #[source]
    source: UnpackableCardError,
  },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Deck<S> {
  pub order: usize,
  pub cards: Vec<Card<S>>,
}

/// Builds a full deck out of `symbols`, one card per line of the projective plane whose point count
/// matches the number of symbols.
pub fn generate_deck<S: Clone + Send + Sync>(
  symbols: &[S],
  options: &DeckOptions,
) -> Result<Deck<S>, DeckError> {
  let plane = ProjectivePlane::from_count(symbols.len())?;
  log::info!(
    "building {} cards with {} symbols each (order {})",
    plane.point_count(),
    plane.line_size(),
    plane.order()
  );

  let symbol_for_point: FxHashMap<PlanePoint, usize> =
    plane.points().enumerate().map(|(ix, point)| (point, ix)).collect();
  let lines: Vec<Vec<usize>> = plane
    .lines()
    .map(|line| line.iter().map(|point| symbol_for_point[point]).collect())
    .collect();

  let cards = assemble_deck(&lines, options)?
    .into_iter()
    .map(|card| card.map_symbols(|ix| symbols[ix].clone()))
    .collect();
  Ok(Deck {
    order: plane.order(),
    cards,
  })
}

fn assemble_one<S: Clone>(
  card_ix: usize,
  total: usize,
  line: &[S],
  options: &DeckOptions,
) -> Result<Card<S>, DeckError> {
  let mut rng = card_rng(options.seed, card_ix);
  let sized: Vec<(S, f64)> = line
    .iter()
    .map(|symbol| (symbol.clone(), options.sizing.draw(&mut rng)))
    .collect();

  let card = assemble_card(&sized, &options.geometry, &mut rng).map_err(|source| {
    log::warn!("giving up on card {card_ix}: {source}");
    DeckError::Unpackable { card_ix, source }
  })?;
  log::info!("packed card {}/{total}", card_ix + 1);
  Ok(card)
}

/// Packs one card per line.  Cards are split across `options.workers` threads; each card draws from
/// its own random stream so the result is the same for any number of workers.
pub fn assemble_deck<S: Clone + Send + Sync>(
  lines: &[Vec<S>],
  options: &DeckOptions,
) -> Result<Vec<Card<S>>, DeckError> {
  if lines.is_empty() {
    return Ok(Vec::new());
  }

  let workers = options.workers.clamp(1, lines.len());
  let chunk_size = lines.len().div_ceil(workers);
  let total = lines.len();

  let chunks: Vec<Result<Vec<Card<S>>, DeckError>> = if workers == 1 {
    vec![lines
      .iter()
      .enumerate()
      .map(|(card_ix, line)| assemble_one(card_ix, total, line, options))
      .collect()]
  } else {
    std::thread::scope(|scope| {
      let handles: Vec<_> = lines
        .chunks(chunk_size)
        .enumerate()
        .map(|(chunk_ix, chunk)| {
          scope.spawn(move || {
            chunk
              .iter()
              .enumerate()
              .map(|(ix, line)| {
                assemble_one(chunk_ix * chunk_size + ix, total, line, options)
              })
              .collect::<Result<Vec<_>, _>>()
          })
        })
        .collect();

      handles
        .into_iter()
        .map(|handle| {
          handle
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
        })
        .collect()
    })
  };

  let mut cards = Vec::with_capacity(total);
  for chunk in chunks {
    cards.extend(chunk?);
  }
  log::info!("packed {total} cards");
  Ok(cards)
}
