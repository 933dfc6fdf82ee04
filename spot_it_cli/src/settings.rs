use foundations::settings::settings;
use serde_default_utils::*;
use spot_it::{CardGeometry, DeckOptions, SymbolSizing};

fn default_card_radius() -> f64 {
  500.
}

fn default_margin() -> f64 {
  4.
}

fn default_base_fraction() -> f64 {
  SymbolSizing::DEFAULT_BASE_FRACTION
}

fn default_min_scale() -> f64 {
  SymbolSizing::DEFAULT_MIN_SCALE
}

fn default_max_scale() -> f64 {
  SymbolSizing::DEFAULT_MAX_SCALE
}

#[settings]
pub struct SymbolSettings {
  /// Identifier handed to the renderer, typically the image file name.
  pub name: String,
  /// Source image size in pixels.  Leave at 0 if unknown; `image_scale` is omitted from the output.
  pub width: u32,
  pub height: u32,
}

#[settings]
pub struct SizingSettings {
  /// Symbol radius before scaling, as a fraction of the card radius.
  #[serde(default = "default_base_fraction")]
  pub base_fraction: f64,
  #[serde(default = "default_min_scale")]
  pub min_scale: f64,
  #[serde(default = "default_max_scale")]
  pub max_scale: f64,
}

#[settings]
pub struct DeckSettings {
  /// Radius of the round card.
  #[serde(default = "default_card_radius")]
  pub card_radius: f64,
  /// Minimum gap kept between any two symbols.
  #[serde(default = "default_margin")]
  pub margin: f64,
  /// Seed for card layouts.  The same seed and symbols always produce the same deck.
  #[serde(default = "default_u64::<5965591>")]
  pub seed: u64,
  /// Number of threads used to pack cards.
  #[serde(default = "default_usize::<4>")]
  pub workers: usize,
  /// Where to write the deck JSON.  Written to stdout if unset.
  pub output_path: Option<String>,

  pub sizing: SizingSettings,

  /// The deck's symbols.  There must be n² + n + 1 of them for some n.
  pub symbols: Vec<SymbolSettings>,
}

impl DeckSettings {
  pub fn deck_options(&self) -> DeckOptions {
    DeckOptions {
      geometry: CardGeometry {
        card_radius: self.card_radius,
        margin: self.margin,
      },
      sizing: SymbolSizing {
        base_radius: self.card_radius * self.sizing.base_fraction,
        min_scale: self.sizing.min_scale,
        max_scale: self.sizing.max_scale,
      },
      seed: self.seed,
      workers: self.workers,
    }
  }
}
