use serde::Serialize;
use spot_it::{Deck, SheetLayout, SheetSlot};

use crate::settings::DeckSettings;

#[derive(Serialize)]
pub struct PlacementOutput<'a> {
  pub symbol: &'a str,
  /// Offset of the symbol's center from the card's center.
  pub x: f64,
  pub y: f64,
  pub radius: f64,
  pub rotation_degrees: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_scale: Option<f64>,
}

#[derive(Serialize)]
pub struct SlotOutput {
  pub page: usize,
  pub x: f64,
  pub y: f64,
}

impl From<SheetSlot> for SlotOutput {
  fn from(SheetSlot { page, x, y }: SheetSlot) -> Self {
    SlotOutput { page, x, y }
  }
}

#[derive(Serialize)]
pub struct CardOutput<'a> {
  pub index: usize,
  pub sheet: SlotOutput,
  pub placements: Vec<PlacementOutput<'a>>,
}

#[derive(Serialize)]
pub struct DeckOutput<'a> {
  pub order: usize,
  pub card_radius: f64,
  pub margin: f64,
  pub seed: u64,
  pub page_count: usize,
  pub cards: Vec<CardOutput<'a>>,
}

impl<'a> DeckOutput<'a> {
  /// `deck` holds indices into `settings.symbols`.
  pub fn new(deck: &Deck<usize>, settings: &'a DeckSettings, layout: &SheetLayout) -> Self {
    let cards = deck
      .cards
      .iter()
      .enumerate()
      .map(|(index, card)| CardOutput {
        index,
        sheet: layout.position(index).into(),
        placements: card
          .placements
          .iter()
          .map(|&(symbol_ix, record)| {
            let symbol = &settings.symbols[symbol_ix];
            let image_scale = (symbol.width > 0 && symbol.height > 0)
              .then(|| record.image_scale(symbol.width as f64, symbol.height as f64));
            PlacementOutput {
              symbol: &symbol.name,
              x: record.center.x,
              y: record.center.y,
              radius: record.radius,
              rotation_degrees: record.rotation.to_degrees(),
              image_scale,
            }
          })
          .collect(),
      })
      .collect();

    DeckOutput {
      order: deck.order,
      card_radius: settings.card_radius,
      margin: settings.margin,
      seed: settings.seed,
      page_count: layout.page_count(deck.cards.len()),
      cards,
    }
  }
}

#[cfg(test)]
mod tests {
  use spot_it::generate_deck;

  use super::*;
  use crate::settings::SymbolSettings;

  fn settings() -> DeckSettings {
    let mut settings = DeckSettings {
      card_radius: 400.,
      margin: 3.,
      seed: 12,
      workers: 2,
      ..Default::default()
    };
    settings.sizing.base_fraction = 0.2;
    settings.sizing.min_scale = 0.5;
    settings.sizing.max_scale = 1.;
    settings.symbols = (0..7)
      .map(|ix| SymbolSettings {
        name: format!("{ix}.png"),
        width: if ix == 0 { 0 } else { 300 },
        height: 400,
      })
      .collect();
    settings
  }

  #[test]
  fn test_deck_output_json() {
    let settings = settings();
    let symbol_ixs: Vec<usize> = (0..settings.symbols.len()).collect();
    let deck = generate_deck(&symbol_ixs, &settings.deck_options()).unwrap();
    let output = DeckOutput::new(&deck, &settings, &SheetLayout::letter());

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["order"], 2);
    assert_eq!(json["page_count"], 2);
    let cards = json["cards"].as_array().unwrap();
    assert_eq!(cards.len(), 7);
    assert_eq!(cards[6]["sheet"]["page"], 1);

    for card in cards {
      for placement in card["placements"].as_array().unwrap() {
        let radius = placement["radius"].as_f64().unwrap();
        assert!(radius > 39.999 && radius < 80.001, "{radius}");
        let has_scale = placement.get("image_scale").is_some();
        assert_eq!(has_scale, placement["symbol"] != "0.png");
      }
    }
  }
}
