//! Where finished cards go on printed pages.  Units are PDF points (1/72 inch) with the origin at
//! the bottom left of the page; positions refer to the bottom left corner of the card's square.

const POINTS_PER_INCH: f64 = 72.;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetSlot {
  pub page: usize,
  pub x: f64,
  pub y: f64,
}

/// A grid of equally sized square cards with even gutters between them and the page edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetLayout {
  pub page_width: f64,
  pub page_height: f64,
  pub card_width: f64,
  pub columns: usize,
  pub rows: usize,
}

impl SheetLayout {
  /// 3.5 inch cards, two across and three down on US letter paper.
  pub fn letter() -> Self {
    SheetLayout {
      page_width: 8.5 * POINTS_PER_INCH,
      page_height: 11. * POINTS_PER_INCH,
      card_width: 3.5 * POINTS_PER_INCH,
      columns: 2,
      rows: 3,
    }
  }

  pub fn cards_per_page(&self) -> usize {
    self.columns * self.rows
  }

  pub fn horizontal_spacing(&self) -> f64 {
    (self.page_width - self.columns as f64 * self.card_width) / (self.columns + 1) as f64
  }

  pub fn vertical_spacing(&self) -> f64 {
    (self.page_height - self.rows as f64 * self.card_width) / (self.rows + 1) as f64
  }

  pub fn page_count(&self, card_count: usize) -> usize {
    card_count.div_ceil(self.cards_per_page().max(1))
  }

  /// Slots fill left to right, then top to bottom.
  pub fn position(&self, card_ix: usize) -> SheetSlot {
    let per_page = self.cards_per_page().max(1);
    let ix_on_page = card_ix % per_page;
    let column = ix_on_page % self.columns.max(1);
    let row = ix_on_page / self.columns.max(1);

    let h_spacing = self.horizontal_spacing();
    let v_spacing = self.vertical_spacing();
    SheetSlot {
      page: card_ix / per_page,
      x: h_spacing + (self.card_width + h_spacing) * column as f64,
      y: self.page_height - (self.card_width + v_spacing) * (row + 1) as f64,
    }
  }
}

impl Default for SheetLayout {
  fn default() -> Self {
    SheetLayout::letter()
  }
}
