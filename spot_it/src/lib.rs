//! Builds the cards of a Spot-It style deck: which symbols go on each card, and where on the card
//! each of them lands.  Drawing the cards is left to the caller.

pub mod card;
pub mod deck;
pub mod sheet;
pub mod sizing;

pub use card::{assemble_card, Card, CardGeometry, UnpackableCardError, CARD_ATTEMPTS};
pub use deck::{assemble_deck, generate_deck, Deck, DeckError, DeckOptions};
pub use packing::{PlacementRecord, RIM_FACTOR};
pub use projective_plane::{InvalidDesignError, PlanePoint};
pub use sheet::{SheetLayout, SheetSlot};
pub use sizing::SymbolSizing;
