//! Random, non-overlapping placement of circles inside a circular card.
//!
//! Rather than throwing darts and rejecting collisions, the packer picks a direction and then works
//! out analytically which distances along that ray are still free, using [`IntervalSet`] algebra.

pub mod interval;
pub mod placement;

pub use interval::{Interval, IntervalSet};
pub use placement::{CardFull, PlacementEngine, PlacementRecord, LOCAL_ATTEMPTS, RIM_FACTOR};
