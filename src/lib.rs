//! Bancal models the rectangular planting grid of a garden bed and the
//! companion-planting relationships between the crops occupying it.
//!
//! Two small layers compose. [`GridSpec`] translates a linear slot index to
//! its row/column coordinate and enumerates the orthogonal neighbors that
//! exist within the bed's bounds. [`CompanionTable`] classifies crop pairs
//! as friends, enemies, or neutral, and combines the two layers to flag the
//! occupied neighbors a slot's crop conflicts with.
//!
//! Everything is a pure function over caller-supplied dimensions and
//! occupants. The built-in table is initialized once at first use and never
//! mutated, so all operations are safe to call from any number of threads.

mod companion;
mod conflict;
mod direction;
mod error;
mod grid;

pub use companion::*;
pub use conflict::*;
pub use direction::*;
pub use error::*;
pub use grid::*;
