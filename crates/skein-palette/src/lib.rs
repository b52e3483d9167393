// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Unique display colors for suppliers.
//!
//! Every supplier on the map gets its own dark color, distinct from every
//! other supplier and from the reserved delivery-center blue. Assignment is
//! rejection sampling over an explicit used-color set with an explicit RNG;
//! there is no hidden module state, so two calls with the same records and
//! the same seed produce the same palette.

mod assign;
mod color;

pub use assign::{assign_colors, ColorAssignment, PaletteError, MAX_DRAWS};
pub use color::{Color, ParseColorError, DELIVERY_BLUE};
