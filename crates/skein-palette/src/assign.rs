// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Collision-free color assignment.

use crate::color::{Color, DELIVERY_BLUE};
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use skein_model::{SupplierId, SupplierRecord};
use thiserror::Error;

/// Retry ceiling per supplier when rejection-sampling an unused color.
///
/// The dark band holds millions of distinct RGB values, so hitting this
/// means a pathological RNG rather than a crowded palette.
pub const MAX_DRAWS: usize = 10_000;

/// Color assignment failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Rejection sampling failed to find an unused color within the ceiling.
    #[error("no unused color found after {attempts} draws")]
    ColorSpaceExhausted {
        /// Draws made before giving up.
        attempts: usize,
    },
}

/// Read-only mapping from supplier id to display color.
///
/// Built once per record set by [`assign_colors`]; iteration follows the
/// first-occurrence order of supplier ids in the input, so downstream
/// output stays reproducible for a fixed RNG seed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorAssignment {
    colors: FxHashMap<SupplierId, Color>,
    order: Vec<SupplierId>,
}

impl ColorAssignment {
    /// Color assigned to a supplier, if any record carried this id.
    pub fn color_of(&self, id: &SupplierId) -> Option<Color> {
        self.colors.get(id).copied()
    }

    /// Number of distinct suppliers assigned.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no supplier was assigned.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(id, color)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&SupplierId, Color)> {
        self.order
            .iter()
            .filter_map(|id| self.colors.get(id).map(|c| (id, *c)))
    }
}

/// Assign one unique dark color to each distinct supplier id.
///
/// Records are walked in input order. The first record carrying a given id
/// fixes its color; later records with the same id are no-ops. Every
/// assigned color is distinct from every other and from [`DELIVERY_BLUE`].
///
/// Pure over its inputs plus the RNG: the same records and the same seed
/// yield the same assignment. An empty record slice yields an empty
/// assignment.
///
/// # Errors
///
/// [`PaletteError::ColorSpaceExhausted`] if [`MAX_DRAWS`] rejections happen
/// for a single supplier. Not expected for realistic supplier counts.
pub fn assign_colors<R: Rng>(
    records: &[SupplierRecord],
    rng: &mut R,
) -> Result<ColorAssignment, PaletteError> {
    let mut used: FxHashSet<Color> = FxHashSet::default();
    used.insert(DELIVERY_BLUE);

    let mut assignment = ColorAssignment::default();
    for record in records {
        if assignment.colors.contains_key(&record.supplier_id) {
            // first occurrence wins
            continue;
        }
        let color = draw_unused(&used, rng)?;
        used.insert(color);
        assignment.order.push(record.supplier_id.clone());
        assignment
            .colors
            .insert(record.supplier_id.clone(), color);
    }
    Ok(assignment)
}

/// Rejection-sample a dark color absent from `used`.
fn draw_unused<R: Rng>(used: &FxHashSet<Color>, rng: &mut R) -> Result<Color, PaletteError> {
    for _ in 0..MAX_DRAWS {
        let candidate = Color::random_dark(rng);
        if !used.contains(&candidate) {
            return Ok(candidate);
        }
    }
    Err(PaletteError::ColorSpaceExhausted {
        attempts: MAX_DRAWS,
    })
}
