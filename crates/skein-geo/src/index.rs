// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The zip index proper.

use rustc_hash::FxHashMap;
use skein_model::{GeoPoint, ZipCode, ZipLookup};

/// Postal-code centroid index.
///
/// Construct with [`ZipIndex::from_entries`] (or [`crate::builtin_index`])
/// and hand it to the scene resolver as its [`ZipLookup`]. Codes absent
/// from the index simply fail to resolve; that is the expected shape of
/// partial geocode data, not an error.
#[derive(Clone, Debug, Default)]
pub struct ZipIndex {
    table: FxHashMap<ZipCode, GeoPoint>,
}

impl ZipIndex {
    /// Build an index from `(code, point)` pairs.
    ///
    /// Later duplicates overwrite earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = (ZipCode, GeoPoint)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
        }
    }

    /// Add or replace one code.
    pub fn insert(&mut self, zip: ZipCode, point: GeoPoint) {
        self.table.insert(zip, point);
    }

    /// Resolve one code.
    pub fn get(&self, zip: &ZipCode) -> Option<GeoPoint> {
        self.table.get(zip).copied()
    }

    /// Number of codes in the index.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when the index holds no codes.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl ZipLookup for ZipIndex {
    fn lookup(&self, zip: &ZipCode) -> Option<GeoPoint> {
        self.get(zip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_entries_last_duplicate_wins() {
        let zip = ZipCode::from("30301");
        let index = ZipIndex::from_entries([
            (zip.clone(), GeoPoint::new(0.0, 0.0)),
            (zip.clone(), GeoPoint::new(33.749, -84.388)),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&zip), Some(GeoPoint::new(33.749, -84.388)));
    }

    #[test]
    fn missing_codes_miss_quietly() {
        let index = ZipIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.lookup(&ZipCode::from("00000")), None);
    }
}
