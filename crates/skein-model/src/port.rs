// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geocode lookup port.

use crate::{GeoPoint, ZipCode};
use std::collections::HashMap;

/// Postal-code geocoding port.
///
/// Implementors map postal codes to coordinates. The scene resolver treats
/// this as a pure, read-only capability.
///
/// # Contract
///
/// - A given code must resolve to the same answer for the lifetime of the
///   process (deterministic read).
/// - Absence is an answer, not an error: `None` means the code is not in
///   the dataset, and callers degrade gracefully.
pub trait ZipLookup {
    /// Resolve a postal code, or `None` if the dataset does not know it.
    fn lookup(&self, zip: &ZipCode) -> Option<GeoPoint>;
}

impl<T: ZipLookup + ?Sized> ZipLookup for &T {
    fn lookup(&self, zip: &ZipCode) -> Option<GeoPoint> {
        (**self).lookup(zip)
    }
}

/// Plain maps are lookups; handy for tests and ad-hoc datasets.
impl ZipLookup for HashMap<ZipCode, GeoPoint> {
    fn lookup(&self, zip: &ZipCode) -> Option<GeoPoint> {
        self.get(zip).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashmap_lookup_misses_return_none() {
        let mut table = HashMap::new();
        table.insert(ZipCode::from("30301"), GeoPoint::new(33.749, -84.388));

        assert!(table.lookup(&ZipCode::from("30301")).is_some());
        assert!(table.lookup(&ZipCode::from("00000")).is_none());
    }

    #[test]
    fn reference_forwarding_matches_owner() {
        let mut table = HashMap::new();
        table.insert(ZipCode::from("97035"), GeoPoint::new(45.41, -122.72));

        let by_ref: &dyn ZipLookup = &table;
        assert_eq!(
            by_ref.lookup(&ZipCode::from("97035")),
            table.lookup(&ZipCode::from("97035"))
        );
    }
}
