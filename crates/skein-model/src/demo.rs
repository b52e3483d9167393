// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The builtin demonstration dataset.

use crate::{Site, SupplierId, SupplierRecord, ZipCode};

fn record(id: &str, site_zip: &str, centers: &[&str]) -> SupplierRecord {
    SupplierRecord {
        supplier_id: SupplierId::from(id),
        manufacturing_sites: vec![Site::new(
            site_zip,
            centers.iter().copied().map(ZipCode::from).collect(),
        )],
    }
}

/// The five demo supplier records used by the CLI and tests.
///
/// SUP001 and SUP002 each appear twice (one site per record), exercising
/// the duplicate-id contract; SUP003 appears once. Several records share
/// delivery centers, so overlapping lanes show up on the map.
pub fn demo_records() -> Vec<SupplierRecord> {
    vec![
        // Atlanta, GA
        record("SUP001", "30301", &["72712", "72143", "32615"]),
        // Syracuse, NY
        record("SUP001", "13210", &["13403", "03077", "49036"]),
        // Portland, OR
        record("SUP002", "97035", &["72712", "72143", "96080"]),
        // Tempe, AZ
        record("SUP002", "85281", &["72712", "72143", "96080"]),
        // Idaho Falls, ID
        record("SUP003", "83401", &["90001", "94101"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_set_has_expected_shape() {
        let records = demo_records();
        assert_eq!(records.len(), 5);

        let distinct: std::collections::BTreeSet<_> =
            records.iter().map(|r| r.supplier_id.clone()).collect();
        assert_eq!(distinct.len(), 3, "three distinct suppliers");

        for r in &records {
            assert_eq!(r.manufacturing_sites.len(), 1, "one site per record");
        }
    }
}
