// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core value objects for supplier and geography data.
//!
//! These types are pure domain objects. Postal codes and supplier ids are
//! opaque string tokens—no format validation, no normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Postal code of a manufacturing site or delivery center.
///
/// Treated as an opaque token: `"00000"` is as valid a key as `"30301"`—
/// whether it resolves is the lookup dataset's business.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZipCode(pub String);

impl ZipCode {
    /// Build a code from anything string-like.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The raw code text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ZipCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

/// Supplier identifier.
///
/// NOT unique across records: the same supplier may contribute several
/// records, each carrying one manufacturing site. Components that key on
/// supplier id must decide what duplicates mean (the palette fixes
/// first-occurrence-wins).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub String);

impl SupplierId {
    /// Build an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SupplierId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// A resolved coordinate in degrees.
///
/// Produced only for postal codes present in a lookup dataset; there is no
/// "unknown" sentinel value—absence is expressed as `Option::None` at the
/// port boundary.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point from latitude/longitude degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One manufacturing site and the delivery centers it ships to.
///
/// Delivery-center order is meaningful: the scene resolver emits primitives
/// in exactly this order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Postal code of the manufacturing location.
    pub zip: ZipCode,
    /// Destination postal codes, in shipping-lane order.
    pub delivery_centers: Vec<ZipCode>,
}

impl Site {
    /// Build a site from its zip and destination codes.
    pub fn new(zip: impl Into<ZipCode>, delivery_centers: Vec<ZipCode>) -> Self {
        Self {
            zip: zip.into(),
            delivery_centers,
        }
    }
}

/// One supplier record: an id plus its manufacturing sites.
///
/// Input data arrives as an ordered slice of these; record order is
/// preserved through color assignment and geometry resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    /// Supplier identifier (may repeat across records).
    pub supplier_id: SupplierId,
    /// Manufacturing sites, in input order.
    pub manufacturing_sites: Vec<Site>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zip_code_is_transparent_in_json() {
        let site = Site::new("30301", vec![ZipCode::from("72712")]);
        let json = serde_json::to_value(&site).unwrap();
        assert_eq!(json["zip"], "30301");
        assert_eq!(json["delivery_centers"][0], "72712");
    }

    #[test]
    fn record_deserializes_from_plain_json() {
        let json = r#"{
            "supplier_id": "SUP001",
            "manufacturing_sites": [
                { "zip": "30301", "delivery_centers": ["72712", "00000"] }
            ]
        }"#;
        let record: SupplierRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.supplier_id.as_str(), "SUP001");
        assert_eq!(record.manufacturing_sites[0].delivery_centers.len(), 2);
    }
}
