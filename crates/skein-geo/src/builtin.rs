// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Compiled-in US centroid table.

use crate::ZipIndex;
use skein_model::{GeoPoint, ZipCode};

/// Centroids for the postal codes the demo dataset references, plus a few
/// common metros. Coordinates are zip-area centroids, precise enough for
/// national-scale map markers.
const TABLE: &[(&str, f64, f64)] = &[
    // manufacturing sites
    ("30301", 33.8444, -84.4741),  // Atlanta, GA
    ("13210", 43.0364, -76.1245),  // Syracuse, NY
    ("97035", 45.4140, -122.7250), // Lake Oswego, OR
    ("85281", 33.4255, -111.9400), // Tempe, AZ
    ("83401", 43.4930, -111.9930), // Idaho Falls, ID
    // delivery centers
    ("72712", 36.3729, -94.2088),  // Bentonville, AR
    ("72143", 35.2506, -91.7362),  // Searcy, AR
    ("32615", 29.7805, -82.4847),  // Alachua, FL
    ("13403", 43.1668, -75.2774),  // Marcy, NY
    ("03077", 43.0362, -71.1834),  // Raymond, NH
    ("49036", 41.9403, -85.0005),  // Coldwater, MI
    ("96080", 40.1785, -122.2358), // Red Bluff, CA
    ("90001", 33.9731, -118.2479), // Los Angeles, CA
    ("94101", 37.7749, -122.4194), // San Francisco, CA
    // common metros
    ("10001", 40.7506, -73.9972),  // New York, NY
    ("60601", 41.8858, -87.6229),  // Chicago, IL
    ("75201", 32.7876, -96.7994),  // Dallas, TX
    ("98101", 47.6114, -122.3305), // Seattle, WA
];

/// Build the builtin index.
///
/// Codes outside the table (the demo's `"00000"` included) miss, which is
/// exactly the degradation path the scene resolver is built around.
pub fn builtin_index() -> ZipIndex {
    ZipIndex::from_entries(
        TABLE
            .iter()
            .map(|&(code, lat, lon)| (ZipCode::from(code), GeoPoint::new(lat, lon))),
    )
}
