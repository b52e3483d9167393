// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Drawable primitives and resolution accounting.

use serde::{Deserialize, Serialize};
use skein_model::{GeoPoint, SupplierId, ZipCode};
use skein_palette::Color;

/// One drawable unit of the map scene.
///
/// Primitives are emitted in draw order: a site's marker precedes its
/// lanes, and each lane's line precedes its delivery marker. Marker
/// variants carry the hover text the presentation layer shows, so the
/// renderer never re-derives label content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawPrimitive {
    /// A manufacturing-site marker in the supplier's color.
    SiteMarker {
        /// Supplier owning the site.
        supplier_id: SupplierId,
        /// Postal code of the site.
        zip: ZipCode,
        /// Resolved marker position.
        at: GeoPoint,
        /// The supplier's assigned color.
        color: Color,
        /// Hover text (`"Supplier: {id}, Zip: {zip}"`).
        label: String,
    },
    /// A delivery-center marker, always in the reserved blue.
    DeliveryMarker {
        /// Postal code of the delivery center.
        zip: ZipCode,
        /// Resolved marker position.
        at: GeoPoint,
        /// Always [`skein_palette::DELIVERY_BLUE`].
        color: Color,
        /// Hover text (`"DC: {zip}"`).
        label: String,
    },
    /// A shipping lane from a site to one of its delivery centers.
    ConnectingLine {
        /// Site end of the lane.
        from: GeoPoint,
        /// Delivery-center end of the lane.
        to: GeoPoint,
        /// The supplier's assigned color.
        color: Color,
    },
}

/// Accounting for what resolution dropped.
///
/// Unresolvable postal codes are policy, not errors: the scene still
/// renders, and these counters let an outer layer report what was left off
/// the map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveStats {
    /// Sites that resolved and produced a marker.
    pub sites_drawn: usize,
    /// Sites skipped whole (unresolved zip or supplier without a color).
    pub sites_skipped: usize,
    /// Delivery centers that produced a line + marker pair.
    pub centers_drawn: usize,
    /// Delivery centers skipped individually.
    pub centers_skipped: usize,
    /// Every code that failed to resolve, in encounter order.
    pub skipped_zips: Vec<ZipCode>,
}

impl ResolveStats {
    /// True when nothing was dropped.
    pub fn is_clean(&self) -> bool {
        self.sites_skipped == 0 && self.centers_skipped == 0
    }
}

/// A resolved map scene: ordered primitives plus drop accounting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Primitives in draw order.
    pub primitives: Vec<DrawPrimitive>,
    /// What resolution skipped.
    pub stats: ResolveStats,
}

impl Scene {
    /// Number of primitives in the scene.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// True when the scene draws nothing.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
