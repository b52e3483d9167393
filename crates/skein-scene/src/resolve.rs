// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Geometry resolution.

use crate::primitives::{DrawPrimitive, Scene};
use skein_model::{Site, SupplierRecord, ZipLookup};
use skein_palette::{Color, ColorAssignment, DELIVERY_BLUE};

/// Resolve records into an ordered draw list.
///
/// Walks records in input order, each record's sites in order, each site's
/// delivery centers in order:
///
/// 1. A site whose zip does not resolve is skipped whole—none of its
///    delivery centers are drawn. Same if its supplier has no color in
///    `colors` (a scene cannot draw an uncolored marker).
/// 2. A resolved site emits one [`DrawPrimitive::SiteMarker`] in the
///    supplier's color.
/// 3. Each resolving delivery center emits one
///    [`DrawPrimitive::ConnectingLine`] (site → center, supplier color)
///    then one [`DrawPrimitive::DeliveryMarker`] (reserved blue). A center
///    that fails to resolve is skipped alone; its siblings still draw.
///
/// No randomness, no I/O: identical inputs produce the identical scene.
/// Unresolvable codes are counted in the scene's stats, never errored.
pub fn resolve_geometry(
    records: &[SupplierRecord],
    colors: &ColorAssignment,
    lookup: impl ZipLookup,
) -> Scene {
    let mut scene = Scene::default();
    for record in records {
        let Some(color) = colors.color_of(&record.supplier_id) else {
            scene.stats.sites_skipped += record.manufacturing_sites.len();
            continue;
        };
        for site in &record.manufacturing_sites {
            resolve_site(record, site, color, &lookup, &mut scene);
        }
    }
    scene
}

fn resolve_site(
    record: &SupplierRecord,
    site: &Site,
    color: Color,
    lookup: &impl ZipLookup,
    scene: &mut Scene,
) {
    let Some(site_at) = lookup.lookup(&site.zip) else {
        scene.stats.sites_skipped += 1;
        scene.stats.skipped_zips.push(site.zip.clone());
        return;
    };

    scene.primitives.push(DrawPrimitive::SiteMarker {
        supplier_id: record.supplier_id.clone(),
        zip: site.zip.clone(),
        at: site_at,
        color,
        label: format!("Supplier: {}, Zip: {}", record.supplier_id, site.zip),
    });
    scene.stats.sites_drawn += 1;

    for dc in &site.delivery_centers {
        let Some(dc_at) = lookup.lookup(dc) else {
            scene.stats.centers_skipped += 1;
            scene.stats.skipped_zips.push(dc.clone());
            continue;
        };
        scene.primitives.push(DrawPrimitive::ConnectingLine {
            from: site_at,
            to: dc_at,
            color,
        });
        scene.primitives.push(DrawPrimitive::DeliveryMarker {
            zip: dc.clone(),
            at: dc_at,
            color: DELIVERY_BLUE,
            label: format!("DC: {dc}"),
        });
        scene.stats.centers_drawn += 1;
    }
}
