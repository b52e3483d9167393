// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Domain objects for the supply-chain map core.
//!
//! This crate defines the value objects shared by the palette and scene
//! crates, plus the [`ZipLookup`] port through which postal codes resolve
//! to coordinates. It contains NO rendering or serialization-format logic
//! beyond serde derives—scene encoding lives in skein-scene.
//!
//! # Design Principles
//!
//! - **Records are immutable input** — nothing in this workspace mutates a
//!   `SupplierRecord` after construction.
//! - **Lookup is a port** — the geocode dataset is an external collaborator
//!   behind [`ZipLookup`]; the core never owns or reloads it.

mod demo;
mod port;
mod types;

pub use demo::demo_records;
pub use port::ZipLookup;
pub use types::{GeoPoint, Site, SupplierId, SupplierRecord, ZipCode};
