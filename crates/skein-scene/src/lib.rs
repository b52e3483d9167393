// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scene geometry for the supply-chain map.
//!
//! [`resolve_geometry`] turns supplier records, a color assignment, and a
//! geocode lookup into a flat, ordered list of draw primitives. Renderers
//! are dumb: they receive the primitive list and draw it, in order, with no
//! domain logic of their own.
//!
//! # Design Principles
//!
//! - **No randomness here** — colors arrive pre-assigned; resolution is a
//!   deterministic fold over the records.
//! - **Missing geodata degrades, never aborts** — unresolvable codes drop
//!   their primitives and are counted in [`ResolveStats`], but nothing in
//!   this crate returns an error for them.
//! - **Serialization at the edge** — primitives carry serde derives and a
//!   CBOR codec for out-of-process renderers; in-process consumers use the
//!   types directly.

mod codec;
mod primitives;
mod resolve;

pub use codec::{decode_scene, encode_scene, CodecError};
pub use primitives::{DrawPrimitive, ResolveStats, Scene};
pub use resolve::resolve_geometry;
