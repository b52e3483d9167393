// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory postal-code index.
//!
//! A thin map from [`ZipCode`] to [`GeoPoint`] implementing the
//! [`ZipLookup`] port. Loaded once, read forever; there is no reload path
//! and nothing here touches the filesystem or network.

mod builtin;
mod index;

pub use builtin::builtin_index;
pub use index::ZipIndex;

#[doc(no_inline)]
pub use skein_model::{GeoPoint, ZipCode, ZipLookup};
