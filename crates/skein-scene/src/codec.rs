// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CBOR encoding for handing scenes to out-of-process renderers.

use crate::primitives::Scene;
use thiserror::Error;

/// Scene encode/decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// CBOR serialization failed.
    #[error("scene encode failed: {0}")]
    Encode(String),
    /// Input bytes were not a valid scene.
    #[error("scene decode failed: {0}")]
    Decode(String),
}

/// Encode a scene as CBOR bytes.
pub fn encode_scene(scene: &Scene) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    ciborium::ser::into_writer(scene, &mut buf).map_err(|e| CodecError::Encode(e.to_string()))?;
    Ok(buf)
}

/// Decode a scene from CBOR bytes.
pub fn decode_scene(bytes: &[u8]) -> Result<Scene, CodecError> {
    ciborium::de::from_reader(bytes).map_err(|e: ciborium::de::Error<std::io::Error>| {
        CodecError::Decode(e.to_string())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::primitives::DrawPrimitive;
    use skein_model::{GeoPoint, ZipCode};
    use skein_palette::DELIVERY_BLUE;

    #[test]
    fn scene_survives_cbor() {
        let mut scene = Scene::default();
        scene.primitives.push(DrawPrimitive::DeliveryMarker {
            zip: ZipCode::from("72712"),
            at: GeoPoint::new(36.3729, -94.2088),
            color: DELIVERY_BLUE,
            label: "DC: 72712".to_owned(),
        });
        scene.stats.centers_drawn = 1;

        let bytes = encode_scene(&scene).unwrap();
        let back = decode_scene(&bytes).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_scene(&[0xff, 0x00, 0x13]).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }
}
