use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Palette;

impl Serialize for Palette {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let base64 = BASE64_STANDARD.encode(self.to_bytes());
        serializer.serialize_str(&base64)
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let base64 = String::deserialize(deserializer)?;
        let bytes = BASE64_STANDARD
            .decode(base64)
            .map_err(serde::de::Error::custom)?;
        Self::from_bytes(&bytes).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Fractal, FractalParams};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Preset {
        params: FractalParams,
        fractal: Fractal,
        palette: Palette,
    }

    #[test]
    fn test_preset_cbor() {
        let preset = Preset {
            params: FractalParams::new(0.02, 2.5, 0.4, 5).unwrap(),
            fractal: Fractal::Turbulence,
            palette: Palette::terrain(),
        };
        let bytes = serde_cbor::to_vec(&preset).unwrap();
        let decoded: Preset = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(preset, decoded);
    }

    #[test]
    fn test_palette_is_base64_string() {
        let palette = Palette::gradient(Color::BLACK, Color::new(0, 0, 255));
        let value = serde_cbor::value::to_value(&palette).unwrap();
        match value {
            serde_cbor::Value::Text(text) => {
                assert_eq!(BASE64_STANDARD.decode(text).unwrap(), palette.to_bytes())
            }
            other => panic!("expected a string, got {:?}", other),
        }
    }

    #[test]
    fn test_palette_rejects_short_bytes() {
        let encoded = serde_cbor::to_vec(&BASE64_STANDARD.encode([1u8, 2, 3])).unwrap();
        let decoded: Result<Palette, _> = serde_cbor::from_slice(&encoded);
        assert!(decoded.is_err());
    }
}
