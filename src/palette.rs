use crate::{Color, NoiseError};

pub const PALETTE_SIZE: usize = 256;

/// A 256-entry color lookup table, indexed by normalized intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    fn from_fn(f: impl Fn(f64) -> Color) -> Self {
        let mut colors = [Color::default(); PALETTE_SIZE];
        for (i, color) in colors.iter_mut().enumerate() {
            let pct = i as f64 / (PALETTE_SIZE - 1) as f64;
            *color = f(pct);
        }
        Self { colors }
    }

    /// Linear gradient from `start` (index 0) to `end` (index 255).
    pub fn gradient(start: Color, end: Color) -> Self {
        Self::from_fn(|pct| start.lerp(&end, pct))
    }

    /// Two gradients side by side: `c1 -> c2` on the lower half of the table
    /// and `c3 -> c4` on the upper half.
    ///
    /// The upper half is driven by `pct * 1.5 - 0.5`, so it starts about a
    /// quarter of the way into `c3 -> c4` and reaches `c4` only at index 255.
    pub fn dual_gradient(c1: Color, c2: Color, c3: Color, c4: Color) -> Self {
        Self::from_fn(|pct| {
            if pct < 0.5 {
                c1.lerp(&c2, pct * 2.0)
            } else {
                c3.lerp(&c4, pct * 1.5 - 0.5)
            }
        })
    }

    /// Build from 2 anchors ([`Palette::gradient`]) or 4 anchors
    /// ([`Palette::dual_gradient`]).
    pub fn from_anchors(anchors: &[Color]) -> Result<Self, NoiseError> {
        match *anchors {
            [c1, c2] => Ok(Self::gradient(c1, c2)),
            [c1, c2, c3, c4] => Ok(Self::dual_gradient(c1, c2, c3, c4)),
            _ => Err(NoiseError::InvalidAnchorCount(anchors.len())),
        }
    }

    /// Deep blue water into light blue, then green land into white peaks.
    pub fn terrain() -> Self {
        Self::dual_gradient(
            Color::new(0, 0, 175),
            Color::new(80, 160, 244),
            Color::new(12, 192, 75),
            Color::new(255, 255, 255),
        )
    }

    pub fn get(&self, index: u8) -> Color {
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    /// Packed `r, g, b` triples, 768 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, NoiseError> {
        if bytes.len() != PALETTE_SIZE * 3 {
            return Err(NoiseError::InvalidPaletteBytes(bytes.len()));
        }
        let mut colors = [Color::default(); PALETTE_SIZE];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            *color = Color::new(rgb[0], rgb[1], rgb[2]);
        }
        Ok(Self { colors })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::gradient(Color::BLACK, Color::WHITE)
    }
}

impl std::ops::Index<u8> for Palette {
    type Output = Color;

    fn index(&self, index: u8) -> &Color {
        &self.colors[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_endpoints() {
        let c = Color::new(12, 34, 56);
        let palette = Palette::gradient(c, c);
        assert!(palette.iter().all(|&x| x == c));
    }

    #[test]
    fn test_gradient_endpoints() {
        let palette = Palette::gradient(Color::BLACK, Color::WHITE);
        assert_eq!(palette.get(0), Color::BLACK);
        assert_eq!(palette.get(255), Color::WHITE);
        for i in 1..=255u8 {
            assert!(palette[i].r >= palette[i - 1].r, "not monotonic at {}", i);
        }
    }

    #[test]
    fn test_dual_gradient_shape() {
        let c1 = Color::new(0, 0, 175);
        let c2 = Color::new(80, 160, 244);
        let c3 = Color::new(12, 192, 75);
        let c4 = Color::new(255, 255, 255);
        let palette = Palette::dual_gradient(c1, c2, c3, c4);

        assert_eq!(palette[0], c1);

        // index 127 is the last entry below the midpoint: close to c2
        let below = palette[127];
        assert!(below.r.abs_diff(c2.r) <= 1);
        assert!(below.g.abs_diff(c2.g) <= 1);
        assert!(below.b.abs_diff(c2.b) <= 1);

        // the upper half does not start at c3
        let pct = 128.0 / 255.0;
        assert_eq!(palette[128], c3.lerp(&c4, pct * 1.5 - 0.5));
        assert_ne!(palette[128], c3);

        assert_eq!(palette[255], c3.lerp(&c4, 1.0 * 1.5 - 0.5));
        assert_eq!(palette[255], c4);
    }

    #[test]
    fn test_terrain_is_dual_gradient() {
        let palette = Palette::terrain();
        assert_eq!(palette[0], Color::new(0, 0, 175));
        assert_eq!(palette[255], Color::WHITE);
    }

    #[test]
    fn test_from_anchors() {
        let a = Color::new(1, 2, 3);
        let b = Color::new(200, 100, 50);
        assert_eq!(Palette::from_anchors(&[a, b]).unwrap(), Palette::gradient(a, b));
        assert_eq!(
            Palette::from_anchors(&[a, b, b, a]).unwrap(),
            Palette::dual_gradient(a, b, b, a)
        );
        assert_eq!(
            Palette::from_anchors(&[a, b, a]),
            Err(NoiseError::InvalidAnchorCount(3))
        );
        assert_eq!(Palette::from_anchors(&[]), Err(NoiseError::InvalidAnchorCount(0)));
    }

    #[test]
    fn test_bytes() {
        let palette = Palette::terrain();
        let bytes = palette.to_bytes();
        assert_eq!(bytes.len(), 768);
        assert_eq!(&bytes[..3], &[0, 0, 175]);
        assert_eq!(Palette::from_bytes(&bytes).unwrap(), palette);
        assert_eq!(
            Palette::from_bytes(&bytes[1..]),
            Err(NoiseError::InvalidPaletteBytes(767))
        );
    }
}
