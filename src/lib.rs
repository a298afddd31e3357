//! Procedural 2D noise fields.
//!
//! A [`Simplex`] table feeds the fractal combinators in [`fractal`], a grid of
//! samples is collected into a [`NoiseField`], and [`raster::rasterize`] maps
//! the field through a 256-entry [`Palette`] into a caller-owned pixel buffer.

pub mod error;
pub mod field;
pub mod fractal;
pub mod palette;
pub mod raster;
#[cfg(feature = "serialize")]
pub mod rw;
pub mod simplex;

pub use error::NoiseError;
#[cfg(feature = "parallel")]
pub use field::sample_field_par;
pub use field::{generate_field, sample_field, NoiseField};
pub use fractal::{fbm, turbulence, Direction, Fractal, FractalParams, Param};
pub use palette::Palette;
pub use raster::{rasterize, rasterize_with, render_rgba, Normalizer, PixelFormat};
pub use simplex::Simplex;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Interpolate every channel towards `other`, truncating to `u8`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

fn lerp_channel(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (a as f64, b as f64);
    (a + t * (b - a)) as u8
}
